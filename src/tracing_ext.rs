//! Tracing integration for rail-result.
//!
//! With the feature enabled, the crate records three kinds of events:
//!
//! - an `ERROR` event right before a terminal extractor panics on the wrong variant
//! - a `WARN` event when [`Outcome::unwrap_unchecked`] or [`Outcome::unwrap_or_default`]
//!   discards an error
//! - whatever the caller asks for through [`TracingOutcomeExt`]
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! rail-result = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use tracing::Level;

use crate::traits::ErrorChain;
use crate::types::{DynError, Outcome};

/// Extension trait that records failed outcomes as tracing events.
///
/// The outcome passes through unchanged, so the methods slot into a combinator chain.
///
/// # Example
///
/// ```rust
/// use rail_result::tracing_ext::TracingOutcomeExt;
/// use rail_result::Outcome;
///
/// let loaded: Outcome<String> = Outcome::from_err("config missing");
/// let value = loaded
///     .log_err("loading configuration")
///     .unwrap_or_else(|_| String::from("defaults"));
/// assert_eq!(value, "defaults");
/// ```
pub trait TracingOutcomeExt: Sized {
    /// Records a failure as an `ERROR` event with `message`.
    fn log_err(self, message: &str) -> Self {
        self.log_err_at(Level::ERROR, message)
    }

    /// Records a failure as an event at `level` with `message`.
    fn log_err_at(self, level: Level, message: &str) -> Self;
}

impl<T> TracingOutcomeExt for Outcome<T> {
    fn log_err_at(self, level: Level, message: &str) -> Self {
        if let Self::Err(error) = &self {
            emit(level, message, &error.display_chain());
        }
        self
    }
}

fn emit(level: Level, message: &str, chain: &dyn Display) {
    if level == Level::ERROR {
        tracing::error!(error = %chain, "{message}");
    } else if level == Level::WARN {
        tracing::warn!(error = %chain, "{message}");
    } else if level == Level::INFO {
        tracing::info!(error = %chain, "{message}");
    } else if level == Level::DEBUG {
        tracing::debug!(error = %chain, "{message}");
    } else {
        tracing::trace!(error = %chain, "{message}");
    }
}

/// Records a terminal extractor called on the wrong variant.
pub(crate) fn record_misuse(method: &str, detail: &dyn Display) {
    tracing::error!(detail = %detail, "{method}");
}

/// Records an error dropped by a defaulting extractor.
pub(crate) fn record_discarded(method: &'static str, error: &DynError) {
    tracing::warn!(method, error = %error.display_chain(), "outcome error discarded");
}

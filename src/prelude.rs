//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rail_result::prelude::*;
//!
//! let outcome: Outcome<i32> = "7".parse::<i32>().into_outcome();
//! assert!(outcome.contains(&7));
//! ```

pub use crate::traits::{ErrorChain, ResultExt};
pub use crate::types::{BoxError, Outcome};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TracingOutcomeExt;

//! A success-or-failure container with a type-erased error side.
//!
//! [`Outcome<T>`] is either `Ok(T)` or `Err(BoxError)`. Because the failure side is a boxed
//! `dyn Error`, one outcome type carries failures from any source:
//!
//! - existing errors keep their `source()` chain, which
//!   [`contains_err`](Outcome::contains_err) searches
//! - arbitrary values become a [`ValueError`] whose payload stays retrievable through
//!   [`err_val`](Outcome::err_val)
//!
//! Every combinator is total. Only the four terminal extractors (`unwrap`, `expect`,
//! `unwrap_err`, `expect_err`) panic, and only when called on the wrong variant.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use rail_result::Outcome;
//!
//! let total = Outcome::Ok(3)
//!     .and_then(|x| if x > 0 { Outcome::Ok(x * 10) } else { Outcome::from_val(x) })
//!     .map(|x| x + 1)
//!     .unwrap_or(0);
//! assert_eq!(total, 31);
//! ```
//!
//! ## Interop with `Result`
//!
//! ```
//! use rail_result::{prelude::*, BoxError};
//!
//! fn port(raw: &str) -> Result<u16, BoxError> {
//!     let port = raw.parse::<u16>().into_outcome().map(|p| p.max(1024));
//!     port.into_result()
//! }
//!
//! assert_eq!(port("80").unwrap(), 1024);
//! assert!(port("http").is_err());
//! ```
//!
//! ## Arbitrary failure payloads
//!
//! ```
//! use rail_result::Outcome;
//!
//! let failed: Outcome<u8> = Outcome::from_val(vec![3, 1]);
//! assert_eq!(failed.to_string(), "Err([3, 1])");
//! assert_eq!(failed.downcast_err_val::<Vec<i32>>(), Some(&vec![3, 1]));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Free-function combinators and batch conversions
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Cause-chain traversal and `Result` adapters
pub mod traits;
/// The `Outcome` container and its failure types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{BoxError, DynError, ErrVal, ErrorVec, Outcome, ValueError};

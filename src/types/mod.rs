//! Core data types: the [`Outcome`] container and its failure representations.
//!
//! # Examples
//!
//! ```
//! use rail_result::{Outcome, ErrVal};
//!
//! let ok: Outcome<i32> = Outcome::Ok(5);
//! assert_eq!(ok.map(|x| x * 2).ok(), Some(&10));
//!
//! let failed: Outcome<i32> = Outcome::from_val(404_u16);
//! assert_eq!(failed.downcast_err_val::<u16>(), Some(&404));
//! assert_eq!(failed.to_string(), "Err(404)");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod err_val;
pub mod outcome;
pub mod value_error;

pub use err_val::*;
pub use outcome::*;
pub use value_error::*;

/// The error object carried by a failed [`Outcome`].
pub type DynError = dyn core::error::Error + Send + Sync + 'static;

/// Owned, type-erased error stored in [`Outcome::Err`].
pub type BoxError = alloc_type::Box<DynError>;

/// SmallVec-backed collection used when accumulating failures.
///
/// Uses inline storage for a single element, the common case when a batch
/// fails once.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

//! Core traits for working with outcomes and their errors.
//!
//! - [`ErrorChain`]: cause-chain traversal and the containment comparator
//! - [`ResultExt`]: adapters from standard `Result` values into [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use rail_result::traits::{ErrorChain, ResultExt};
//!
//! let outcome = "12".parse::<u8>().into_outcome();
//! assert_eq!(outcome.unwrap(), 12);
//!
//! let failed = "300".parse::<u8>().into_outcome();
//! assert_eq!(failed.err().unwrap().causes().count(), 1);
//! ```

pub mod error_chain;
pub mod result_ext;

pub use error_chain::{Causes, DisplayChain, ErrorChain};
pub use result_ext::ResultExt;

//! Extension trait for moving standard `Result` values onto [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use rail_result::traits::ResultExt;
//!
//! let port = "8080".parse::<u16>().into_outcome().map(|p| p + 1);
//! assert_eq!(port.unwrap(), 8081);
//! ```

use crate::types::{BoxError, Outcome};
use core::any::Any;
use core::fmt::Debug;

/// Extension trait converting `Result<T, E>` into [`Outcome<T>`].
///
/// Two conversions are offered because the error side of a `Result` is not always an
/// error type:
///
/// - [`into_outcome`](ResultExt::into_outcome) for errors (and strings) that convert into
///   a [`BoxError`]; the cause chain is preserved
/// - [`into_outcome_val`](ResultExt::into_outcome_val) for any other value, which is
///   wrapped in a [`ValueError`](crate::ValueError) and stays retrievable
///
/// # Examples
///
/// ```
/// use rail_result::traits::ResultExt;
///
/// #[derive(Debug, PartialEq)]
/// enum Status {
///     Busy,
/// }
///
/// let result: Result<(), Status> = Err(Status::Busy);
/// let outcome = result.into_outcome_val();
/// assert_eq!(outcome.downcast_err_val::<Status>(), Some(&Status::Busy));
/// assert_eq!(outcome.err().unwrap().to_string(), "Busy");
/// ```
pub trait ResultExt<T, E> {
    /// Converts into an outcome, boxing the error.
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<BoxError>;

    /// Converts into an outcome, wrapping the error value as an arbitrary payload.
    fn into_outcome_val(self) -> Outcome<T>
    where
        E: Any + Debug + Send + Sync;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<BoxError>,
    {
        Outcome::from_result(self)
    }

    #[inline]
    fn into_outcome_val(self) -> Outcome<T>
    where
        E: Any + Debug + Send + Sync,
    {
        match self {
            Ok(value) => Outcome::Ok(value),
            Err(payload) => Outcome::from_val(payload),
        }
    }
}

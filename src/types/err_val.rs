use crate::types::DynError;
use core::any::Any;

/// Borrowed view of the value a failed [`Outcome`](crate::Outcome) was built from.
///
/// Returned by [`Outcome::err_val`](crate::Outcome::err_val):
///
/// - `Payload` when the failure was built from a non-error value (see
///   [`ValueError`](crate::ValueError)); it exposes that original value
/// - `Error` when the failure was built from an error; it exposes the error itself
///
/// # Examples
///
/// ```
/// use rail_result::{ErrVal, Outcome};
///
/// let failed: Outcome<()> = Outcome::from_val(17_i64);
/// match failed.err_val() {
///     Some(ErrVal::Payload(value)) => assert_eq!(value.downcast_ref::<i64>(), Some(&17)),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub enum ErrVal<'a> {
    Payload(&'a (dyn Any + Send + Sync)),
    Error(&'a DynError),
}

impl<'a> ErrVal<'a> {
    /// Returns `true` if this view holds a wrapped non-error payload.
    #[must_use]
    #[inline]
    pub fn is_payload(&self) -> bool {
        matches!(self, Self::Payload(_))
    }

    /// Returns the error if the failure was built from one.
    #[must_use]
    #[inline]
    pub fn as_error(&self) -> Option<&'a DynError> {
        match *self {
            Self::Error(error) => Some(error),
            Self::Payload(_) => None,
        }
    }

    /// Downcasts the wrapped payload to `P`.
    ///
    /// Always `None` for the `Error` variant; use [`downcast_error`](Self::downcast_error) there.
    #[must_use]
    #[inline]
    pub fn downcast_payload<P: Any>(&self) -> Option<&'a P> {
        match *self {
            Self::Payload(value) => value.downcast_ref::<P>(),
            Self::Error(_) => None,
        }
    }

    /// Downcasts the carried error to `E`.
    ///
    /// ```
    /// use rail_result::Outcome;
    /// use std::fmt;
    ///
    /// #[derive(Debug)]
    /// struct Timeout;
    /// impl fmt::Display for Timeout {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("timed out")
    ///     }
    /// }
    /// impl std::error::Error for Timeout {}
    ///
    /// let failed: Outcome<()> = Outcome::from_err(Timeout);
    /// let view = failed.err_val().unwrap();
    /// assert!(view.downcast_error::<Timeout>().is_some());
    /// assert!(view.downcast_payload::<Timeout>().is_none());
    /// ```
    #[must_use]
    #[inline]
    pub fn downcast_error<E>(&self) -> Option<&'a E>
    where
        E: core::error::Error + 'static,
    {
        match *self {
            Self::Error(error) => error.downcast_ref::<E>(),
            Self::Payload(_) => None,
        }
    }
}

use crate::types::alloc_type::{Box, String};
use crate::types::BoxError;
use core::any::Any;
use core::fmt::{Debug, Display, Write};

/// An error built from an arbitrary, non-error payload.
///
/// This type is produced by [`Outcome::from_val`](crate::Outcome::from_val) when the failure
/// value is not already a [`BoxError`]. The original payload is kept so it can be recovered
/// later through [`Outcome::err_val`](crate::Outcome::err_val), and a message is rendered
/// once, at construction time:
///
/// - `&'static str` and `String` payloads are used verbatim
/// - any other payload is rendered with its `Debug` form
///
/// `ValueError` has no source, so it is always the last link of a cause chain.
///
/// # Examples
///
/// ```
/// use rail_result::ValueError;
///
/// let err = ValueError::new("boom");
/// assert_eq!(err.to_string(), "boom");
/// assert_eq!(err.downcast_ref::<&str>(), Some(&"boom"));
///
/// let err = ValueError::new((7, 'x'));
/// assert_eq!(err.to_string(), "(7, 'x')");
/// ```
pub struct ValueError {
    pub(crate) payload: Box<dyn Any + Send + Sync>,
    pub(crate) message: String,
}

impl ValueError {
    /// Wraps `payload`, rendering its message immediately.
    pub fn new<P>(payload: P) -> Self
    where
        P: Any + Debug + Send + Sync,
    {
        let message = render(&payload);
        Self { payload: Box::new(payload), message }
    }

    /// Returns the original payload.
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send + Sync) {
        &*self.payload
    }

    /// Returns the payload as `P` if that is its concrete type.
    #[inline]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Returns `true` if the payload's concrete type is `P`.
    #[inline]
    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    /// Returns the rendered message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning the boxed payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + Sync> {
        self.payload
    }

    /// Converts into the error stored by a failed outcome.
    ///
    /// A payload that already is a [`BoxError`] is unwrapped and returned as-is so its
    /// cause chain is preserved; anything else stays wrapped.
    pub(crate) fn into_box_error(self) -> BoxError {
        match self.payload.downcast::<BoxError>() {
            Ok(error) => *error,
            Err(payload) => Box::new(Self { payload, message: self.message }),
        }
    }
}

fn render<P>(payload: &P) -> String
where
    P: Any + Debug,
{
    let any: &dyn Any = payload;
    if let Some(text) = any.downcast_ref::<&'static str>() {
        return String::from(*text);
    }
    if let Some(text) = any.downcast_ref::<String>() {
        return text.clone();
    }

    let mut message = String::new();
    let _ = write!(message, "{payload:?}");
    message
}

impl Debug for ValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValueError")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Display for ValueError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for ValueError {}

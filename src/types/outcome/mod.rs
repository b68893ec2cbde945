//! The success-or-failure container.
//!
//! [`Outcome<T>`] holds either a success value of type `T` or a type-erased [`BoxError`].
//! Operations are split by concern:
//! - construction, predicates and accessors live here
//! - the map / and / or family lives in `combinators`
//! - terminal extraction, the only operations that may panic, lives in `extract`

use crate::traits::ErrorChain;
use crate::types::{BoxError, DynError, ErrVal, ValueError};
use core::any::Any;
use core::fmt::Debug;

mod combinators;
mod extract;
mod traits;

/// Either a success value of type `T` or a type-erased error.
///
/// The failure side is always a [`BoxError`], so one `Outcome<T>` can carry failures from
/// any source: existing errors keep their `source()` chain, and arbitrary values are
/// wrapped in a [`ValueError`] that keeps the original value retrievable.
///
/// Every combinator consumes `self` and returns a new outcome. Only the terminal
/// extractors ([`unwrap`](Outcome::unwrap), [`expect`](Outcome::expect),
/// [`unwrap_err`](Outcome::unwrap_err), [`expect_err`](Outcome::expect_err)) can panic.
///
/// # Examples
///
/// ```
/// use rail_result::Outcome;
///
/// fn parse(input: &str) -> Outcome<i32> {
///     input.parse::<i32>().into()
/// }
///
/// assert_eq!(parse("21").map(|x| x * 2).unwrap(), 42);
/// assert!(parse("nope").is_err());
/// ```
#[must_use]
#[derive(Debug)]
pub enum Outcome<T> {
    Ok(T),
    Err(BoxError),
}

impl<T> Outcome<T> {
    /// Creates a failed outcome from an existing error.
    ///
    /// The error is stored unchanged, so its cause chain stays visible to
    /// [`contains_err`](Outcome::contains_err). Strings convert through the standard
    /// `From` impls for boxed errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let failed: Outcome<()> = Outcome::from_err("disk full");
    /// assert_eq!(failed.err().unwrap().to_string(), "disk full");
    /// ```
    #[inline]
    pub fn from_err<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Err(error.into())
    }

    /// Creates a failed outcome from an arbitrary value.
    ///
    /// A value that already is a [`BoxError`] is stored directly. Anything else is
    /// wrapped in a [`ValueError`], which renders a message from the value and keeps it
    /// for [`err_val`](Outcome::err_val).
    ///
    /// Concrete error types are not detected here; pass them to
    /// [`from_err`](Outcome::from_err) to keep them as carried errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let failed: Outcome<()> = Outcome::from_val("boom");
    /// assert!(failed.err().unwrap().to_string().contains("boom"));
    /// assert_eq!(failed.downcast_err_val::<&str>(), Some(&"boom"));
    /// ```
    #[inline]
    pub fn from_val<P>(payload: P) -> Self
    where
        P: Any + Debug + Send + Sync,
    {
        Self::Err(ValueError::new(payload).into_box_error())
    }

    /// Builds an outcome from a value and an optional error.
    ///
    /// Adapts the "value plus maybe-error" calling convention: `Some(error)` gives a
    /// failure (the value is dropped), `None` gives a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::wrap(42, None::<&str>).unwrap(), 42);
    /// assert!(Outcome::wrap(0, Some("refused")).is_err());
    /// ```
    #[inline]
    pub fn wrap<E>(value: T, error: Option<E>) -> Self
    where
        E: Into<BoxError>,
    {
        match error {
            Some(error) => Self::from_err(error),
            None => Self::Ok(value),
        }
    }

    /// Converts a standard `Result`, boxing its error.
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::from_err(error),
        }
    }

    /// Returns `true` if the outcome is a success.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the outcome is a success and the value matches `f`.
    ///
    /// `f` is not called on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert!(Outcome::Ok(4).is_ok_and(|x| x % 2 == 0));
    /// assert!(!Outcome::<i32>::from_err("odd").is_ok_and(|_| true));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok_and<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the outcome is a failure and the error matches `f`.
    ///
    /// `f` is not called on a success.
    #[must_use]
    #[inline]
    pub fn is_err_and<F>(&self, f: F) -> bool
    where
        F: FnOnce(&DynError) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => f(&**error),
        }
    }

    /// Returns the success value, or `None` on failure.
    #[must_use]
    #[inline]
    pub fn ok(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Consumes the outcome, returning the success value if there is one.
    #[must_use]
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns the error, or `None` on success.
    #[must_use]
    #[inline]
    pub fn err(&self) -> Option<&DynError> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(&**error),
        }
    }

    /// Consumes the outcome, returning the error if there is one.
    #[must_use]
    #[inline]
    pub fn into_err(self) -> Option<BoxError> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Returns the value this failure was built from.
    ///
    /// - on a failure built by [`from_val`](Outcome::from_val), the original payload
    /// - on a failure built from an error, the error itself
    /// - on a success, `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::{ErrVal, Outcome};
    ///
    /// let from_value: Outcome<()> = Outcome::from_val(3_u8);
    /// assert!(from_value.err_val().is_some_and(|v| v.is_payload()));
    ///
    /// let from_error: Outcome<()> = Outcome::from_err("plain");
    /// assert!(matches!(from_error.err_val(), Some(ErrVal::Error(_))));
    ///
    /// assert!(Outcome::Ok(1).err_val().is_none());
    /// ```
    #[must_use]
    pub fn err_val(&self) -> Option<ErrVal<'_>> {
        let error = self.err()?;
        match error.downcast_ref::<ValueError>() {
            Some(wrapped) => Some(ErrVal::Payload(wrapped.payload())),
            None => Some(ErrVal::Error(error)),
        }
    }

    /// Returns the original payload as `P` if this failure wraps one of that type.
    #[must_use]
    #[inline]
    pub fn downcast_err_val<P: Any>(&self) -> Option<&P> {
        self.err_val()?.downcast_payload::<P>()
    }

    /// Borrows the outcome as a standard `Result`.
    #[inline]
    pub fn as_result(&self) -> Result<&T, &DynError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(&**error),
        }
    }

    /// Converts into a standard `Result`, so `?` can propagate the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::{BoxError, Outcome};
    ///
    /// fn double(input: Outcome<i32>) -> Result<i32, BoxError> {
    ///     let value = input.into_result()?;
    ///     Ok(value * 2)
    /// }
    ///
    /// assert_eq!(double(Outcome::Ok(4)).unwrap(), 8);
    /// assert!(double(Outcome::from_err("bad")).is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, BoxError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Returns `true` if the outcome is a success holding a value equal to `x`.
    #[must_use]
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::Ok(value) => value == x,
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the outcome is a failure whose cause chain holds `target`.
    ///
    /// A link matches when it downcasts to `E` and is either the very same object as
    /// `target` or compares equal to it. The stored error is the first link, followed by every
    /// error reachable through `source()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    /// use std::fmt;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct NotFound;
    /// impl fmt::Display for NotFound {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("not found")
    ///     }
    /// }
    /// impl std::error::Error for NotFound {}
    ///
    /// let failed: Outcome<()> = Outcome::from_err(NotFound);
    /// assert!(failed.contains_err(&NotFound));
    /// assert!(!Outcome::Ok(()).contains_err(&NotFound));
    /// ```
    #[must_use]
    pub fn contains_err<E>(&self, target: &E) -> bool
    where
        E: core::error::Error + PartialEq + 'static,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => error.chain_contains(target),
        }
    }

    /// Returns `true` if the outcome is a failure and `matches` accepts any link of its
    /// cause chain.
    #[must_use]
    pub fn contains_err_by<F>(&self, matches: F) -> bool
    where
        F: FnMut(&(dyn core::error::Error + 'static)) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => error.chain_any(matches),
        }
    }
}

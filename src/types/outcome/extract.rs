use super::Outcome;
use crate::traits::ErrorChain;
use crate::types::{BoxError, DynError};
use core::fmt::Debug;

impl<T> Outcome<T> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on a failure with `msg` followed by the full error chain.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use rail_result::Outcome;
    ///
    /// let failed: Outcome<u16> = Outcome::from_err("no such port");
    /// failed.expect("reading listen port"); // panics with `reading listen port: no such port`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => unwrap_failed(msg, &*error),
        }
    }

    /// Returns the success value.
    ///
    /// Prefer matching, [`unwrap_or`](Outcome::unwrap_or) or
    /// [`unwrap_or_else`](Outcome::unwrap_or_else) where a failure is expected.
    ///
    /// # Panics
    ///
    /// Panics on a failure with a fixed message followed by the full error chain.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                unwrap_failed("called `Outcome::unwrap()` on an `Err` value", &*error)
            }
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics on a success with `msg` followed by the value's `Debug` text.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> BoxError
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => unwrap_err_failed(msg, &value),
            Self::Err(error) => error,
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics on a success with a fixed message followed by the value's `Debug` text.
    ///
    /// ```should_panic
    /// use rail_result::Outcome;
    ///
    /// Outcome::Ok(10).unwrap_err(); // panics with `... on an `Ok` value: 10`
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> BoxError
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => {
                unwrap_err_failed("called `Outcome::unwrap_err()` on an `Ok` value", &value)
            }
            Self::Err(error) => error,
        }
    }

    /// Returns the success value without checking the variant.
    ///
    /// On a failure no success value exists, so this returns `T::default()` and the error
    /// is dropped (recorded as a `WARN` event with the `tracing` feature). This is an
    /// escape hatch for callers that have already established success by other means; it
    /// never panics, but it can silently turn a failure into a plausible-looking value. It
    /// is not `unsafe` in the language sense.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::Ok(9).unwrap_unchecked(), 9);
    /// assert_eq!(Outcome::<i32>::from_err("lost").unwrap_unchecked(), 0);
    /// ```
    #[inline]
    pub fn unwrap_unchecked(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_error) => {
                #[cfg(feature = "tracing")]
                crate::tracing_ext::record_discarded("unwrap_unchecked", &*_error);
                T::default()
            }
        }
    }

    /// Returns the success value or `default`.
    ///
    /// `default` is evaluated by the caller before this call; use
    /// [`unwrap_or_else`](Outcome::unwrap_or_else) for a lazy fallback.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let failed: Outcome<usize> = Outcome::from_err("timeout");
    /// assert_eq!(failed.unwrap_or_else(|e| e.to_string().len()), 7);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(BoxError) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_error) => {
                #[cfg(feature = "tracing")]
                crate::tracing_ext::record_discarded("unwrap_or_default", &*_error);
                T::default()
            }
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(msg: &str, error: &DynError) -> ! {
    #[cfg(feature = "tracing")]
    crate::tracing_ext::record_misuse(msg, &error.display_chain());
    panic!("{msg}: {}", error.display_chain())
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_err_failed(msg: &str, value: &dyn Debug) -> ! {
    #[cfg(feature = "tracing")]
    crate::tracing_ext::record_misuse(msg, &format_args!("{value:?}"));
    panic!("{msg}: {value:?}")
}

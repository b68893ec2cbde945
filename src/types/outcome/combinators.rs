use super::Outcome;
use crate::types::{BoxError, DynError};

impl<T> Outcome<T> {
    /// Maps the success value with `f`, leaving a failure untouched.
    ///
    /// The output type may differ from `T`; the type-preserving form is simply `U = T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::Ok(5).map(|x| x * 2).unwrap(), 10);
    /// assert_eq!(Outcome::Ok(5).map(|x| x.to_string()).unwrap(), "5");
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns `f(value)` on success, `default` on failure.
    ///
    /// `default` is evaluated by the caller before this call; use
    /// [`map_or_else`](Outcome::map_or_else) when the fallback is expensive.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let failed: Outcome<i32> = Outcome::from_err("nope");
    /// assert_eq!(failed.map_or(-1, |x| x * 2), -1);
    /// ```
    #[must_use]
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// Returns `f(value)` on success, `on_err(error)` on failure.
    ///
    /// `on_err` is only called on a failure.
    #[must_use]
    #[inline]
    pub fn map_or_else<U, D, F>(self, on_err: D, f: F) -> U
    where
        D: FnOnce(BoxError) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Replaces the error of a failure with `op(error)`, leaving a success untouched.
    ///
    /// Consumes `self` and returns a new outcome; nothing is rewritten in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let failed: Outcome<()> = Outcome::from_err("socket closed");
    /// let renamed = failed.map_err(|e| format!("fetch failed: {e}"));
    /// assert_eq!(renamed.err().unwrap().to_string(), "fetch failed: socket closed");
    /// ```
    #[inline]
    pub fn map_err<E, F>(self, op: F) -> Self
    where
        F: FnOnce(BoxError) -> E,
        E: Into<BoxError>,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(error) => Self::Err(op(error).into()),
        }
    }

    /// Calls `f` with the success value, then returns the outcome unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the error, then returns the outcome unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&DynError),
    {
        if let Self::Err(error) = &self {
            f(&**error);
        }
        self
    }

    /// Returns `other` if this outcome is a success, otherwise this failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// assert_eq!(Outcome::Ok(3).and(Outcome::Ok("four")).unwrap(), "four");
    ///
    /// let failed: Outcome<i32> = Outcome::from_err("first");
    /// let chained = failed.and(Outcome::Ok(4));
    /// assert_eq!(chained.err().unwrap().to_string(), "first");
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U>) -> Outcome<U> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Calls `op` with the success value, otherwise passes the failure through.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32> {
    ///     if x % 2 == 0 {
    ///         Outcome::Ok(x / 2)
    ///     } else {
    ///         Outcome::from_val(x)
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Ok(8).and_then(half).and_then(half).unwrap(), 2);
    /// assert!(Outcome::Ok(3).and_then(half).is_err());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Ok(value) => op(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns this outcome if it is a success, otherwise `other`.
    ///
    /// `other` is evaluated by the caller before this call; use
    /// [`or_else`](Outcome::or_else) for a lazy fallback.
    #[inline]
    pub fn or(self, other: Outcome<T>) -> Outcome<T> {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns this outcome if it is a success, otherwise `op(error)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let cached: Outcome<&str> = Outcome::from_err("cache miss");
    /// let loaded = cached.or_else(|_| Outcome::Ok("from disk"));
    /// assert_eq!(loaded.unwrap(), "from disk");
    /// ```
    #[inline]
    pub fn or_else<F>(self, op: F) -> Outcome<T>
    where
        F: FnOnce(BoxError) -> Outcome<T>,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(error) => op(error),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_result::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32>> = Outcome::Ok(Outcome::Ok(7));
    /// assert_eq!(nested.flatten().unwrap(), 7);
    ///
    /// let inner_failure: Outcome<Outcome<i32>> = Outcome::Ok(Outcome::from_err("inner"));
    /// assert_eq!(inner_failure.flatten().err().unwrap().to_string(), "inner");
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T> {
        self.and_then(core::convert::identity)
    }
}

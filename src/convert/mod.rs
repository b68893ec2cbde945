//! Free-function forms of the [`Outcome`] combinators, plus batch conversions.
//!
//! The methods on [`Outcome`] already accept a different output type, so these functions
//! exist for point-free use (passing `convert::flatten` to an iterator adapter, for
//! example) and for code that prefers `map(outcome, f)` over `outcome.map(f)`.
//!
//! # Examples
//!
//! ```
//! use rail_result::convert::*;
//! use rail_result::Outcome;
//!
//! let doubled = map(Outcome::Ok(21), |x| x * 2);
//! assert!(contains(&doubled, &42));
//!
//! let nested = vec![Outcome::Ok(Outcome::Ok(1)), Outcome::Ok(Outcome::from_err("x"))];
//! let flat: Vec<Outcome<i32>> = nested.into_iter().map(flatten).collect();
//! assert!(flat[0].is_ok() && flat[1].is_err());
//! ```

use crate::types::alloc_type::Vec;
use crate::types::{BoxError, ErrorVec, Outcome};

/// Maps an `Outcome<T>` to an `Outcome<U>` by applying `f` to a success value.
///
/// # Examples
///
/// ```
/// use rail_result::convert::map;
/// use rail_result::Outcome;
///
/// let len = map(Outcome::Ok("four"), str::len);
/// assert_eq!(len.unwrap(), 4);
/// ```
#[inline]
pub fn map<T, U, F>(outcome: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    outcome.map(f)
}

/// Returns `f(value)` on success, `default` on failure. `default` is evaluated eagerly.
#[inline]
pub fn map_or<T, U, F>(outcome: Outcome<T>, default: U, f: F) -> U
where
    F: FnOnce(T) -> U,
{
    outcome.map_or(default, f)
}

/// Returns `f(value)` on success, `on_err(error)` on failure.
#[inline]
pub fn map_or_else<T, U, D, F>(outcome: Outcome<T>, on_err: D, f: F) -> U
where
    D: FnOnce(BoxError) -> U,
    F: FnOnce(T) -> U,
{
    outcome.map_or_else(on_err, f)
}

/// Replaces the error of a failure, leaving a success untouched.
#[inline]
pub fn map_err<T, E, F>(outcome: Outcome<T>, op: F) -> Outcome<T>
where
    F: FnOnce(BoxError) -> E,
    E: Into<BoxError>,
{
    outcome.map_err(op)
}

/// Returns `other` if `outcome` is a success, otherwise the failure of `outcome`.
#[inline]
pub fn and<T, U>(outcome: Outcome<T>, other: Outcome<U>) -> Outcome<U> {
    outcome.and(other)
}

/// Calls `op` with the success value, otherwise passes the failure through.
#[inline]
pub fn and_then<T, U, F>(outcome: Outcome<T>, op: F) -> Outcome<U>
where
    F: FnOnce(T) -> Outcome<U>,
{
    outcome.and_then(op)
}

/// Collapses an `Outcome<Outcome<T>>` into an `Outcome<T>`.
#[inline]
pub fn flatten<T>(outcome: Outcome<Outcome<T>>) -> Outcome<T> {
    outcome.flatten()
}

/// Returns `true` if `outcome` is a success holding a value equal to `x`.
#[inline]
pub fn contains<T, U>(outcome: &Outcome<T>, x: &U) -> bool
where
    T: PartialEq<U>,
{
    outcome.contains(x)
}

/// Converts a standard `Result` into an [`Outcome`].
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Into<BoxError>,
{
    Outcome::from_result(result)
}

/// Converts an [`Outcome`] into a standard `Result`.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, BoxError> {
    outcome.into_result()
}

/// Splits outcomes into every success value and every error.
///
/// Unlike collecting into an `Outcome<Vec<T>>`, nothing short-circuits: all failures are
/// accumulated, in input order.
///
/// # Examples
///
/// ```
/// use rail_result::convert::partition_outcomes;
/// use rail_result::Outcome;
///
/// let inputs = ["1", "x", "3", "y"];
/// let parsed = inputs.iter().map(|s| Outcome::from_result(s.parse::<i32>()));
/// let (values, errors) = partition_outcomes(parsed);
/// assert_eq!(values, vec![1, 3]);
/// assert_eq!(errors.len(), 2);
/// ```
pub fn partition_outcomes<T, I>(outcomes: I) -> (Vec<T>, ErrorVec<BoxError>)
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let mut values = Vec::new();
    let mut errors = ErrorVec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => values.push(value),
            Outcome::Err(error) => errors.push(error),
        }
    }
    (values, errors)
}

/// Collects every success value, or every error if at least one outcome failed.
///
/// # Examples
///
/// ```
/// use rail_result::convert::collect_all;
/// use rail_result::Outcome;
///
/// let ok = collect_all(vec![Outcome::Ok(1), Outcome::Ok(2)]);
/// assert_eq!(ok.unwrap(), vec![1, 2]);
///
/// let failed = collect_all(vec![Outcome::<i32>::from_err("a"), Outcome::from_err("b")]);
/// assert_eq!(failed.unwrap_err().len(), 2);
/// ```
pub fn collect_all<T, I>(outcomes: I) -> Result<Vec<T>, ErrorVec<BoxError>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let (values, errors) = partition_outcomes(outcomes);
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

use super::Outcome;
use crate::traits::ErrorChain;
use crate::types::BoxError;
use core::fmt::Display;

/// Renders `Ok(<value>)` or `Err(<message>)`.
///
/// The alternate form (`{:#}`) renders a failure's whole cause chain, each link separated
/// by `": "`.
impl<T: Display> Display for Outcome<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value})"),
            Self::Err(error) if f.alternate() => write!(f, "Err({})", error.display_chain()),
            Self::Err(error) => write!(f, "Err({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<BoxError>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Outcome<T>> for Result<T, BoxError> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Collects successes into `V`, stopping at the first failure.
///
/// ```
/// use rail_result::Outcome;
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::Ok(1), Outcome::Ok(2)].into_iter().collect();
/// assert_eq!(all.unwrap(), vec![1, 2]);
///
/// let first_failure: Outcome<Vec<i32>> =
///     vec![Outcome::Ok(1), Outcome::from_err("two"), Outcome::from_err("three")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_failure.err().unwrap().to_string(), "two");
/// ```
impl<T, V> FromIterator<Outcome<T>> for Outcome<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, BoxError>>()
            .into()
    }
}

//! Aggregating many outcomes into one.
//!
//! Both aggregators visit their input in order and keep that order in every
//! sequence they return.

use crate::outcome::Outcome;

/// Collect successes, stopping at the first failure.
///
/// The first failure is returned as-is, and the iterator is not advanced past
/// it. With no failures the result holds every value in input order; an empty
/// input gives `Success(vec![])`.
///
/// ```
/// use nebula_outcome::{Outcome, combine_all, failure, success};
///
/// let all: Vec<Outcome<i32, &str>> = vec![success(1), success(2), success(3)];
/// assert_eq!(combine_all(all), success(vec![1, 2, 3]));
///
/// let mixed: Vec<Outcome<i32, &str>> = vec![success(1), failure("E1"), failure("E2")];
/// assert_eq!(combine_all(mixed), failure("E1"));
/// ```
pub fn combine_all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Collect successes, or every failure if there is at least one.
///
/// Unlike [`combine_all`] this always drains the input. Successes are dropped
/// once any failure is seen; the failures keep their input order.
///
/// ```
/// use nebula_outcome::{Outcome, combine_all_errors, failure, success};
///
/// let mixed: Vec<Outcome<i32, &str>> =
///     vec![success(1), failure("E1"), success(3), failure("E2")];
/// assert_eq!(combine_all_errors(mixed), failure(vec!["E1", "E2"]));
/// ```
pub fn combine_all_errors<T, E, I>(outcomes: I) -> Outcome<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => errors.push(error),
        }
    }

    if errors.is_empty() {
        Outcome::Success(values)
    } else {
        Outcome::Failure(errors)
    }
}

/// Short-circuiting collection, same semantics as [`combine_all`] for any
/// target collection.
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut first_failure = None;
        let values = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    first_failure = Some(error);
                    None
                }
            })
            .collect();

        match first_failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(values),
        }
    }
}

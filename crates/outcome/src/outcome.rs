//! The [`Outcome`] type and its synchronous combinators.
//!
//! Everything here is a pure function of its inputs. Closures passed to the
//! combinators run at most once, only on the branch they belong to, and a
//! panic inside one of them unwinds straight through; converting panics into
//! failures is the job of [`capture_panic`](crate::capture_panic) alone.

/// Outcome of a fallible operation: a success value or a failure payload.
///
/// `Outcome` is plain data. Equality, ordering and hashing are structural
/// (variant first, then payload), so two independently built outcomes, or an
/// outcome and its deserialized copy, compare equal whenever their variant
/// and payload do. `Success` always orders before `Failure`.
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error payload.
    Failure(E),
}

/// Wrap `value` as a successful outcome.
#[inline]
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wrap `error` as a failed outcome.
#[inline]
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    // ==================== Inspection ====================

    /// Returns `true` if this is a [`Outcome::Success`].
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a [`Outcome::Failure`].
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow both payloads, leaving `self` untouched.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The success payload, discarding any failure.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure payload, discarding any success.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // ==================== Transformation ====================

    /// Apply `f` to the success payload. Failures pass through untouched and
    /// `f` is not called.
    ///
    /// ```
    /// use nebula_outcome::{Outcome, failure, success};
    ///
    /// let doubled: Outcome<i32, &str> = success(21).map(|n| n * 2);
    /// assert_eq!(doubled, success(42));
    ///
    /// let failed: Outcome<i32, &str> = failure("nope");
    /// assert_eq!(failed.map(|n| n * 2), failure("nope"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Apply `f` to the failure payload. Successes pass through untouched.
    #[inline]
    pub fn map_err<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// The success payload, or `default` on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// The success payload, or a value computed from the failure payload.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    // ==================== Chaining ====================

    /// Sequence another fallible step after a success.
    ///
    /// The outcome returned by `f` becomes the result as-is; it is not wrapped
    /// a second time. A failure short-circuits and `f` is never called.
    ///
    /// ```
    /// use nebula_outcome::{Outcome, failure, success};
    ///
    /// fn half(n: u32) -> Outcome<u32, String> {
    ///     if n % 2 == 0 { success(n / 2) } else { failure(format!("{n} is odd")) }
    /// }
    ///
    /// assert_eq!(success(8).and_then(half).and_then(half), success(2));
    /// assert_eq!(success(6).and_then(half).and_then(half), failure("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover from a failure with another fallible step. Successes pass
    /// through untouched and `f` is never called.
    #[inline]
    pub fn or_else<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    // ==================== Elimination ====================

    /// Leave the `Outcome` world: run exactly one of the two branches and
    /// return what it returns.
    ///
    /// ```
    /// use nebula_outcome::{Outcome, success};
    ///
    /// let outcome: Outcome<u8, String> = success(7);
    /// let text = outcome.fold(|n| format!("got {n}"), |e| format!("failed: {e}"));
    /// assert_eq!(text, "got 7");
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // ==================== Extraction ====================

    /// The success payload.
    ///
    /// Only for call sites that have already established success. The panic
    /// message is fixed and does not include the failure payload, so `E`
    /// needs no `Debug` bound.
    ///
    /// # Panics
    ///
    /// Panics if this is a [`Outcome::Failure`].
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("called `Outcome::unwrap()` on a `Failure` value"),
        }
    }

    /// The success payload, panicking with `msg` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if this is a [`Outcome::Failure`].
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{msg}"),
        }
    }

    /// The failure payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a [`Outcome::Success`].
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("called `Outcome::unwrap_failure()` on a `Success` value"),
            Self::Failure(error) => error,
        }
    }

    // ==================== Conversion ====================

    /// Convert into a `std::result::Result` so `?` can be used.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// Extension trait bridging `std::result::Result` into [`Outcome`].
pub trait OutcomeExt<T, E> {
    /// Convert into an [`Outcome`] with the same payloads.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

//! Async variants of the combinators and the async adapters.
//!
//! Each `*_async` method keeps the branching of its synchronous twin and
//! suspends only while awaiting the future the caller hands it. Nothing here
//! adds a timeout or a cancellation point; dropping the returned future drops
//! the caller's future with it.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use futures::FutureExt;

use crate::capture::Panic;
use crate::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// [`Outcome::map`] with an async mapping function.
    ///
    /// ```
    /// # futures::executor::block_on(async {
    /// use nebula_outcome::{Outcome, success};
    ///
    /// let outcome: Outcome<u32, String> = success(20);
    /// let mapped = outcome.map_async(|n| async move { n + 1 }).await;
    /// assert_eq!(mapped, success(21));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// [`Outcome::and_then`] with an async step. A failure resolves without
    /// awaiting anything.
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// [`Outcome::fold`] with async branches. Only the selected branch's
    /// future is created and awaited.
    pub async fn fold_async<U, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_failure(error).await,
        }
    }
}

/// Await an externally driven computation and fold its `Err` into the
/// outcome.
///
/// The returned future always completes with a value, so callers have a
/// single channel to inspect.
///
/// ```
/// # futures::executor::block_on(async {
/// use nebula_outcome::{failure, from_async, success};
///
/// let ok = from_async(async { Ok::<_, String>(5) }).await;
/// assert_eq!(ok, success(5));
///
/// let rejected = from_async(async { Err::<u8, _>("refused") }).await;
/// assert_eq!(rejected, failure("refused"));
/// # });
/// ```
pub async fn from_async<T, E, Fut>(future: Fut) -> Outcome<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    future.await.into()
}

/// Async counterpart of [`capture_panic`](crate::capture_panic).
///
/// `f` runs right away, inside this call, exactly like the synchronous form;
/// only polling the future it returns is deferred to `.await`. A panic raised
/// by `f` itself or while polling that future becomes `Outcome::Failure`; a
/// normal completion becomes `Outcome::Success`.
///
/// The future returned by `f` needs no `UnwindSafe` bound. It is owned by the
/// adapter and dropped as soon as it panics, so no caller code can observe it
/// in a half-updated state; anything it borrowed is released with it, which
/// is the same reasoning `FutureExt::catch_unwind` users apply when wrapping
/// in [`AssertUnwindSafe`].
pub fn capture_panic_async<T, F, Fut>(f: F) -> impl Future<Output = Outcome<T, Panic>>
where
    F: FnOnce() -> Fut + UnwindSafe,
    Fut: Future<Output = T>,
{
    let called = panic::catch_unwind(f).map_err(Panic::captured);

    async move {
        let future = match called {
            Ok(future) => future,
            Err(panic) => return Outcome::Failure(panic),
        };

        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(value) => Outcome::Success(value),
            Err(payload) => Outcome::Failure(Panic::captured(payload)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    async fn double(n: i32) -> i32 {
        tokio::task::yield_now().await;
        n * 2
    }

    #[tokio::test]
    async fn test_map_async() {
        let mapped = success::<_, String>(21).map_async(double).await;
        assert_eq!(mapped, success(42));
    }

    #[tokio::test]
    async fn test_map_async_skips_failure() {
        let calls = AtomicUsize::new(0);
        let mapped = failure::<i32, _>("e")
            .map_async(|n| {
                calls.fetch_add(1, Ordering::SeqCst);
                double(n)
            })
            .await;

        assert_eq!(mapped, failure("e"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_and_then_async_flattens() {
        let chained = success::<i32, &str>(3)
            .and_then_async(|n| async move {
                if n > 0 { success(n * 10) } else { failure("negative") }
            })
            .await;
        assert_eq!(chained, success(30));

        let chained = success::<i32, &str>(-3)
            .and_then_async(|n| async move {
                if n > 0 { success(n * 10) } else { failure("negative") }
            })
            .await;
        assert_eq!(chained, failure("negative"));
    }

    #[tokio::test]
    async fn test_and_then_async_skips_failure() {
        let calls = AtomicUsize::new(0);
        let chained = failure::<i32, &str>("outer")
            .and_then_async(|n| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { success::<i32, &str>(n) }
            })
            .await;

        assert_eq!(chained, failure("outer"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fold_async_runs_selected_branch() {
        let text = failure::<i32, &str>("bad")
            .fold_async(
                |n| async move { format!("ok {n}") },
                |e| async move { format!("failed {e}") },
            )
            .await;
        assert_eq!(text, "failed bad");

        let text = success::<i32, &str>(1)
            .fold_async(
                |n| async move { format!("ok {n}") },
                |e| async move { format!("failed {e}") },
            )
            .await;
        assert_eq!(text, "ok 1");
    }

    #[tokio::test]
    async fn test_from_async() {
        assert_eq!(from_async(async { Ok::<_, String>(1) }).await, success(1));
        assert_eq!(from_async(async { Err::<i32, _>("rejected") }).await, failure("rejected"));
    }

    #[tokio::test]
    async fn test_capture_panic_async_success() {
        let outcome = capture_panic_async(|| async { double(4).await }).await;
        assert_eq!(outcome.ok(), Some(8));
    }

    #[tokio::test]
    async fn test_capture_panic_async_in_future() {
        let outcome: Outcome<(), Panic> = capture_panic_async(|| async {
            tokio::task::yield_now().await;
            panic!("late boom")
        })
        .await;

        assert_eq!(outcome.unwrap_failure().message(), Some("late boom"));
    }

    #[tokio::test]
    async fn test_capture_panic_async_in_constructor() {
        fn build() -> std::future::Ready<i32> {
            panic!("eager boom")
        }

        let outcome = capture_panic_async(build).await;
        assert_eq!(outcome.unwrap_failure().message(), Some("eager boom"));
    }

    #[tokio::test]
    async fn test_capture_panic_async_calls_f_before_await() {
        let called = AtomicBool::new(false);
        let pending = capture_panic_async(|| {
            called.store(true, Ordering::SeqCst);
            async { 1 }
        });

        assert!(called.load(Ordering::SeqCst));
        assert_eq!(pending.await.ok(), Some(1));
    }

    #[tokio::test]
    async fn test_capture_panic_async_accepts_borrowing_future() {
        let mut steps = Vec::new();
        let log = &mut steps;

        let outcome = capture_panic_async(AssertUnwindSafe(move || async move {
            log.push("loaded");
            tokio::task::yield_now().await;
            log.push("stored");
            log.len()
        }))
        .await;

        assert_eq!(outcome.ok(), Some(2));
        assert_eq!(steps, vec!["loaded", "stored"]);
    }
}

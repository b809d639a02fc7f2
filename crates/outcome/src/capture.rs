//! Panic boundary: turning an unwinding panic into a represented failure.
//!
//! This is the only module that catches anything. The combinators on
//! [`Outcome`] let panics from caller closures unwind unchanged.

use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};

use crate::outcome::Outcome;

/// A panic captured by [`capture_panic`] or
/// [`capture_panic_async`](crate::capture_panic_async).
///
/// Holds the original panic payload. Payloads produced by `panic!` with a
/// message (`&'static str` or `String`) expose that message through
/// [`Panic::message`]; any other payload is kept as-is and can be recovered
/// with [`Panic::into_payload`] or re-raised with [`Panic::resume`].
#[derive(thiserror::Error)]
#[error("panicked: {}", describe(.payload))]
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

const NON_STRING_PAYLOAD: &str = "non-string panic payload";

#[allow(clippy::borrowed_box)]
fn describe(payload: &Box<dyn Any + Send>) -> &str {
    message_of(payload.as_ref()).unwrap_or(NON_STRING_PAYLOAD)
}

fn message_of(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

impl Panic {
    /// Wrap a payload obtained from [`std::panic::catch_unwind`].
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Wrap a payload at one of the capture boundaries.
    pub(crate) fn captured(payload: Box<dyn Any + Send>) -> Self {
        let panic = Self::from_payload(payload);

        #[cfg(feature = "tracing")]
        tracing::debug!(panic = %panic, "panic captured as failure outcome");

        panic
    }

    /// The panic message, if the payload was a string.
    pub fn message(&self) -> Option<&str> {
        message_of(self.payload.as_ref())
    }

    /// Borrow the raw payload.
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Take the raw payload back.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Continue unwinding with the original payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

/// Run `f` now and convert a panic into `Outcome::Failure`.
///
/// A normal return becomes `Outcome::Success`. Panics are only caught when the
/// build unwinds (`panic = "unwind"`, the default); with `panic = "abort"` the
/// process aborts as usual.
///
/// ```
/// use nebula_outcome::capture_panic;
///
/// assert_eq!(capture_panic(|| 42).ok(), Some(42));
///
/// let failed = capture_panic(|| -> i32 { panic!("boom") });
/// assert_eq!(failed.unwrap_failure().message(), Some("boom"));
/// ```
pub fn capture_panic<T, F>(f: F) -> Outcome<T, Panic>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(Panic::captured(payload)),
    }
}

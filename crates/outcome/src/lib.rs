//! # Nebula Outcome
//!
//! A plain-data success/failure type for values that have to survive a trip
//! through a queue, a plugin boundary or an execution log.
//!
//! [`Outcome`] is an ordinary enum: equality is structural, there is no
//! identity to lose, and with the `serde` feature it serializes to
//! `{"status": "success", "value": ...}` or
//! `{"status": "failure", "error": ...}`.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_outcome::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>()
//!         .into_outcome()
//!         .map_err(|e| format!("bad port {raw:?}: {e}"))
//! }
//!
//! let ports = combine_all(["80", "443"].map(parse_port));
//! assert_eq!(ports, success(vec![80, 443]));
//!
//! let errors = combine_all_errors(["80", "x", "y"].map(parse_port));
//! assert_eq!(errors.err().map(|e| e.len()), Some(2));
//! ```
//!
//! ## Failure channels
//!
//! - **Represented failure**: the `E` payload of [`Outcome::Failure`]. Every
//!   combinator passes it along as data.
//! - **Panics**: converted only by [`capture_panic`] and
//!   `capture_panic_async`. Everywhere else a panicking closure unwinds
//!   through the combinator untouched.
//! - **Misuse**: [`Outcome::unwrap`] on a failure panics with a fixed message.
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`Outcome`]
//! - `async` (default): `map_async`, `and_then_async`, `fold_async`,
//!   `from_async`, `capture_panic_async`
//! - `tracing`: a debug event whenever a panic is captured

pub mod capture;
pub mod combine;
pub mod outcome;

#[cfg(feature = "async")]
pub mod future;

#[cfg(feature = "serde")]
mod wire;

pub use capture::{Panic, capture_panic};
pub use combine::{combine_all, combine_all_errors};
pub use outcome::{Outcome, OutcomeExt, failure, success};

#[cfg(feature = "async")]
pub use future::{capture_panic_async, from_async};

/// Everything needed to build, combine and unwrap outcomes.
pub mod prelude {
    pub use crate::{
        Outcome, OutcomeExt, Panic, capture_panic, combine_all, combine_all_errors, failure,
        success,
    };

    #[cfg(feature = "async")]
    pub use crate::{capture_panic_async, from_async};
}

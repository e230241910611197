//! Panic handling for examples.
//!
//! Examples usually report failures by panicking, for example from a failed
//! `assert!`. A panic handler executes the example body and decides the
//! resulting [`ExampleStatus`]. The engine organizes when examples run, the
//! panic handler is the piece that actually runs them.
//!
//! Implement [`ExamplePanicHandler`] to define how examples are executed and
//! how panics turn into statuses.

use std::panic::UnwindSafe;

use crate::{
    outcome::ExampleStatus,
    test::{ExampleMeta, TestResult},
};

mod no;
pub use no::*;

mod default;
pub use default::*;

/// A strategy for executing an example body and translating panics into an
/// [`ExampleStatus`].
pub trait ExamplePanicHandler {
    /// Execute `f` and return the resulting status.
    ///
    /// The metadata is passed along so a handler can include context in the
    /// status it produces.
    fn handle<F: FnOnce() -> TestResult + UnwindSafe>(
        &self,
        f: F,
        meta: &ExampleMeta,
    ) -> ExampleStatus;
}

use std::{
    any::Any,
    panic::{UnwindSafe, catch_unwind},
};

use crate::{
    outcome::{ExampleFailure, ExampleStatus},
    panic::ExamplePanicHandler,
    test::{ExampleMeta, TestResult},
};

/// The default [`ExamplePanicHandler`].
///
/// An example passes when it returns `Ok(())` and does not panic. A returned
/// error becomes [`ExampleFailure::Error`], a panic becomes
/// [`ExampleFailure::Panicked`] carrying the panic message.
#[derive(Debug, Default, Clone)]
pub struct DefaultPanicHandler;

impl DefaultPanicHandler {
    /// Convert a panic payload into a string.
    ///
    /// This matches the common payload types produced by `panic!` (`&'static str` and `String`).
    /// Other payload types are formatted as a generic placeholder.
    pub fn payload_as_string(err: Box<dyn Any + Send + 'static>) -> String {
        err.downcast::<&'static str>()
            .map(|s| s.to_string())
            .or_else(|err| err.downcast::<String>().map(|s| *s))
            .unwrap_or_else(|_| String::from("Box<dyn Any>"))
    }
}

impl ExamplePanicHandler for DefaultPanicHandler {
    fn handle<F: FnOnce() -> TestResult + UnwindSafe>(
        &self,
        f: F,
        meta: &ExampleMeta,
    ) -> ExampleStatus {
        match catch_unwind(f) {
            Ok(result) => result.into(),
            Err(err) => {
                let msg = Self::payload_as_string(err);
                tracing::trace!(example = %meta.description, %msg, "example panicked");
                ExampleStatus::Failed(ExampleFailure::Panicked(msg))
            }
        }
    }
}

use crate::{
    outcome::ExampleStatus,
    panic::ExamplePanicHandler,
    test::{ExampleMeta, TestResult},
};

/// An [`ExamplePanicHandler`] that does not catch panics.
///
/// The example body is executed and its return value converted into an
/// [`ExampleStatus`]. A panic unwinds through the engine and aborts the run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoPanicHandler;

impl ExamplePanicHandler for NoPanicHandler {
    fn handle<F: FnOnce() -> TestResult>(&self, f: F, _: &ExampleMeta) -> ExampleStatus {
        f().into()
    }
}

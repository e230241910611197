use std::{
    borrow::Cow,
    fmt::Debug,
    ops::Deref,
    panic::RefUnwindSafe,
    sync::Arc,
};

use crate::meta::Metadata;

/// A single executable check inside an [`ExampleGroup`](crate::group::ExampleGroup).
///
/// The body is stored as a [`TestFnHandle`] and is only called once an
/// execution engine runs the enclosing group.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Example {
    function: TestFnHandle,
    pub meta: ExampleMeta,
}

impl Example {
    pub const fn new(function: TestFnHandle, meta: ExampleMeta) -> Self {
        Self { function, meta }
    }

    pub(crate) fn call(&self) -> TestResult {
        self.function.call()
    }
}

impl Deref for Example {
    type Target = ExampleMeta;

    fn deref(&self) -> &Self::Target {
        &self.meta
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExampleMeta {
    pub description: Cow<'static, str>,
    pub pending: PendingStatus,
    pub metadata: Metadata,
}

/// Whether an example is run or only reported as pending.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum PendingStatus {
    #[default]
    Run,
    Pending,
    PendingWithReason(Cow<'static, str>),
}

impl PendingStatus {
    pub fn is_pending(&self) -> bool {
        !matches!(self, PendingStatus::Run)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            PendingStatus::PendingWithReason(reason) => Some(reason.as_ref()),
            _ => None,
        }
    }
}

impl From<bool> for PendingStatus {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Pending,
            false => Self::Run,
        }
    }
}

impl From<&'static str> for PendingStatus {
    fn from(value: &'static str) -> Self {
        Self::PendingWithReason(value.into())
    }
}

impl From<String> for PendingStatus {
    fn from(value: String) -> Self {
        Self::PendingWithReason(value.into())
    }
}

#[derive(Clone)]
#[non_exhaustive]
pub enum TestFnHandle {
    Shared(Arc<dyn TestFn + Send + Sync + RefUnwindSafe>),
    Static(&'static (dyn TestFn + Send + Sync + RefUnwindSafe)),
}

impl Debug for TestFnHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shared(_) => write!(f, "Shared(...)"),
            Self::Static(_) => write!(f, "Static(...)"),
        }
    }
}

impl Default for TestFnHandle {
    fn default() -> Self {
        Self::Static(&|| {})
    }
}

impl TestFnHandle {
    pub fn from_boxed<F, T>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + RefUnwindSafe + 'static,
        T: Into<TestResult>,
    {
        Self::Shared(Arc::new(f))
    }

    pub fn call(&self) -> TestResult {
        match self {
            Self::Shared(f) => f.call_test(),
            Self::Static(f) => f.call_test(),
        }
    }
}

pub trait TestFn {
    fn call_test(&self) -> TestResult;
}

impl<F, T> TestFn for F
where
    F: Fn() -> T,
    T: Into<TestResult>,
{
    fn call_test(&self) -> TestResult {
        (self)().into()
    }
}

#[derive(Debug)]
pub struct TestResult(pub Result<(), String>);

impl From<()> for TestResult {
    fn from(_: ()) -> Self {
        Self(Ok(()))
    }
}

impl<E: Debug> From<Result<(), E>> for TestResult {
    fn from(v: Result<(), E>) -> Self {
        TestResult(v.map_err(|e| format!("{e:#?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_convert_results() {
        assert!(TestFnHandle::default().call().0.is_ok());
        assert!(TestFnHandle::from_boxed(|| ()).call().0.is_ok());

        let result = TestFnHandle::from_boxed(|| Err::<(), _>("denied")).call();
        assert_eq!(result.0, Err("\"denied\"".to_string()));
    }
}

use std::{borrow::Cow, time::Duration};

use crate::test::{PendingStatus, TestResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleOutcome {
    pub status: ExampleStatus,
    pub duration: Duration,
}

impl ExampleOutcome {
    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn pending(&self) -> bool {
        self.status.pending()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExampleStatus {
    Passed,
    Pending { reason: Option<Cow<'static, str>> },
    Failed(ExampleFailure),
}

impl ExampleStatus {
    pub fn passed(&self) -> bool {
        matches!(self, ExampleStatus::Passed)
    }

    pub fn pending(&self) -> bool {
        matches!(self, ExampleStatus::Pending { .. })
    }

    pub fn failed(&self) -> bool {
        matches!(self, ExampleStatus::Failed(_))
    }

    /// Short lowercase label, as used in machine readable output.
    pub fn label(&self) -> &'static str {
        match self {
            ExampleStatus::Passed => "passed",
            ExampleStatus::Pending { .. } => "pending",
            ExampleStatus::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExampleFailure {
    /// The example returned an error.
    Error(String),
    /// The example panicked, usually from a failed assertion.
    Panicked(String),
}

impl ExampleFailure {
    pub fn message(&self) -> &str {
        match self {
            ExampleFailure::Error(msg) | ExampleFailure::Panicked(msg) => msg,
        }
    }
}

impl From<TestResult> for ExampleStatus {
    fn from(value: TestResult) -> Self {
        match value.0 {
            Ok(_) => ExampleStatus::Passed,
            Err(err) => ExampleStatus::Failed(ExampleFailure::Error(err)),
        }
    }
}

impl From<&PendingStatus> for ExampleStatus {
    fn from(value: &PendingStatus) -> Self {
        match value {
            PendingStatus::Run => ExampleStatus::Passed,
            PendingStatus::Pending => ExampleStatus::Pending { reason: None },
            PendingStatus::PendingWithReason(reason) => ExampleStatus::Pending {
                reason: Some(reason.clone()),
            },
        }
    }
}

use std::{io, time::Duration};

use crate::{meta::Metadata, outcome::ExampleOutcome};

/// The result of a single example, detached from the group tree it ran in.
#[derive(Debug, Clone)]
pub struct ExampleRecord {
    pub description: String,
    pub full_description: String,
    pub id: Option<String>,
    pub group_title: Option<String>,
    pub metadata: Metadata,
    pub outcome: ExampleOutcome,
}

/// A formatter hook that failed to write.
#[derive(Debug)]
pub struct FormatError {
    pub formatter: String,
    pub hook: &'static str,
    pub error: io::Error,
}

#[derive(Debug)]
pub struct RunReport {
    /// Outcomes in execution order.
    pub records: Vec<ExampleRecord>,
    pub filtered_out: usize,
    pub duration: Duration,
    pub fmt_errors: Vec<FormatError>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.count(ExampleOutcome::passed)
    }

    pub fn failed(&self) -> usize {
        self.count(ExampleOutcome::failed)
    }

    pub fn pending(&self) -> usize {
        self.count(ExampleOutcome::pending)
    }

    /// A run succeeds when no example failed. Pending examples and an empty
    /// run both count as success.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn exit_code(&self) -> i32 {
        match self.is_success() {
            true => 0,
            false => 1,
        }
    }

    fn count(&self, predicate: impl Fn(&ExampleOutcome) -> bool) -> usize {
        self.records
            .iter()
            .filter(|record| predicate(&record.outcome))
            .count()
    }
}

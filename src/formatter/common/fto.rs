//! Format transfer objects that are used by multiple formatters.

use std::time::Duration;

use crate::{formatter::FmtRunOutcomes, outcome::*};

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RunTotals<'r> {
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
    pub filtered_out: usize,
    pub duration: Duration,
    pub failures: Vec<Failure<'r>>,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Failure<'r> {
    pub full_description: &'r str,
    pub id: Option<&'r str>,
    pub failure: &'r ExampleFailure,
}

impl<'r> From<&FmtRunOutcomes<'r>> for RunTotals<'r> {
    fn from(value: &FmtRunOutcomes<'r>) -> Self {
        let records = value.records;
        Self {
            passed: records.iter().filter(|r| r.outcome.passed()).count(),
            failed: records.iter().filter(|r| r.outcome.failed()).count(),
            pending: records.iter().filter(|r| r.outcome.pending()).count(),
            filtered_out: value.filtered_out,
            duration: value.duration,
            failures: records
                .iter()
                .filter_map(|record| {
                    let ExampleStatus::Failed(failure) = &record.outcome.status else {
                        return None;
                    };

                    Some(Failure {
                        full_description: &record.full_description,
                        id: record.id.as_deref(),
                        failure,
                    })
                })
                .collect(),
        }
    }
}

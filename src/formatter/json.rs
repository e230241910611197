//! Machine readable output.
//!
//! The JSON formatter writes a single document once the run is done. Every
//! example entry carries the stamped `id` and `group_title`, which is what
//! downstream reporting keys its results on.

use std::io;

use serde::Serialize;

use crate::{
    formatter::*,
    meta::Metadata,
    outcome::{ExampleFailure, ExampleStatus},
};

#[derive(Debug, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(self, pretty: bool) -> Self {
        Self { pretty }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'r> {
    pub version: &'static str,
    pub examples: Vec<JsonExample<'r>>,
    pub summary: JsonSummary,
}

#[derive(Debug, Serialize)]
pub struct JsonExample<'r> {
    pub id: Option<&'r str>,
    pub group_title: Option<&'r str>,
    pub description: &'r str,
    pub full_description: &'r str,
    pub status: &'static str,
    pub run_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_message: Option<&'r str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<JsonException<'r>>,
    pub metadata: &'r Metadata,
}

#[derive(Debug, Serialize)]
pub struct JsonException<'r> {
    pub class: &'static str,
    pub message: &'r str,
}

#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub duration: f64,
    pub example_count: usize,
    pub failure_count: usize,
    pub pending_count: usize,
    pub filtered_out: usize,
}

impl<'r> From<&FmtRunOutcomes<'r>> for JsonReport<'r> {
    fn from(value: &FmtRunOutcomes<'r>) -> Self {
        let examples: Vec<_> = value
            .records
            .iter()
            .map(|record| {
                let status = &record.outcome.status;
                JsonExample {
                    id: record.id.as_deref(),
                    group_title: record.group_title.as_deref(),
                    description: &record.description,
                    full_description: &record.full_description,
                    status: status.label(),
                    run_time: record.outcome.duration.as_secs_f64(),
                    pending_message: match status {
                        ExampleStatus::Pending { reason } => reason.as_deref(),
                        _ => None,
                    },
                    exception: match status {
                        ExampleStatus::Failed(failure) => Some(JsonException {
                            class: match failure {
                                ExampleFailure::Error(_) => "Error",
                                ExampleFailure::Panicked(_) => "Panic",
                            },
                            message: failure.message(),
                        }),
                        _ => None,
                    },
                    metadata: &record.metadata,
                }
            })
            .collect();

        let summary = JsonSummary {
            duration: value.duration.as_secs_f64(),
            example_count: examples.len(),
            failure_count: examples.iter().filter(|e| e.status == "failed").count(),
            pending_count: examples.iter().filter(|e| e.status == "pending").count(),
            filtered_out: value.filtered_out,
        };

        Self {
            version: env!("CARGO_PKG_VERSION"),
            examples,
            summary,
        }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn fmt_run_outcomes(
        &mut self,
        w: &mut dyn io::Write,
        data: &FmtRunOutcomes<'_>,
    ) -> io::Result<()> {
        let report = JsonReport::from(data);
        match self.pretty {
            true => serde_json::to_writer_pretty(&mut *w, &report)?,
            false => serde_json::to_writer(&mut *w, &report)?,
        }
        writeln!(w)
    }
}

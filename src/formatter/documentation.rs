use std::io;

use crate::{
    formatter::{
        common::{color::colors::*, fto::RunTotals, indent, write_summary},
        *,
    },
    outcome::ExampleStatus,
};

/// Prints the group tree with one line per example.
///
/// ```text
/// ctl-001: sample
///   passes ... ok
///   nested
///     fails ... FAILED
/// ```
#[derive(Debug, Default)]
pub struct DocumentationFormatter {
    color: bool,
}

impl DocumentationFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn paint(&self, color: &str, text: &str) -> String {
        match self.color {
            true => format!("{color}{text}{RESET}"),
            false => text.to_string(),
        }
    }
}

impl Formatter for DocumentationFormatter {
    fn name(&self) -> &str {
        "documentation"
    }

    fn fmt_run_start(&mut self, w: &mut dyn io::Write, data: &FmtRunStart) -> io::Result<()> {
        self.color = data.color;
        writeln!(w)
    }

    fn fmt_group_start(
        &mut self,
        w: &mut dyn io::Write,
        data: &FmtGroupStart<'_>,
    ) -> io::Result<()> {
        let indent = indent(data.depth);
        let description = data.group.description();
        match (data.depth, data.group.metadata().id()) {
            (0, Some(id)) => writeln!(w, "{indent}{id}: {description}"),
            _ => writeln!(w, "{indent}{description}"),
        }
    }

    fn fmt_example_outcome(
        &mut self,
        w: &mut dyn io::Write,
        data: &FmtExampleOutcome<'_>,
    ) -> io::Result<()> {
        let indent = indent(data.depth + 1);
        let status = match &data.outcome.status {
            ExampleStatus::Passed => self.paint(GREEN, "ok"),
            ExampleStatus::Pending { reason: None } => self.paint(YELLOW, "pending"),
            ExampleStatus::Pending {
                reason: Some(reason),
            } => self.paint(YELLOW, &format!("pending, {reason}")),
            ExampleStatus::Failed(_) => self.paint(RED, "FAILED"),
        };
        writeln!(w, "{indent}{} ... {status}", data.example.description)
    }

    fn fmt_run_outcomes(
        &mut self,
        w: &mut dyn io::Write,
        data: &FmtRunOutcomes<'_>,
    ) -> io::Result<()> {
        write_summary(w, &RunTotals::from(data), self.color)
    }
}

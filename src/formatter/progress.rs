use std::io;

use crate::{
    formatter::{
        common::{color::colors::*, fto::RunTotals, write_summary},
        *,
    },
    outcome::ExampleStatus,
};

/// One character per example, then failures and a summary line.
///
/// `.` marks a passed example, `*` a pending one and `F` a failure. Lines
/// wrap after [`ProgressFormatter::LINE_WIDTH`] characters with the current
/// progress appended.
#[derive(Debug, Default)]
pub struct ProgressFormatter {
    color: bool,
    total: usize,
    progress: usize,
}

impl ProgressFormatter {
    pub const LINE_WIDTH: usize = 88;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Formatter for ProgressFormatter {
    fn name(&self) -> &str {
        "progress"
    }

    fn fmt_run_start(&mut self, w: &mut dyn io::Write, data: &FmtRunStart) -> io::Result<()> {
        self.color = data.color;
        self.total = data.examples;
        self.progress = 0;
        match data.examples {
            1 => writeln!(w, "\nrunning 1 example"),
            count => writeln!(w, "\nrunning {count} examples"),
        }
    }

    fn fmt_example_outcome(
        &mut self,
        w: &mut dyn io::Write,
        data: &FmtExampleOutcome<'_>,
    ) -> io::Result<()> {
        let (mark, color) = match data.outcome.status {
            ExampleStatus::Passed => (".", GREEN),
            ExampleStatus::Pending { .. } => ("*", YELLOW),
            ExampleStatus::Failed(_) => ("F", RED),
        };
        match self.color {
            true => write!(w, "{color}{mark}{RESET}")?,
            false => write!(w, "{mark}")?,
        }

        self.progress += 1;
        if self.progress % Self::LINE_WIDTH == 0 {
            writeln!(w, " {}/{}", self.progress, self.total)?;
        }
        Ok(())
    }

    fn fmt_run_outcomes(
        &mut self,
        w: &mut dyn io::Write,
        data: &FmtRunOutcomes<'_>,
    ) -> io::Result<()> {
        if self.progress % Self::LINE_WIDTH != 0 {
            writeln!(w)?;
        }
        write_summary(w, &RunTotals::from(data), self.color)
    }
}

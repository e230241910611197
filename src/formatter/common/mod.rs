//! Common helpers for formatter implementations.
//!
//! Helper types and the failure/summary block shared by the human readable
//! formatters. They are formatter focused and not meant as general purpose
//! building blocks.

use std::io;

use crate::outcome::ExampleFailure;

pub mod color;
pub mod fto;

use color::colors::*;
use fto::RunTotals;

/// Indentation for a nesting depth, two spaces per level.
pub(crate) fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Write the failure details followed by the one line result summary.
pub(crate) fn write_summary(
    w: &mut dyn io::Write,
    totals: &RunTotals<'_>,
    color: bool,
) -> io::Result<()> {
    if !totals.failures.is_empty() {
        writeln!(w)?;
        writeln!(w, "failures:")?;
        writeln!(w)?;
        for failure in totals.failures.iter() {
            match failure.id {
                Some(id) => writeln!(w, "---- {} [{id}] ----", failure.full_description)?,
                None => writeln!(w, "---- {} ----", failure.full_description)?,
            }
            match failure.failure {
                ExampleFailure::Error(err) => writeln!(w, "Error: {err}")?,
                ExampleFailure::Panicked(msg) => writeln!(w, "panicked: {msg}")?,
            }
            writeln!(w)?;
        }
        writeln!(w, "failures:")?;
        for failure in totals.failures.iter() {
            writeln!(w, "    {}", failure.full_description)?;
        }
    }

    writeln!(w)?;
    write!(w, "test result: ")?;
    match (totals.failed, color) {
        (0, false) => write!(w, "ok. ")?,
        (0, true) => write!(w, "{GREEN}ok{RESET}. ")?,
        (_, false) => write!(w, "FAILED. ")?,
        (_, true) => write!(w, "{RED}FAILED{RESET}. ")?,
    }
    writeln!(
        w,
        "{} passed; {} failed; {} pending; {} filtered out; finished in {:.2}s",
        totals.passed,
        totals.failed,
        totals.pending,
        totals.filtered_out,
        totals.duration.as_secs_f64()
    )?;
    writeln!(w)
}

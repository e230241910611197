//! Output formatting for runs.
//!
//! An execution engine drives every configured [`Formatter`] through the
//! hooks of a run: once at the start, once per group entered and left, once
//! per example outcome and once with all outcomes at the end. Every hook has
//! a no-op default, so a formatter only implements what it prints.
//!
//! Hooks receive the output stream as `&mut dyn io::Write`. Per example data
//! carries the example's [`Metadata`](crate::meta::Metadata), so a formatter
//! can read the stamped `id` and `group_title` from there.
//!
//! Built-in formatters are looked up by name with [`by_name`].

use std::{io, time::Duration};

use crate::{group::ExampleGroup, outcome::ExampleOutcome, report::ExampleRecord, test::ExampleMeta};

pub mod common;
pub mod documentation;
pub mod json;
pub mod progress;

/// Formatter used when a run configuration names none.
pub const DEFAULT_FORMATTER: &str = "progress";

pub type BoxedFormatter = Box<dyn Formatter + Send>;

pub trait Formatter {
    /// Name used to attribute write errors to this formatter.
    fn name(&self) -> &str;

    fn fmt_run_start(&mut self, w: &mut dyn io::Write, data: &FmtRunStart) -> io::Result<()> {
        let _ = (w, data);
        Ok(())
    }

    fn fmt_group_start(
        &mut self,
        w: &mut dyn io::Write,
        data: &FmtGroupStart<'_>,
    ) -> io::Result<()> {
        let _ = (w, data);
        Ok(())
    }

    fn fmt_example_outcome(
        &mut self,
        w: &mut dyn io::Write,
        data: &FmtExampleOutcome<'_>,
    ) -> io::Result<()> {
        let _ = (w, data);
        Ok(())
    }

    fn fmt_group_end(&mut self, w: &mut dyn io::Write, data: &FmtGroupEnd<'_>) -> io::Result<()> {
        let _ = (w, data);
        Ok(())
    }

    fn fmt_run_outcomes(
        &mut self,
        w: &mut dyn io::Write,
        data: &FmtRunOutcomes<'_>,
    ) -> io::Result<()> {
        let _ = (w, data);
        Ok(())
    }
}

/// Create a built-in formatter from its name.
///
/// Known names are `progress`, `documentation` (or `doc`) and `json`.
pub fn by_name(name: &str) -> Option<BoxedFormatter> {
    match name {
        "progress" => Some(Box::new(progress::ProgressFormatter::default())),
        "documentation" | "doc" => Some(Box::new(documentation::DocumentationFormatter::default())),
        "json" => Some(Box::new(json::JsonFormatter::default())),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct FmtRunStart {
    /// Examples that will be reported, pending ones included.
    pub examples: usize,
    pub filtered_out: usize,
    /// Whether the output stream should receive colored output.
    pub color: bool,
}

#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct FmtGroupStart<'t> {
    pub group: &'t ExampleGroup,
    /// Nesting depth, 0 for registered top level groups.
    pub depth: usize,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FmtExampleOutcome<'t> {
    pub example: &'t ExampleMeta,
    pub full_description: String,
    /// Depth of the group declaring the example.
    pub depth: usize,
    pub outcome: ExampleOutcome,
}

#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct FmtGroupEnd<'t> {
    pub group: &'t ExampleGroup,
    pub depth: usize,
}

#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct FmtRunOutcomes<'r> {
    pub records: &'r [ExampleRecord],
    pub filtered_out: usize,
    pub duration: Duration,
}

//! Example filtering.
//!
//! A filter decides which examples take part in a run. Examples that do not
//! match are removed from the run entirely: they are not executed, not shown
//! by formatters and only counted as filtered out.
//!
//! This is different to pending examples, which are still part of the run and
//! show up as pending.
//!
//! Filtering never touches metadata. Stamped ids stay on filtered out
//! examples, and a filter may select examples by their id.
//!
//! Implement [`ExampleFilter`] to define a filter strategy.

use crate::test::ExampleMeta;

mod no;
pub use no::*;

mod default;
pub use default::*;

/// A strategy for selecting which examples are included in a run.
pub trait ExampleFilter {
    /// Whether the example is part of the run.
    ///
    /// `full_description` is the example description prefixed with the
    /// descriptions of all enclosing groups, separated by spaces.
    fn includes(&self, full_description: &str, meta: &ExampleMeta) -> bool;
}

impl<F> ExampleFilter for F
where
    F: Fn(&str, &ExampleMeta) -> bool,
{
    fn includes(&self, full_description: &str, meta: &ExampleMeta) -> bool {
        self(full_description, meta)
    }
}

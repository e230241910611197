use crate::{filter::ExampleFilter, test::ExampleMeta};

/// An [`ExampleFilter`] that does not filter out any examples.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct NoFilter;

impl NoFilter {
    pub fn new() -> Self {
        Self
    }
}

impl ExampleFilter for NoFilter {
    fn includes(&self, _: &str, _: &ExampleMeta) -> bool {
        true
    }
}

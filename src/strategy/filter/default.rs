use crate::{filter::ExampleFilter, test::ExampleMeta};

/// Filter by full description and stamped id.
///
/// - `filter`: keep examples whose full description contains one of the
///   patterns, or equals one of them when `exact` is set; empty keeps all
/// - `skip`: drop examples matching one of the patterns, same matching rules
/// - `ids`: keep only examples stamped with one of these ids; empty keeps all
#[derive(Debug, Default, Clone)]
pub struct DefaultFilter {
    exact: bool,
    filter: Vec<String>,
    skip: Vec<String>,
    ids: Vec<String>,
}

impl DefaultFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exact(self, exact: bool) -> Self {
        Self { exact, ..self }
    }

    pub fn with_filter(self, filter: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            filter: filter.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn with_skip(self, skip: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            skip: skip.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn with_ids(self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    fn matches(&self, name: &str, pattern: &str) -> bool {
        match self.exact {
            true => name == pattern,
            false => name.contains(pattern),
        }
    }
}

impl ExampleFilter for DefaultFilter {
    fn includes(&self, full_description: &str, meta: &ExampleMeta) -> bool {
        let in_filter = self.filter.is_empty()
            || self
                .filter
                .iter()
                .any(|filter| self.matches(full_description, filter));
        if !in_filter {
            return false;
        }

        let skipped = self
            .skip
            .iter()
            .any(|skip| self.matches(full_description, skip));
        if skipped {
            return false;
        }

        self.ids.is_empty()
            || meta
                .metadata
                .id()
                .is_some_and(|id| self.ids.iter().any(|wanted| wanted == id))
    }
}

use crate::group::ExampleGroup;

/// The ordered collection of top level groups making up one run.
///
/// Registration order is execution and reporting order. Registering the same
/// group twice (for example a clone) keeps both entries; the registry never
/// deduplicates.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    groups: Vec<ExampleGroup>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, group: ExampleGroup) {
        tracing::debug!(
            group = group.description(),
            position = self.groups.len(),
            "registering group"
        );
        self.groups.push(group);
    }

    pub fn ordered_groups(&self) -> &[ExampleGroup] {
        &self.groups
    }

    /// Drop every registered group.
    pub fn reset(&mut self) {
        tracing::debug!(dropped = self.groups.len(), "resetting registry");
        self.groups.clear();
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::group::example_group;

    fn descriptions(registry: &Registry) -> Vec<&str> {
        registry
            .ordered_groups()
            .iter()
            .map(ExampleGroup::description)
            .collect()
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = Registry::new();
        for name in ["A", "B", "C"] {
            registry.register(example_group(name, |_| {}));
        }
        assert_eq!(descriptions(&registry), ["A", "B", "C"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let group = example_group("twice", |g| {
            g.example("ok", || ());
        });
        let mut registry = Registry::new();
        registry.register(group.clone());
        registry.register(group);
        assert_eq!(descriptions(&registry), ["twice", "twice"]);
    }

    #[test]
    fn reset_empties_registry() {
        let mut registry = Registry::new();
        registry.register(example_group("A", |_| {}));
        registry.register(example_group("B", |_| {}));
        registry.reset();
        assert!(registry.ordered_groups().is_empty());
        assert!(registry.is_empty());

        registry.register(example_group("C", |_| {}));
        assert_eq!(descriptions(&registry), ["C"]);
    }
}

//! Test groups and the factory that builds them.
//!
//! A group is built from a description and a body. The body receives a
//! [`GroupBuilder`] and declares the examples and nested sub-groups of the
//! group. Example bodies are stored, not called; they run once an execution
//! engine runs the group.
//!
//! Building a group has no side effects. Use
//! [`Runner::add_test`](crate::runner::Runner::add_test) or
//! [`Registry::register`](crate::registry::Registry::register) to make it
//! part of a run.

use std::{borrow::Cow, panic::RefUnwindSafe};

use crate::{
    meta::{MetaValue, Metadata},
    test::{Example, ExampleMeta, PendingStatus, TestFnHandle, TestResult},
};

/// A named, possibly nested container of examples.
#[derive(Debug, Clone, Default)]
pub struct ExampleGroup {
    pub(crate) description: Cow<'static, str>,
    pub(crate) metadata: Metadata,
    pub(crate) examples: Vec<Example>,
    pub(crate) children: Vec<ExampleGroup>,
}

impl ExampleGroup {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Examples declared directly in this group, in declaration order.
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Sub-groups declared directly in this group, in declaration order.
    pub fn children(&self) -> &[ExampleGroup] {
        &self.children
    }

    /// Number of examples in this group and all of its sub-groups.
    pub fn example_count(&self) -> usize {
        self.examples.len()
            + self
                .children
                .iter()
                .map(ExampleGroup::example_count)
                .sum::<usize>()
    }
}

/// Build a group from a description and a body declaring its contents.
pub fn example_group<F>(description: impl Into<Cow<'static, str>>, body: F) -> ExampleGroup
where
    F: FnOnce(&mut GroupBuilder),
{
    example_group_with_metadata(description, Metadata::new(), body)
}

/// Like [`example_group`], starting from existing group metadata.
pub fn example_group_with_metadata<F>(
    description: impl Into<Cow<'static, str>>,
    metadata: Metadata,
    body: F,
) -> ExampleGroup
where
    F: FnOnce(&mut GroupBuilder),
{
    let mut builder = GroupBuilder {
        group: ExampleGroup {
            description: description.into(),
            metadata,
            examples: Vec::new(),
            children: Vec::new(),
        },
    };
    body(&mut builder);
    builder.group
}

/// Declares the contents of a group while its body runs.
#[derive(Debug)]
pub struct GroupBuilder {
    group: ExampleGroup,
}

impl GroupBuilder {
    /// Declare an example. `f` is stored and called when the group runs.
    pub fn example<F, T>(&mut self, description: impl Into<Cow<'static, str>>, f: F) -> &mut Self
    where
        F: Fn() -> T + Send + Sync + RefUnwindSafe + 'static,
        T: Into<TestResult>,
    {
        self.example_with_metadata(description, Metadata::new(), f)
    }

    pub fn example_with_metadata<F, T>(
        &mut self,
        description: impl Into<Cow<'static, str>>,
        metadata: Metadata,
        f: F,
    ) -> &mut Self
    where
        F: Fn() -> T + Send + Sync + RefUnwindSafe + 'static,
        T: Into<TestResult>,
    {
        self.group.examples.push(Example::new(
            TestFnHandle::from_boxed(f),
            ExampleMeta {
                description: description.into(),
                pending: PendingStatus::Run,
                metadata,
            },
        ));
        self
    }

    /// Declare an example that is reported as pending and never run.
    pub fn pending(
        &mut self,
        description: impl Into<Cow<'static, str>>,
        reason: impl Into<PendingStatus>,
    ) -> &mut Self {
        self.group.examples.push(Example::new(
            TestFnHandle::default(),
            ExampleMeta {
                description: description.into(),
                pending: reason.into(),
                metadata: Metadata::new(),
            },
        ));
        self
    }

    /// Declare a nested sub-group.
    pub fn group<F>(&mut self, description: impl Into<Cow<'static, str>>, body: F) -> &mut Self
    where
        F: FnOnce(&mut GroupBuilder),
    {
        self.group.children.push(example_group(description, body));
        self
    }

    /// Set a metadata value on the group being built.
    pub fn metadata(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<MetaValue>,
    ) -> &mut Self {
        self.group.metadata.insert(key, value);
        self
    }
}

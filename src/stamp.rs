//! Identifier propagation.
//!
//! Reporting reads the external id and title from whichever node it is
//! looking at, a group or a single example. Stamping writes the same value
//! into a group, every example it declares and, recursively, every sub-group,
//! so both views always agree.
//!
//! Stamping is unconditional: it does not look at filters or pending status,
//! so examples that end up filtered out or pending still carry the id.

use crate::{
    group::ExampleGroup,
    meta::{GROUP_TITLE_KEY, ID_KEY, MetaValue, Metadata},
    test::Example,
};

/// A node of the group tree that can carry stamped metadata.
///
/// Groups expose their examples and sub-groups, examples are leaves and keep
/// the empty defaults.
pub trait StampTarget {
    fn metadata_mut(&mut self) -> &mut Metadata;

    fn examples_mut(&mut self) -> &mut [Example] {
        &mut []
    }

    fn children_mut(&mut self) -> &mut [ExampleGroup] {
        &mut []
    }
}

impl StampTarget for Example {
    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.meta.metadata
    }
}

impl StampTarget for ExampleGroup {
    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn examples_mut(&mut self) -> &mut [Example] {
        &mut self.examples
    }

    fn children_mut(&mut self) -> &mut [ExampleGroup] {
        &mut self.children
    }
}

/// Write `key = value` into `node` and all of its descendants, depth first.
pub fn stamp<T>(node: &mut T, key: &'static str, value: &MetaValue)
where
    T: StampTarget + ?Sized,
{
    node.metadata_mut().insert(key, value.clone());
    for example in node.examples_mut() {
        stamp(example, key, value);
    }
    for child in node.children_mut() {
        stamp(child, key, value);
    }
}

/// Stamp the external identifier of a check onto a group tree.
pub fn stamp_id(group: &mut ExampleGroup, id: &str) {
    tracing::debug!(id, group = group.description(), "stamping id");
    stamp(group, ID_KEY, &MetaValue::from(id));
}

/// Stamp the display title of a check onto a group tree.
pub fn stamp_title(group: &mut ExampleGroup, title: &str) {
    tracing::debug!(title, group = group.description(), "stamping group title");
    stamp(group, GROUP_TITLE_KEY, &MetaValue::from(title));
}

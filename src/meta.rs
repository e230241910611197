//! Key/value metadata attached to groups and examples.
//!
//! Every [`ExampleGroup`](crate::group::ExampleGroup) and every
//! [`Example`](crate::test::Example) carries its own [`Metadata`]. Most keys are
//! free-form, but two of them have a fixed meaning for reporting:
//! [`ID_KEY`] holds the external identifier of a check and [`GROUP_TITLE_KEY`]
//! holds its display title. Both are written by the [stamping](crate::stamp)
//! functions and read back by formatters.

use std::{borrow::Cow, collections::BTreeMap};

use serde::Serialize;
pub use serde_json::Value as MetaValue;

/// Metadata key holding the external identifier of a check.
pub const ID_KEY: &str = "id";

/// Metadata key holding the display title of a check.
pub const GROUP_TITLE_KEY: &str = "group_title";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<Cow<'static, str>, MetaValue>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one if the key was already set.
    pub fn insert(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<MetaValue>,
    ) -> Option<MetaValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<MetaValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &MetaValue)> {
        self.0.iter().map(|(key, value)| (key.as_ref(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The stamped external identifier, if it is set and a string.
    pub fn id(&self) -> Option<&str> {
        self.get(ID_KEY).and_then(MetaValue::as_str)
    }

    /// The stamped display title, if it is set and a string.
    pub fn group_title(&self) -> Option<&str> {
        self.get(GROUP_TITLE_KEY).and_then(MetaValue::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<Cow<'static, str>>,
    V: Into<MetaValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

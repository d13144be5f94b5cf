//! Selection module - the user's chosen causes for one analysis

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The user's chosen causes, per category
///
/// Keys are raw category keys as supplied by the caller; they are resolved
/// against [`Category`](crate::Category) only at analysis time so unknown keys
/// survive a round trip and are reported rather than lost. Category order is
/// insertion order and each category holds an ordered set of IDs.
///
/// Serializes as a JSON object that keeps the insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<(String, Vec<String>)>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cause ID to a category
    ///
    /// Returns `false` if the ID was already selected in that category.
    pub fn add(&mut self, category: &str, id: impl Into<String>) -> bool {
        let id = id.into();
        let ids = self.entry_mut(category);
        if ids.contains(&id) {
            return false;
        }
        ids.push(id);
        true
    }

    /// Add several IDs to a category, keeping the first occurrence of each
    pub fn extend<I, S>(&mut self, category: &str, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.entry_mut(category);
        for id in ids {
            let id = id.into();
            if !entry.contains(&id) {
                entry.push(id);
            }
        }
    }

    /// Remove a cause ID from a category
    ///
    /// A category left without IDs is dropped. Returns `false` if the ID was not selected.
    pub fn remove(&mut self, category: &str, id: &str) -> bool {
        let Some(pos) = self.entries.iter().position(|(k, _)| k == category) else {
            return false;
        };
        let ids = &mut self.entries[pos].1;
        let Some(idx) = ids.iter().position(|i| i == id) else {
            return false;
        };
        ids.remove(idx);
        if ids.is_empty() {
            self.entries.remove(pos);
        }
        true
    }

    /// Selected IDs of a category (empty if none)
    pub fn ids(&self, category: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == category)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Whether an ID is selected in a category
    pub fn contains(&self, category: &str, id: &str) -> bool {
        self.ids(category).iter().any(|i| i == id)
    }

    /// Category keys in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Categories with their IDs, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of category keys
    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of selected IDs
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, ids)| ids.len()).sum()
    }

    /// Whether no IDs are selected
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn entry_mut(&mut self, category: &str) -> &mut Vec<String> {
        let pos = match self.entries.iter().position(|(k, _)| k == category) {
            Some(pos) => pos,
            None => {
                self.entries.push((category.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, ids) in &self.entries {
            map.serialize_entry(category, ids)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SelectionVisitor;

        impl<'de> Visitor<'de> for SelectionVisitor {
            type Value = Selection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category keys to arrays of cause IDs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Selection, A::Error> {
                let mut selection = Selection::new();
                while let Some((category, ids)) = access.next_entry::<String, Vec<String>>()? {
                    selection.extend(&category, ids);
                }
                Ok(selection)
            }
        }

        deserializer.deserialize_map(SelectionVisitor)
    }
}

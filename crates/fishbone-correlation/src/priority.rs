//! Priority distribution per category

use crate::resolve::resolve_selection;
use fishbone_domain::{Catalog, Category, Priority, PriorityCounts, Selection};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

/// Priority counts per category, in selection order
///
/// Serializes as `{"man": {"Critical": 2, "High": 0, "Medium": 0, "Low": 0}, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityByCategory {
    entries: Vec<(Category, PriorityCounts)>,
}

impl PriorityByCategory {
    /// Counts for one category, if it was part of the analysis
    pub fn get(&self, category: Category) -> Option<&PriorityCounts> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, counts)| counts)
    }

    /// Categories with their counts, in selection order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &PriorityCounts)> {
        self.entries.iter().map(|(c, counts)| (*c, counts))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no category was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts summed over every category
    pub fn totals(&self) -> PriorityCounts {
        let mut totals = PriorityCounts::new();
        for (_, counts) in &self.entries {
            totals.critical += counts.critical;
            totals.high += counts.high;
            totals.medium += counts.medium;
            totals.low += counts.low;
        }
        totals
    }

    fn entry_mut(&mut self, category: Category) -> &mut PriorityCounts {
        let pos = match self.entries.iter().position(|(c, _)| *c == category) {
            Some(pos) => pos,
            None => {
                self.entries.push((category, PriorityCounts::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }
}

impl Serialize for PriorityByCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, counts) in &self.entries {
            map.serialize_entry(category.as_str(), counts)?;
        }
        map.end()
    }
}

/// Count selected causes per priority level for every resolvable category
///
/// Every category present in both the selection and the catalog gets all
/// four levels, starting at zero. Causes are classified with
/// [`Priority::classify`], so a cause without a priority label counts as
/// `Low` here even though it displays as `Medium`.
pub fn calculate_priority_by_category(selection: &Selection, catalog: &Catalog) -> PriorityByCategory {
    let mut distribution = PriorityByCategory::default();

    for group in resolve_selection(selection, catalog) {
        let counts = distribution.entry_mut(group.category);
        for cause in group.causes {
            counts.record(Priority::classify(cause.priority.as_deref()));
        }
    }

    debug!("Priority distribution computed for {} categories", distribution.len());
    distribution
}

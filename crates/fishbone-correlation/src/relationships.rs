//! Solution-based relationships between selected causes

use crate::resolve::selected_causes;
use crate::text::normalize_solution;
use fishbone_domain::{Catalog, Selection};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Cause ID to the IDs of other selected causes sharing at least one normalized solution
///
/// Sorted containers keep serialization byte-stable; consumers should still
/// treat each related set as unordered.
pub type SolutionRelationships = BTreeMap<String, BTreeSet<String>>;

/// Relate selected causes that offer the same normalized solution
///
/// Two passes: the first indexes each normalized solution to the causes
/// offering it, the second unions those buckets per cause, minus the cause
/// itself. Causes without any related cause are absent from the result. The
/// relation is symmetric but not transitively closed.
pub fn get_solution_relationships(selection: &Selection, catalog: &Catalog) -> SolutionRelationships {
    let causes = selected_causes(selection, catalog);

    let mut index: HashMap<String, Vec<&str>> = HashMap::new();
    for cause in &causes {
        for solution in cause.clean_solutions() {
            let bucket = index.entry(normalize_solution(solution)).or_default();
            if !bucket.contains(&cause.id.as_str()) {
                bucket.push(&cause.id);
            }
        }
    }

    let mut relationships = SolutionRelationships::new();
    for cause in &causes {
        let related: BTreeSet<String> = cause
            .clean_solutions()
            .filter_map(|solution| index.get(&normalize_solution(solution)))
            .flatten()
            .filter(|id| **id != cause.id)
            .map(|id| id.to_string())
            .collect();

        if !related.is_empty() {
            relationships.insert(cause.id.clone(), related);
        }
    }

    debug!(
        "Indexed {} solutions, {} causes have relationships",
        index.len(),
        relationships.len()
    );
    relationships
}

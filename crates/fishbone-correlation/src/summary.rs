//! Headline numbers for an analysis

use crate::resolve::resolve_selection;
use fishbone_domain::{Catalog, Selection};
use serde::Serialize;

/// Number of IDs selected under one category key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category key as it appears in the selection
    pub category: String,
    /// Selected IDs, resolvable or not
    pub selected: usize,
}

/// Summary of a selection
///
/// `total_causes` counts what the user picked under every key; `resolved_causes`
/// counts what the catalog could back, once per ID and category.
/// `critical_causes` requires the trimmed priority label to be exactly
/// `critical` (any case), which is stricter than the substring classification
/// used for the priority distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    /// Selected IDs across all categories
    pub total_causes: usize,
    /// Selected IDs found in the catalog
    pub resolved_causes: usize,
    /// Resolved causes labelled exactly `critical`
    pub critical_causes: usize,
    /// Category keys with at least one selected ID
    pub categories_with_causes: usize,
    /// Per-key selected counts, in selection order
    pub per_category: Vec<CategoryCount>,
}

/// Compute the summary of a selection
pub fn summarize(selection: &Selection, catalog: &Catalog) -> AnalysisSummary {
    let per_category: Vec<CategoryCount> = selection
        .iter()
        .filter(|(_, ids)| !ids.is_empty())
        .map(|(key, ids)| CategoryCount {
            category: key.to_string(),
            selected: ids.len(),
        })
        .collect();

    let mut summary = AnalysisSummary {
        total_causes: selection.total(),
        categories_with_causes: per_category.len(),
        per_category,
        ..Default::default()
    };

    for group in resolve_selection(selection, catalog) {
        summary.resolved_causes += group.causes.len();
        summary.critical_causes += group
            .causes
            .iter()
            .filter(|c| {
                c.priority
                    .as_deref()
                    .is_some_and(|p| p.trim().eq_ignore_ascii_case("critical"))
            })
            .count();
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use fishbone_domain::{Category, Cause};

    #[test]
    fn test_summary_counts() {
        let catalog = Catalog::from_causes([
            Cause::new("man-001", "A", Category::Man).with_priority("Critical"),
            Cause::new("man-002", "B", Category::Man).with_priority("High-Critical"),
            Cause::new("machine-001", "C", Category::Machine).with_priority("CRITICAL"),
        ])
        .unwrap();

        let mut selection = Selection::new();
        selection.extend("man", ["man-001", "man-002", "man-999"]);
        selection.add("machine", "machine-001");
        selection.extend("method", Vec::<String>::new());

        let summary = summarize(&selection, &catalog);
        assert_eq!(summary.total_causes, 4);
        assert_eq!(summary.resolved_causes, 3);
        assert_eq!(summary.critical_causes, 2);
        assert_eq!(summary.categories_with_causes, 2);
        assert_eq!(summary.per_category[0].category, "man");
        assert_eq!(summary.per_category[0].selected, 3);
    }

    #[test]
    fn test_critical_label_is_trimmed_before_matching() {
        let catalog = Catalog::from_causes([
            Cause::new("man-001", "A", Category::Man).with_priority("  critical "),
            Cause::new("man-002", "B", Category::Man).with_priority("Critical!"),
        ])
        .unwrap();

        let mut selection = Selection::new();
        selection.extend("man", ["man-001", "man-002"]);

        assert_eq!(summarize(&selection, &catalog).critical_causes, 1);
    }

    #[test]
    fn test_id_under_aliased_keys_resolves_once() {
        let catalog =
            Catalog::from_causes([Cause::new("man-001", "A", Category::Man).with_priority("Critical")]).unwrap();

        let mut selection = Selection::new();
        selection.add("man", "man-001");
        selection.add("MAN", "man-001");

        let summary = summarize(&selection, &catalog);
        assert_eq!(summary.total_causes, 2);
        assert_eq!(summary.resolved_causes, 1);
        assert_eq!(summary.critical_causes, 1);
    }
}

//! Solution ranking and per-category solution lists

use crate::resolve::{resolve_selection, selected_causes};
use crate::text::{normalize_solution, OrderedCounter};
use fishbone_domain::{Catalog, Category, Selection};
use serde::Serialize;
use tracing::debug;

/// Default number of solutions returned by [`get_top_solutions`]
pub const DEFAULT_TOP_SOLUTIONS: i64 = 5;

/// Clamp a requested limit to at least one entry
pub fn effective_limit(limit: i64) -> usize {
    usize::try_from(limit.max(1)).unwrap_or(usize::MAX)
}

/// Most frequently offered solutions across the selected causes
///
/// Solutions are grouped by their normalized form and counted once per
/// occurrence in a selected cause's list. The returned strings are the first
/// trimmed original seen for each group. Ties keep encounter order. A `limit`
/// of zero or below still yields one entry when any solution exists.
///
/// # Examples
///
/// ```
/// use fishbone_correlation::get_top_solutions;
/// use fishbone_domain::{Catalog, Category, Cause, Selection};
///
/// let catalog = Catalog::from_causes([
///     Cause::new("man-001", "A", Category::Man).with_solutions(["Audit", "Training"]),
///     Cause::new("man-002", "B", Category::Man).with_solutions(["audit "]),
/// ]).unwrap();
/// let mut selection = Selection::new();
/// selection.extend("man", ["man-001", "man-002"]);
///
/// assert_eq!(get_top_solutions(&selection, &catalog, -5), vec!["Audit"]);
/// ```
pub fn get_top_solutions(selection: &Selection, catalog: &Catalog, limit: i64) -> Vec<String> {
    let mut counter = OrderedCounter::new();

    for cause in selected_causes(selection, catalog) {
        for solution in cause.clean_solutions() {
            counter.record(normalize_solution(solution), solution);
        }
    }

    debug!("Ranking {} distinct solutions", counter.len());
    counter
        .into_ranked()
        .into_iter()
        .take(effective_limit(limit))
        .map(|entry| entry.representative)
        .collect()
}

/// De-duplicated solutions offered by one category's selected causes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySolutions {
    /// Category
    pub category: Category,
    /// Display name of the category
    pub name: String,
    /// Trimmed solutions in encounter order, exact duplicates removed
    pub solutions: Vec<String>,
}

/// Group the selected causes' solutions by category
///
/// Categories whose causes offer no solutions are left out.
pub fn solutions_by_category(selection: &Selection, catalog: &Catalog) -> Vec<CategorySolutions> {
    resolve_selection(selection, catalog)
        .into_iter()
        .filter_map(|group| {
            let mut solutions: Vec<String> = Vec::new();
            for solution in group.causes.iter().flat_map(|c| c.clean_solutions()) {
                if !solutions.iter().any(|s| s == solution) {
                    solutions.push(solution.to_string());
                }
            }
            if solutions.is_empty() {
                return None;
            }
            Some(CategorySolutions {
                category: group.category,
                name: group.category.display_name().to_string(),
                solutions,
            })
        })
        .collect()
}

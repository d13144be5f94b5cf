//! Keyword patterns mined from case examples

use crate::resolve::selected_causes;
use crate::text::{keywords, OrderedCounter};
use fishbone_domain::{Catalog, Selection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default and minimum occurrence count for a keyword to be reported
pub const MIN_PATTERN_COUNT: i64 = 2;

/// A keyword recurring across the selected causes' case examples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePattern {
    /// Lower-cased keyword
    pub keyword: String,
    /// Occurrences across all selected case examples
    pub count: usize,
    /// Trimmed keyword, for consumers that key on a normalized form
    pub normalized_keyword: String,
}

/// Raise a requested threshold to the minimum of two
pub fn effective_threshold(threshold: i64) -> usize {
    usize::try_from(threshold.max(MIN_PATTERN_COUNT)).unwrap_or(usize::MAX)
}

/// Keywords that recur in the selected causes' case examples
///
/// Counts are global across categories. Only keywords occurring at least
/// `max(2, threshold)` times are returned, by descending count with ties in
/// encounter order.
pub fn get_common_case_patterns(selection: &Selection, catalog: &Catalog, threshold: i64) -> Vec<CasePattern> {
    let mut counter = OrderedCounter::new();

    for cause in selected_causes(selection, catalog) {
        let Some(text) = cause.case_text() else {
            continue;
        };
        for keyword in keywords(text) {
            counter.record(keyword.clone(), &keyword);
        }
    }

    let floor = effective_threshold(threshold);
    debug!("Mined {} distinct keywords, reporting count >= {}", counter.len(), floor);

    counter
        .into_ranked()
        .into_iter()
        .filter(|entry| entry.count >= floor)
        .map(|entry| CasePattern {
            normalized_keyword: entry.key.trim().to_string(),
            keyword: entry.key,
            count: entry.count,
        })
        .filter(|pattern| !pattern.normalized_keyword.is_empty())
        .collect()
}

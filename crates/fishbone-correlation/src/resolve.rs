//! Resolution of a selection against the catalog

use fishbone_domain::{Catalog, Category, Cause, Selection};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// One selection category resolved against the catalog
#[derive(Debug)]
pub(crate) struct ResolvedCategory<'a> {
    /// Parsed category
    pub category: Category,
    /// Number of distinct IDs selected for this category, resolvable or not
    pub selected: usize,
    /// Causes that exist in the catalog, in selection order
    pub causes: Vec<&'a Cause>,
}

/// Resolve every selection category that the catalog provides
///
/// Unknown category keys, categories missing from the catalog and dangling
/// IDs are skipped with a warning. Lookup is scoped to the selection key's
/// category; an ID that lives in another category is treated as dangling.
/// Aliased keys such as `man` and `MAN` merge into one group, and an ID
/// already seen for that category is counted once.
pub(crate) fn resolve_selection<'a>(
    selection: &'a Selection,
    catalog: &'a Catalog,
) -> Vec<ResolvedCategory<'a>> {
    let mut resolved: Vec<ResolvedCategory<'a>> = Vec::with_capacity(selection.category_count());
    let mut seen: HashMap<Category, HashSet<&'a str>> = HashMap::new();

    for (key, ids) in selection.iter() {
        let Some(category) = Category::parse(key) else {
            warn!("Category {} is not a known category, skipping", key);
            continue;
        };
        if !catalog.has_category(category) {
            warn!("Category {} not found in catalog, skipping", key);
            continue;
        }

        let pos = match resolved.iter().position(|group| group.category == category) {
            Some(pos) => pos,
            None => {
                resolved.push(ResolvedCategory {
                    category,
                    selected: 0,
                    causes: Vec::new(),
                });
                resolved.len() - 1
            }
        };
        let seen_ids = seen.entry(category).or_default();
        let group = &mut resolved[pos];

        for id in ids {
            if !seen_ids.insert(id.as_str()) {
                debug!("Cause {} already selected under {}, counting once", id, category);
                continue;
            }
            group.selected += 1;
            match catalog.find(category, id) {
                Some(cause) => group.causes.push(cause),
                None => warn!("Cause with ID {} not found in category {}", id, key),
            }
        }
    }

    resolved
}

/// Resolved causes across all categories, in selection order
pub(crate) fn selected_causes<'a>(selection: &'a Selection, catalog: &'a Catalog) -> Vec<&'a Cause> {
    resolve_selection(selection, catalog)
        .into_iter()
        .flat_map(|group| group.causes)
        .collect()
}

//! Select command implementation.

use crate::cli::{SelectAction, SelectArgs};
use crate::commands::parse_category;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use fishbone_domain::traits::SelectionStore;
use fishbone_domain::{Catalog, Selection};
use fishbone_store::StoreError;

/// Execute the select command.
pub fn execute_select<S>(
    args: SelectArgs,
    catalog: &Catalog,
    store: &mut S,
    formatter: &Formatter,
) -> Result<String>
where
    S: SelectionStore<Error = StoreError>,
{
    match args.action {
        SelectAction::Add { category, ids } => add(&category, ids, catalog, store, formatter),
        SelectAction::Remove { category, ids } => remove(&category, ids, store, formatter),
        SelectAction::List => {
            let selection = store.load()?.unwrap_or_default();
            formatter.format_selection(&selection, catalog)
        }
        SelectAction::Clear => {
            store.clear()?;
            Ok(formatter.success("Selection cleared"))
        }
    }
}

fn add<S>(
    key: &str,
    ids: Vec<String>,
    catalog: &Catalog,
    store: &mut S,
    formatter: &Formatter,
) -> Result<String>
where
    S: SelectionStore<Error = StoreError>,
{
    let category = parse_category(key)?;
    let key = category.as_str();
    let mut selection = store.load()?.unwrap_or_default();

    let mut lines = Vec::new();
    let mut added = 0;
    let mut unknown = Vec::new();
    for id in ids {
        let id = id.trim();
        if catalog.find(category, id).is_none() {
            let message = match catalog.find_any(id) {
                Some(other) => format!("{} belongs to {}, not {}", id, other.category, key),
                None => format!("{} is not a {} cause", id, key),
            };
            lines.push(formatter.error(&message));
            unknown.push(id.to_string());
        } else if selection.add(key, id) {
            added += 1;
        } else {
            lines.push(formatter.warning(&format!("{} is already selected", id)));
        }
    }

    if added == 0 && !unknown.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "Unknown cause ID(s) in {}: {}",
            key,
            unknown.join(", ")
        )));
    }
    if added > 0 {
        store.save(&selection)?;
    }
    lines.push(summary_line(formatter, "Added", added, &selection));
    Ok(lines.join("\n"))
}

fn remove<S>(key: &str, ids: Vec<String>, store: &mut S, formatter: &Formatter) -> Result<String>
where
    S: SelectionStore<Error = StoreError>,
{
    let key = parse_category(key)?.as_str();
    let mut selection = store.load()?.unwrap_or_default();

    let mut lines = Vec::new();
    let mut removed = 0;
    for id in ids {
        if selection.remove(key, id.trim()) {
            removed += 1;
        } else {
            lines.push(formatter.warning(&format!("{} is not selected", id.trim())));
        }
    }

    if removed > 0 {
        store.save(&selection)?;
    }
    lines.push(summary_line(formatter, "Removed", removed, &selection));
    Ok(lines.join("\n"))
}

fn summary_line(formatter: &Formatter, verb: &str, count: usize, selection: &Selection) -> String {
    let message = format!("{} {} cause(s); {} selected in total", verb, count, selection.total());
    if count > 0 {
        formatter.success(&message)
    } else {
        formatter.info(&message)
    }
}

//! Command implementations.
//!
//! Each command returns the text to print so callers decide where it goes.

pub mod analyze;
pub mod catalog;
pub mod report;
pub mod select;

pub use self::analyze::execute_analyze;
pub use self::catalog::execute_catalog;
pub use self::report::execute_report;
pub use self::select::execute_select;

use crate::error::{CliError, Result};
use fishbone_domain::traits::SelectionStore;
use fishbone_domain::{Category, Selection};
use fishbone_store::StoreError;

/// Parse a category key given on the command line.
pub(crate) fn parse_category(key: &str) -> Result<Category> {
    Category::parse(key).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        CliError::InvalidInput(format!(
            "Unknown category '{}' (expected one of: {})",
            key,
            known.join(", ")
        ))
    })
}

/// Load the stored selection, failing when nothing has been selected.
pub(crate) fn require_selection<S>(store: &S) -> Result<Selection>
where
    S: SelectionStore<Error = StoreError>,
{
    match store.load()? {
        Some(selection) if !selection.is_empty() => Ok(selection),
        _ => Err(CliError::EmptySelection),
    }
}

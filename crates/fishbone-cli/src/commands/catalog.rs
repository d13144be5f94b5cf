//! Catalog command implementation.

use crate::cli::CatalogArgs;
use crate::commands::parse_category;
use crate::error::Result;
use crate::output::Formatter;
use fishbone_domain::Catalog;

/// Execute the catalog command.
pub fn execute_catalog(args: CatalogArgs, catalog: &Catalog, formatter: &Formatter) -> Result<String> {
    let only = args.category.as_deref().map(parse_category).transpose()?;
    formatter.format_catalog(catalog, only)
}

//! Report command implementation.

use crate::cli::ReportArgs;
use crate::commands::require_selection;
use crate::error::Result;
use crate::output::Formatter;
use fishbone_correlation::{Approval, CorrelationConfig, CorrelationEngine};
use fishbone_domain::traits::SelectionStore;
use fishbone_domain::Catalog;
use fishbone_store::StoreError;

/// Execute the report command.
pub fn execute_report<S>(
    args: ReportArgs,
    catalog: &Catalog,
    store: &S,
    config: &CorrelationConfig,
    formatter: &Formatter,
) -> Result<String>
where
    S: SelectionStore<Error = StoreError>,
{
    let selection = require_selection(store)?;
    let approval = Approval::new(&args.creator, &args.supervisor);
    let report = CorrelationEngine::new(config.clone()).report(&selection, catalog, approval);
    formatter.format_report(&report)
}

//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::commands::require_selection;
use crate::error::Result;
use crate::output::Formatter;
use fishbone_correlation::{CorrelationConfig, CorrelationEngine};
use fishbone_domain::traits::SelectionStore;
use fishbone_domain::Catalog;
use fishbone_store::StoreError;

/// Execute the analyze command.
pub fn execute_analyze<S>(
    args: AnalyzeArgs,
    catalog: &Catalog,
    store: &S,
    config: &CorrelationConfig,
    formatter: &Formatter,
) -> Result<String>
where
    S: SelectionStore<Error = StoreError>,
{
    let selection = require_selection(store)?;

    // Command-line values override the configured defaults
    let mut config = config.clone();
    if let Some(limit) = args.limit {
        config.top_solutions_limit = limit;
    }
    if let Some(threshold) = args.threshold {
        config.pattern_threshold = threshold;
    }

    let engine = CorrelationEngine::new(config);
    let summary = engine.summarize(&selection, catalog);
    let report = engine.analyze(&selection, catalog);
    formatter.format_analysis(&summary, &report)
}

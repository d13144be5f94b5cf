//! Engine facade bundling the correlation operations with a configuration

use crate::patterns::{get_common_case_patterns, CasePattern};
use crate::priority::{calculate_priority_by_category, PriorityByCategory};
use crate::relationships::{get_solution_relationships, SolutionRelationships};
use crate::report::{AnalysisReport, Approval};
use crate::solutions::get_top_solutions;
use crate::summary::{summarize, AnalysisSummary};
use crate::CorrelationConfig;
use fishbone_domain::{Catalog, Selection};
use serde::Serialize;
use tracing::{debug, warn};

/// All four correlation outputs for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrelationReport {
    /// Priority counts per category
    pub priority_by_category: PriorityByCategory,
    /// Most frequent solutions
    pub top_solutions: Vec<String>,
    /// Causes linked by shared solutions
    pub relationships: SolutionRelationships,
    /// Recurring case-example keywords
    pub case_patterns: Vec<CasePattern>,
}

/// Correlation engine
///
/// Stateless apart from its configuration; every method borrows the
/// selection and catalog for the duration of the call and returns owned data.
///
/// # Examples
///
/// ```
/// use fishbone_correlation::{CorrelationConfig, CorrelationEngine};
/// use fishbone_domain::{Catalog, Category, Cause, Selection};
///
/// let catalog = Catalog::from_causes([
///     Cause::new("man-001", "A", Category::Man)
///         .with_priority("Critical")
///         .with_solutions(["Training X", "Audit"]),
///     Cause::new("man-003", "B", Category::Man)
///         .with_priority("Critical")
///         .with_solutions(["Audit", "Leadership"]),
/// ]).unwrap();
///
/// let mut selection = Selection::new();
/// selection.extend("man", ["man-001", "man-003"]);
///
/// let engine = CorrelationEngine::new(CorrelationConfig::default());
/// let report = engine.analyze(&selection, &catalog);
///
/// assert_eq!(report.priority_by_category.get(Category::Man).unwrap().critical, 2);
/// assert!(report.relationships["man-001"].contains("man-003"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CorrelationEngine {
    config: CorrelationConfig,
}

impl CorrelationEngine {
    /// Create an engine with the given configuration
    pub fn new(config: CorrelationConfig) -> Self {
        for note in config.coercions() {
            warn!("Correlation config: {}", note);
        }
        Self { config }
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(CorrelationConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &CorrelationConfig {
        &self.config
    }

    /// Priority counts per category
    pub fn priority_by_category(&self, selection: &Selection, catalog: &Catalog) -> PriorityByCategory {
        calculate_priority_by_category(selection, catalog)
    }

    /// Top solutions using the configured limit
    pub fn top_solutions(&self, selection: &Selection, catalog: &Catalog) -> Vec<String> {
        get_top_solutions(selection, catalog, self.config.top_solutions_limit)
    }

    /// Causes linked by shared solutions
    pub fn solution_relationships(&self, selection: &Selection, catalog: &Catalog) -> SolutionRelationships {
        get_solution_relationships(selection, catalog)
    }

    /// Case patterns using the configured threshold
    pub fn case_patterns(&self, selection: &Selection, catalog: &Catalog) -> Vec<CasePattern> {
        get_common_case_patterns(selection, catalog, self.config.pattern_threshold)
    }

    /// Headline numbers
    pub fn summarize(&self, selection: &Selection, catalog: &Catalog) -> AnalysisSummary {
        summarize(selection, catalog)
    }

    /// Run all four correlation operations
    pub fn analyze(&self, selection: &Selection, catalog: &Catalog) -> CorrelationReport {
        debug!(
            "Analyzing {} selected causes across {} categories",
            selection.total(),
            selection.category_count()
        );
        CorrelationReport {
            priority_by_category: self.priority_by_category(selection, catalog),
            top_solutions: self.top_solutions(selection, catalog),
            relationships: self.solution_relationships(selection, catalog),
            case_patterns: self.case_patterns(selection, catalog),
        }
    }

    /// Build the full structured report
    pub fn report(&self, selection: &Selection, catalog: &Catalog, approval: Option<Approval>) -> AnalysisReport {
        AnalysisReport::build(selection, catalog, &self.config, approval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fishbone_domain::{Category, Cause};

    fn catalog() -> Catalog {
        Catalog::from_causes((1..=8).map(|n| {
            Cause::new(format!("method-{:03}", n), format!("Cause {}", n), Category::Method)
                .with_solutions([format!("Solution {}", n), "Shared".to_string()])
        }))
        .unwrap()
    }

    #[test]
    fn test_configured_limit_applies() {
        let mut selection = Selection::new();
        selection.extend("method", (1..=8).map(|n| format!("method-{:03}", n)));

        let engine = CorrelationEngine::new(CorrelationConfig {
            top_solutions_limit: 3,
            ..Default::default()
        });
        let top = engine.top_solutions(&selection, &catalog());
        assert_eq!(top, vec!["Shared", "Solution 1", "Solution 2"]);

        let default_top = CorrelationEngine::default_config().top_solutions(&selection, &catalog());
        assert_eq!(default_top.len(), 5);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let mut selection = Selection::new();
        selection.extend("method", ["method-001", "method-002", "method-003"]);

        let engine = CorrelationEngine::default_config();
        let first = serde_json::to_string(&engine.analyze(&selection, &catalog())).unwrap();
        let second = serde_json::to_string(&engine.analyze(&selection, &catalog())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_selection_gives_empty_outputs() {
        let engine = CorrelationEngine::default_config();
        let report = engine.analyze(&Selection::new(), &catalog());
        assert!(report.priority_by_category.is_empty());
        assert!(report.top_solutions.is_empty());
        assert!(report.relationships.is_empty());
        assert!(report.case_patterns.is_empty());
    }
}

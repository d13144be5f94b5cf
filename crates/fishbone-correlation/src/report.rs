//! Structured analysis report
//!
//! The report is plain serializable data: summary, priority table, per-category
//! cause details, rankings and an optional approval block. Category and
//! priority colors are carried along so a renderer can draw the diagram and
//! badges. Presentation is up to the consumer.

use crate::patterns::{get_common_case_patterns, CasePattern};
use crate::priority::{calculate_priority_by_category, PriorityByCategory};
use crate::relationships::{get_solution_relationships, SolutionRelationships};
use crate::resolve::resolve_selection;
use crate::solutions::{get_top_solutions, solutions_by_category, CategorySolutions};
use crate::summary::{summarize, AnalysisSummary};
use crate::CorrelationConfig;
use fishbone_domain::{Catalog, Category, Cause, Selection};
use serde::Serialize;

/// Title used for every report
pub const REPORT_TITLE: &str = "Fishbone Analysis Report";

/// Names of the people signing off the analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Approval {
    /// Person who prepared the analysis
    pub creator: String,
    /// Supervisor approving it
    pub supervisor: String,
}

impl Approval {
    /// Build an approval block, or `None` when both names are blank
    pub fn new(creator: &str, supervisor: &str) -> Option<Self> {
        let creator = creator.trim();
        let supervisor = supervisor.trim();
        if creator.is_empty() && supervisor.is_empty() {
            return None;
        }
        Some(Self {
            creator: creator.to_string(),
            supervisor: supervisor.to_string(),
        })
    }
}

/// Display-ready view of one selected cause
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CauseDetail {
    /// Cause ID
    pub id: String,
    /// Title
    pub title: String,
    /// Priority label, `Medium` when absent
    pub priority: String,
    /// Badge color of the priority level
    pub priority_color: String,
    /// Description or placeholder
    pub description: String,
    /// Trimmed, non-blank solutions
    pub solutions: Vec<String>,
}

impl From<&Cause> for CauseDetail {
    fn from(cause: &Cause) -> Self {
        Self {
            id: cause.id.clone(),
            title: cause.cause.clone(),
            priority: cause.priority_label().to_string(),
            priority_color: cause.priority().hex_color().to_string(),
            description: cause.description_or_default().to_string(),
            solutions: cause.clean_solutions().map(str::to_string).collect(),
        }
    }
}

/// Selected causes of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDetail {
    /// Category
    pub category: Category,
    /// Display name
    pub name: String,
    /// Bone color of the category
    pub color: String,
    /// IDs selected under this category, resolvable or not
    pub selected: usize,
    /// Resolved causes in selection order
    pub causes: Vec<CauseDetail>,
}

/// Complete analysis of a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Report title
    pub title: String,
    /// Headline numbers
    pub summary: AnalysisSummary,
    /// Priority counts per category
    pub priority_distribution: PriorityByCategory,
    /// Selected causes grouped by category
    pub details: Vec<CategoryDetail>,
    /// Most frequent solutions
    pub top_solutions: Vec<String>,
    /// Solutions offered per category
    pub solutions_by_category: Vec<CategorySolutions>,
    /// Causes linked by shared solutions
    pub relationships: SolutionRelationships,
    /// Recurring case-example keywords
    pub case_patterns: Vec<CasePattern>,
    /// Sign-off block, present only when a name was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval: Option<Approval>,
}

impl AnalysisReport {
    /// Build a report for a selection
    pub fn build(
        selection: &Selection,
        catalog: &Catalog,
        config: &CorrelationConfig,
        approval: Option<Approval>,
    ) -> Self {
        let details = resolve_selection(selection, catalog)
            .into_iter()
            .map(|group| CategoryDetail {
                category: group.category,
                name: group.category.display_name().to_string(),
                color: group.category.hex_color().to_string(),
                selected: group.selected,
                causes: group.causes.into_iter().map(CauseDetail::from).collect(),
            })
            .collect();

        Self {
            title: REPORT_TITLE.to_string(),
            summary: summarize(selection, catalog),
            priority_distribution: calculate_priority_by_category(selection, catalog),
            details,
            top_solutions: get_top_solutions(selection, catalog, config.top_solutions_limit),
            solutions_by_category: solutions_by_category(selection, catalog),
            relationships: get_solution_relationships(selection, catalog),
            case_patterns: get_common_case_patterns(selection, catalog, config.pattern_threshold),
            approval,
        }
    }
}

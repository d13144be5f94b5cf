//! Fishbone Correlation Engine
//!
//! Derives aggregate insights from a user's [`Selection`](fishbone_domain::Selection)
//! of causes and the [`Catalog`](fishbone_domain::Catalog) they come from.
//!
//! # Overview
//!
//! Four pure operations form the engine:
//! - **Priority distribution**: Critical/High/Medium/Low counts per category
//! - **Top solutions**: most frequently offered remedies, grouped by normalized text
//! - **Solution relationships**: causes linked because they share a remedy
//! - **Case patterns**: keywords that recur across case-example narratives
//!
//! On top of these sit an analysis summary, per-category solution lists and a
//! structured report model.
//!
//! # Error Handling
//!
//! Every operation is total. Unknown category keys, categories the catalog
//! does not provide and dangling cause IDs are skipped with a `tracing`
//! warning; the result simply reflects what could be resolved.
//!
//! # Usage
//!
//! ```
//! use fishbone_correlation::{get_solution_relationships, calculate_priority_by_category};
//! use fishbone_domain::{Catalog, Category, Cause, Selection};
//!
//! let catalog = Catalog::from_causes([
//!     Cause::new("man-001", "A", Category::Man)
//!         .with_priority("Critical")
//!         .with_solutions(["Training X", "Audit"]),
//!     Cause::new("man-003", "B", Category::Man)
//!         .with_priority("Critical")
//!         .with_solutions(["Audit", "Leadership"]),
//! ]).unwrap();
//!
//! let mut selection = Selection::new();
//! selection.extend("man", ["man-001", "man-003", "man-999"]);
//!
//! let priorities = calculate_priority_by_category(&selection, &catalog);
//! assert_eq!(priorities.get(Category::Man).unwrap().critical, 2);
//!
//! let relationships = get_solution_relationships(&selection, &catalog);
//! assert!(relationships["man-003"].contains("man-001"));
//! ```
//!
//! # Configuration
//!
//! Default result sizes can be configured via TOML:
//!
//! ```toml
//! [correlation]
//! top_solutions_limit = 5
//! pattern_threshold = 2
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod patterns;
mod priority;
mod relationships;
mod report;
mod resolve;
mod solutions;
mod summary;
pub mod text;

pub use config::CorrelationConfig;
pub use engine::{CorrelationEngine, CorrelationReport};
pub use patterns::{effective_threshold, get_common_case_patterns, CasePattern, MIN_PATTERN_COUNT};
pub use priority::{calculate_priority_by_category, PriorityByCategory};
pub use relationships::{get_solution_relationships, SolutionRelationships};
pub use report::{AnalysisReport, Approval, CategoryDetail, CauseDetail, REPORT_TITLE};
pub use solutions::{
    effective_limit, get_top_solutions, solutions_by_category, CategorySolutions,
    DEFAULT_TOP_SOLUTIONS,
};
pub use summary::{summarize, AnalysisSummary, CategoryCount};

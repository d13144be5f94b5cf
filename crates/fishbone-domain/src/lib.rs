//! Fishbone Domain Layer
//!
//! Core value types for fishbone (Ishikawa) root-cause analysis of workplace
//! safety incidents. This crate performs no I/O; it defines the concepts that
//! the correlation engine, the stores and the CLI share.
//!
//! ## Key Concepts
//!
//! - **Category**: one of the six fixed "6M" bones (man, method, machine, measurement, material, mothernature)
//! - **Cause**: a catalogued potential root cause with priority, solutions and a case example
//! - **Catalog**: immutable mapping from category to its ordered causes
//! - **Selection**: the user's chosen cause IDs per category
//! - **Priority**: Critical, High, Medium or Low
//!
//! ## Architecture
//!
//! - Only `serde` derives as an external dependency
//! - Catalog is passed explicitly, never looked up globally
//! - Trait definitions for the stores that feed the engine

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod category;
pub mod cause;
pub mod priority;
pub mod selection;
pub mod traits;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogBuilder};
pub use category::Category;
pub use cause::Cause;
pub use priority::{Priority, PriorityCounts};
pub use selection::Selection;

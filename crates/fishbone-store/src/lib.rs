//! Fishbone Storage Layer
//!
//! File-backed implementations of the domain store traits.
//!
//! # Architecture
//!
//! - [`JsonCatalogSource`] loads the cause catalog from a JSON file
//! - [`JsonFileSelectionStore`] persists the user's selection as a JSON snapshot
//! - [`MemorySelectionStore`] keeps the selection in process, for tests and embedding
//!
//! # Examples
//!
//! ```no_run
//! use fishbone_domain::traits::{CatalogSource, SelectionStore};
//! use fishbone_store::{JsonCatalogSource, JsonFileSelectionStore};
//!
//! let catalog = JsonCatalogSource::new("catalog.json").load_catalog().unwrap();
//! let selection = JsonFileSelectionStore::new("selection.json").load().unwrap();
//! println!("{} causes, selection present: {}", catalog.len(), selection.is_some());
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod selection;

pub use catalog::{load_catalog, parse_catalog, JsonCatalogSource};
pub use error::StoreError;
pub use selection::{parse_snapshot, JsonFileSelectionStore, MemorySelectionStore};

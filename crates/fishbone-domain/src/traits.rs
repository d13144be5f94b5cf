//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations live in other crates.

use crate::{Catalog, Selection};

/// Trait for persisting the user's selection between the picking step and the analysis step
///
/// Implemented by the infrastructure layer (fishbone-store)
pub trait SelectionStore {
    /// Error type for store operations
    type Error;

    /// Persist the selection, replacing any previous one
    fn save(&mut self, selection: &Selection) -> Result<(), Self::Error>;

    /// Load the persisted selection, if any
    fn load(&self) -> Result<Option<Selection>, Self::Error>;

    /// Forget the persisted selection
    fn clear(&mut self) -> Result<(), Self::Error>;
}

/// Trait for supplying the cause catalog
///
/// Implemented by the infrastructure layer (fishbone-store)
pub trait CatalogSource {
    /// Error type for loading
    type Error;

    /// Load the full catalog
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

//! Catalog module - the immutable mapping from category to causes

use crate::{Category, Cause};
use std::collections::{BTreeMap, HashSet};

/// Immutable catalog of causes grouped by category
///
/// Built once (usually by the catalog store) and then shared by reference
/// with the correlation engine. A category can be absent when the source did
/// not provide it; lookups in that category return `None`.
///
/// # Examples
///
/// ```
/// use fishbone_domain::{Catalog, Category, Cause};
///
/// let catalog = Catalog::from_causes([
///     Cause::new("man-001", "Kurangnya kesadaran bahaya", Category::Man),
///     Cause::new("method-001", "SOP tidak jelas", Category::Method),
/// ]).unwrap();
///
/// assert!(catalog.find(Category::Man, "man-001").is_some());
/// // Lookup is scoped to one category
/// assert!(catalog.find(Category::Method, "man-001").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: BTreeMap<Category, Vec<Cause>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog from causes, grouping by each cause's category
    ///
    /// # Errors
    /// Returns error if an ID appears more than once
    pub fn from_causes<I>(causes: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = Cause>,
    {
        let mut builder = Self::builder();
        for cause in causes {
            builder.push(cause)?;
        }
        Ok(builder.build())
    }

    /// Causes of one category, in catalog order
    pub fn category(&self, category: Category) -> Option<&[Cause]> {
        self.categories.get(&category).map(Vec::as_slice)
    }

    /// Whether the catalog provides this category
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }

    /// Find a cause by ID within a single category
    pub fn find(&self, category: Category, id: &str) -> Option<&Cause> {
        self.category(category)?.iter().find(|c| c.id == id)
    }

    /// Find a cause by ID across all categories
    pub fn find_any(&self, id: &str) -> Option<&Cause> {
        self.categories.values().flatten().find(|c| c.id == id)
    }

    /// Provided categories with their causes, in diagram order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Cause])> {
        self.categories.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Total number of causes
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Whether the catalog has no causes at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Incremental builder enforcing catalog-wide ID uniqueness
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: BTreeMap<Category, Vec<Cause>>,
    ids: HashSet<String>,
}

impl CatalogBuilder {
    /// Declare a category, even if it ends up with no causes
    pub fn category(&mut self, category: Category) -> &mut Self {
        self.categories.entry(category).or_default();
        self
    }

    /// Add a cause to its category
    ///
    /// # Errors
    /// Returns error if the ID is empty or already used in any category
    pub fn push(&mut self, cause: Cause) -> Result<&mut Self, String> {
        if cause.id.is_empty() {
            return Err("Cause ID cannot be empty".to_string());
        }
        if !self.ids.insert(cause.id.clone()) {
            return Err(format!("Duplicate cause ID: {}", cause.id));
        }
        self.categories.entry(cause.category).or_default().push(cause);
        Ok(self)
    }

    /// Finish building
    pub fn build(self) -> Catalog {
        Catalog {
            categories: self.categories,
        }
    }
}

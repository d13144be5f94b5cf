//! Cause module - a catalogued potential root cause

use crate::{Category, Priority};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a cause has no description
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// A single catalogued potential root cause
///
/// Causes are owned by the [`Catalog`](crate::Catalog) and never mutated after
/// it is built. Optional fields keep the raw catalog value; defaulting happens
/// through the accessor methods so every consumer applies the same rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cause {
    /// Unique identifier, `<category-prefix>-<sequence>` (e.g. `man-001`)
    pub id: String,

    /// Short human-readable title
    pub cause: String,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Raw priority label as supplied by the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Ordered remedy strings
    #[serde(default)]
    pub solutions: Vec<String>,

    /// Narrative used for keyword mining
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_example: Option<String>,

    /// Owning category
    pub category: Category,

    /// Optional sub-grouping label within the category (e.g. "Faktor Kognitif")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Cause {
    /// Create a cause with only the required fields
    pub fn new(id: impl Into<String>, cause: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            cause: cause.into(),
            description: None,
            priority: None,
            solutions: Vec::new(),
            case_example: None,
            category,
            group: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the raw priority label
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Set the solutions
    pub fn with_solutions<I, S>(mut self, solutions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.solutions = solutions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the case example narrative
    pub fn with_case_example(mut self, case_example: impl Into<String>) -> Self {
        self.case_example = Some(case_example.into());
        self
    }

    /// Set the sub-grouping label
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Priority level, defaulting to `Medium`
    pub fn priority(&self) -> Priority {
        Priority::from_label(self.priority.as_deref())
    }

    /// Priority label for display, defaulting to `Medium`
    pub fn priority_label(&self) -> &str {
        match self.priority.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => Priority::Medium.as_str(),
        }
    }

    /// Description for display, or [`DEFAULT_DESCRIPTION`]
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => DEFAULT_DESCRIPTION,
        }
    }

    /// Trimmed, non-blank solutions in catalog order
    pub fn clean_solutions(&self) -> impl Iterator<Item = &str> {
        self.solutions
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Case example if present and non-blank
    pub fn case_text(&self) -> Option<&str> {
        self.case_example
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Check the `<prefix>-<sequence>` shape of a cause ID
pub fn is_valid_cause_id(id: &str) -> bool {
    match id.split_once('-') {
        Some((prefix, rest)) => !prefix.is_empty() && !rest.is_empty(),
        None => false,
    }
}

//! Priority module - severity levels attached to causes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority level of a cause
///
/// Ordered from most to least severe. A cause without a recognizable label is
/// treated as [`Priority::Medium`] (see [`Priority::from_label`]); aggregate
/// counting uses the more tolerant [`Priority::classify`], which falls back to
/// [`Priority::Low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Immediate danger of fatal or severe injury
    Critical,

    /// Major contributor to incidents
    High,

    /// Moderate contributor
    #[default]
    Medium,

    /// Minor contributor
    Low,
}

impl Priority {
    /// All levels, most severe first
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Get the priority name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse an exact priority name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Some(Priority::Critical),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Resolve a cause's raw label, defaulting to `Medium` when absent or unrecognized
    pub fn from_label(label: Option<&str>) -> Self {
        label.and_then(Self::parse).unwrap_or_default()
    }

    /// Classify a raw label by substring, for aggregate counting
    ///
    /// Checks `critical`, `high`, `medium` in that order against the
    /// lower-cased label; anything else, including a missing label, is `Low`.
    /// A label such as `"Very High / Critical"` therefore counts as `Critical`.
    pub fn classify(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Priority::Low;
        };
        let label = label.to_lowercase();
        if label.contains("critical") {
            Priority::Critical
        } else if label.contains("high") {
            Priority::High
        } else if label.contains("medium") {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Hex color for badges and chart series
    pub fn hex_color(&self) -> &'static str {
        match self {
            Priority::Critical => "#dc3545",
            Priority::High => "#fd7e14",
            Priority::Medium => "#ffc107",
            Priority::Low => "#28a745",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid priority: {}", s))
    }
}

/// Per-level cause counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriorityCounts {
    /// Critical causes
    #[serde(rename = "Critical")]
    pub critical: usize,

    /// High causes
    #[serde(rename = "High")]
    pub high: usize,

    /// Medium causes
    #[serde(rename = "Medium")]
    pub medium: usize,

    /// Low causes
    #[serde(rename = "Low")]
    pub low: usize,
}

impl PriorityCounts {
    /// Create zeroed counts
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one cause at the given level
    pub fn record(&mut self, priority: Priority) {
        match priority {
            Priority::Critical => self.critical += 1,
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }

    /// Count for a single level
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Critical => self.critical,
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    /// Sum across all levels
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_defaults_to_medium() {
        assert_eq!(Priority::from_label(Some("HIGH")), Priority::High);
        assert_eq!(Priority::from_label(Some("urgent")), Priority::Medium);
        assert_eq!(Priority::from_label(None), Priority::Medium);
    }

    #[test]
    fn test_classify_substring_order() {
        assert_eq!(Priority::classify(Some("High-Critical")), Priority::Critical);
        assert_eq!(Priority::classify(Some("medium-high")), Priority::High);
        assert_eq!(Priority::classify(Some("Medium")), Priority::Medium);
        assert_eq!(Priority::classify(Some("minor")), Priority::Low);
        assert_eq!(Priority::classify(None), Priority::Low);
    }

    #[test]
    fn test_counts_record_and_total() {
        let mut counts = PriorityCounts::new();
        counts.record(Priority::Critical);
        counts.record(Priority::Critical);
        counts.record(Priority::Low);

        assert_eq!(counts.get(Priority::Critical), 2);
        assert_eq!(counts.get(Priority::High), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_counts_serialize_with_level_names() {
        let mut counts = PriorityCounts::new();
        counts.record(Priority::High);
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Critical": 0, "High": 1, "Medium": 0, "Low": 0})
        );
    }
}

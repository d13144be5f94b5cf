//! Configuration for the correlation engine
//!
//! Defines the default result sizes used when the caller does not pass its own.

use crate::patterns::{effective_threshold, MIN_PATTERN_COUNT};
use crate::solutions::{effective_limit, DEFAULT_TOP_SOLUTIONS};
use serde::{Deserialize, Serialize};

/// Configuration for the [`CorrelationEngine`](crate::CorrelationEngine)
///
/// Out-of-range values are never rejected; they are coerced at use time
/// (limit to at least 1, threshold to at least 2).
///
/// # Examples
///
/// ```
/// use fishbone_correlation::CorrelationConfig;
///
/// let config = CorrelationConfig::default();
/// assert_eq!(config.top_solutions_limit, 5);
/// assert_eq!(config.pattern_threshold, 2);
///
/// let config: CorrelationConfig = toml::from_str("top_solutions_limit = 0").unwrap();
/// assert_eq!(config.effective_limit(), 1);
/// assert_eq!(config.pattern_threshold, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Number of top solutions to report
    /// Default: 5
    #[serde(default = "default_top_solutions_limit")]
    pub top_solutions_limit: i64,

    /// Minimum occurrences for a case-example keyword to be reported
    /// Default: 2 (also the floor)
    #[serde(default = "default_pattern_threshold")]
    pub pattern_threshold: i64,
}

fn default_top_solutions_limit() -> i64 {
    DEFAULT_TOP_SOLUTIONS
}

fn default_pattern_threshold() -> i64 {
    MIN_PATTERN_COUNT
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            top_solutions_limit: DEFAULT_TOP_SOLUTIONS,
            pattern_threshold: MIN_PATTERN_COUNT,
        }
    }
}

impl CorrelationConfig {
    /// Limit actually applied to the top-solutions ranking
    pub fn effective_limit(&self) -> usize {
        effective_limit(self.top_solutions_limit)
    }

    /// Threshold actually applied to case patterns
    pub fn effective_threshold(&self) -> usize {
        effective_threshold(self.pattern_threshold)
    }

    /// Describe values that will be coerced, if any
    pub fn coercions(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.top_solutions_limit < 1 {
            notes.push(format!(
                "top_solutions_limit {} is below 1, using 1",
                self.top_solutions_limit
            ));
        }
        if self.pattern_threshold < MIN_PATTERN_COUNT {
            notes.push(format!(
                "pattern_threshold {} is below {}, using {}",
                self.pattern_threshold, MIN_PATTERN_COUNT, MIN_PATTERN_COUNT
            ));
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CorrelationConfig::default();
        assert_eq!(config.effective_limit(), 5);
        assert_eq!(config.effective_threshold(), 2);
        assert!(config.coercions().is_empty());
    }

    #[test]
    fn test_coercions_reported() {
        let config = CorrelationConfig {
            top_solutions_limit: -5,
            pattern_threshold: 0,
        };
        assert_eq!(config.effective_limit(), 1);
        assert_eq!(config.effective_threshold(), 2);
        assert_eq!(config.coercions().len(), 2);
    }

    #[test]
    fn test_toml_section() {
        let config: CorrelationConfig =
            toml::from_str("top_solutions_limit = 10\npattern_threshold = 3").unwrap();
        assert_eq!(config.top_solutions_limit, 10);
        assert_eq!(config.effective_threshold(), 3);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: CorrelationConfig = toml::from_str("").unwrap();
        assert_eq!(config, CorrelationConfig::default());
    }
}

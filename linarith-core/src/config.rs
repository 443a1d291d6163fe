//! Oracle configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the Fourier-Motzkin oracle.
///
/// Fourier-Motzkin elimination can grow the working set doubly exponentially;
/// the minimality filter keeps this in check on most inputs but offers no
/// bound. The budgets below turn a runaway elimination into a
/// [`LinarithError::ResourceExhausted`](crate::LinarithError::ResourceExhausted)
/// instead of an unbounded computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Maximum number of comparisons in the working set (`None` = unlimited).
    pub max_working_set: Option<usize>,
    /// Maximum number of opposite-sign pairs combined over the whole run
    /// (`None` = unlimited).
    pub max_pairs: Option<u64>,
    /// Discard derived comparisons that are provably non-minimal.
    pub prune_non_minimal: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            max_working_set: Some(10_000),
            max_pairs: None,
            prune_non_minimal: true,
        }
    }
}

impl OracleConfig {
    /// Configuration with every budget lifted.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_working_set: None,
            max_pairs: None,
            ..Self::default()
        }
    }

    /// Set the working-set budget.
    #[must_use]
    pub fn with_max_working_set(mut self, limit: usize) -> Self {
        self.max_working_set = Some(limit);
        self
    }

    /// Set the pair budget.
    #[must_use]
    pub fn with_max_pairs(mut self, limit: u64) -> Self {
        self.max_pairs = Some(limit);
        self
    }

    /// Enable or disable the minimality filter.
    #[must_use]
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.prune_non_minimal = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OracleConfig::default();
        assert_eq!(config.max_working_set, Some(10_000));
        assert_eq!(config.max_pairs, None);
        assert!(config.prune_non_minimal);
    }

    #[test]
    fn test_builders() {
        let config = OracleConfig::unlimited()
            .with_max_pairs(50)
            .with_pruning(false);
        assert_eq!(config.max_working_set, None);
        assert_eq!(config.max_pairs, Some(50));
        assert!(!config.prune_non_minimal);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: OracleConfig =
            serde_json::from_str(r#"{ "max_pairs": 12 }"#).expect("valid config");
        assert_eq!(config.max_pairs, Some(12));
        assert_eq!(config.max_working_set, Some(10_000));
        assert!(config.prune_non_minimal);
    }
}

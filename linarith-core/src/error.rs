//! Error types for the linarith oracle.
//!
//! Only genuine failures live here. A pair of comparisons that cannot cancel
//! a variable, a derived contradiction, and an inconclusive elimination run
//! are all ordinary outcomes and are reported as values, not errors.

use crate::VarId;
use thiserror::Error;

/// Which budget of the elimination driver ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Number of comparisons held in the working set.
    WorkingSet,
    /// Number of opposite-sign pairs combined.
    Pairs,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::WorkingSet => write!(f, "working set size"),
            Resource::Pairs => write!(f, "pair combinations"),
        }
    }
}

/// Error type for linarith operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinarithError {
    /// A hypothesis mentions a variable above the declared maximum
    #[error("Invalid input: hypothesis {hypothesis} mentions variable {var} above max variable {max_var}")]
    InvalidInput {
        /// Index of the offending hypothesis
        hypothesis: usize,
        /// Variable index found in the hypothesis
        var: VarId,
        /// Declared maximum variable index
        max_var: VarId,
    },

    /// A configured budget was exceeded before the run finished
    #[error("Resource exhausted: {resource} exceeded limit {limit}")]
    ResourceExhausted {
        /// The budget that tripped
        resource: Resource,
        /// Its configured limit
        limit: u64,
    },

    /// A certificate cannot be replayed against the hypotheses
    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),
}

/// Result type for linarith operations
pub type Result<T> = std::result::Result<T, LinarithError>;

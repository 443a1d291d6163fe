//! Property-based tests for linarith-oracle
//!
//! This module contains property tests for:
//! - Pairwise cancellation multipliers
//! - Certificate soundness by replay
//! - Termination of the elimination driver
//! - Agreement of pruned and unpruned runs

mod oracle_properties;

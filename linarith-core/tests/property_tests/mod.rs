//! Property-based tests for linarith-core
//!
//! This module contains property tests for:
//! - Linear expression sums and the sparsity invariant
//! - Comparison scaling laws
//! - The comparator join table

mod comp_properties;

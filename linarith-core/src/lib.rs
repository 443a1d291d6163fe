//! linarith core - linear comparisons for the Fourier-Motzkin oracle
//!
//! This crate provides the leaf data model shared by the oracle and its
//! front end:
//! - [`Ineq`]: the comparator kinds `=`, `≤`, `<` and their join
//! - [`Linexp`]: sparse integer linear expressions keyed by variable index
//! - [`Comp`]: a comparison `Σ cᵢ·xᵢ R 0`
//! - [`OracleConfig`]: resource budgets and pruning switches
//! - [`LinarithError`]: the error type of the workspace
//!
//! # Examples
//!
//! ```
//! use linarith_core::{Comp, Ineq};
//!
//! // x > 0 is represented as -x < 0, and -x > 0 as x < 0
//! let pos = Comp::from_terms(Ineq::Lt, [(0, -1)]);
//! let neg = Comp::from_terms(Ineq::Lt, [(0, 1)]);
//!
//! assert!(pos.add(&neg).is_contr());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod comp;
pub mod config;
pub mod error;
pub mod ineq;
pub mod linexp;

pub use comp::Comp;
pub use config::OracleConfig;
pub use error::{LinarithError, Resource, Result};
pub use ineq::Ineq;
pub use linexp::Linexp;

/// Variable index.
pub type VarId = usize;

/// Hypothesis index: position of a comparison in the oracle input.
pub type HypId = usize;

//! linarith oracle - Fourier-Motzkin refutation with certificates
//!
//! Given comparisons `Σ cᵢ·xᵢ R 0` with `R` one of `=`, `≤`, `<`, the oracle
//! searches for non-negative multiplicities whose weighted sum is `0 < 0`.
//!
//! - [`source`]: provenance trees of derived comparisons
//! - [`pcomp`]: comparisons with provenance and variable bookkeeping
//! - [`elimination`]: one Fourier-Motzkin step and Imbert's minimality filter
//! - [`fourier_motzkin`]: the descending-order driver
//! - [`certificate`]: certificates, replay and verification
//! - [`oracle`]: the [`CertificateOracle`] seam
//! - [`problem`]: affine hypotheses, goal negation and linear combinations
//!
//! # Examples
//!
//! ```
//! use linarith_core::{Comp, Ineq};
//! use linarith_oracle::FourierMotzkin;
//!
//! // x0 < 0, x1 < 0, x0 + x1 > 0
//! let hyps = vec![
//!     Comp::from_terms(Ineq::Lt, [(0, 1)]),
//!     Comp::from_terms(Ineq::Lt, [(1, 1)]),
//!     Comp::from_terms(Ineq::Lt, [(0, -1), (1, -1)]),
//! ];
//!
//! let mut oracle = FourierMotzkin::new();
//! let result = oracle.run(&hyps, 1).unwrap();
//! let certificate = result.certificate().unwrap();
//!
//! assert!(certificate.verify(&hyps));
//! assert_eq!(certificate.len(), 3);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod certificate;
pub mod elimination;
pub mod fourier_motzkin;
pub mod oracle;
pub mod pcomp;
pub mod problem;
pub mod source;

pub use certificate::Certificate;
pub use elimination::{Eliminator, StepStats, elim_var};
pub use fourier_motzkin::{
    EliminationResult, FourierMotzkin, FourierMotzkinStats, LinarithData, Refutation,
};
pub use oracle::CertificateOracle;
pub use pcomp::{PComp, PCompSet};
pub use problem::{
    GoalProof, Hypothesis, LinarithProblem, LinearCombination, LinearExpr, ProofCase, Relation,
};
pub use source::CompSource;

//! Refutation certificates.
//!
//! A certificate assigns a positive multiplicity to some of the input
//! hypotheses. Summing that many copies of each yields the comparison
//! `0 < 0`, which is the whole proof of unsatisfiability. Building a proof
//! term from it is left to the caller; [`Certificate::verify`] only replays
//! the combination syntactically.

use crate::pcomp::PComp;
use linarith_core::{Comp, HypId, Ineq, LinarithError, Linexp, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiplicity of each input hypothesis in a refuting combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    multipliers: BTreeMap<HypId, BigUint>,
}

impl Certificate {
    /// Extract the certificate of a contradictory comparison.
    pub fn from_witness(witness: &PComp) -> Self {
        Self::from_multipliers(witness.src.flatten())
    }

    /// Build a certificate from explicit multiplicities; zero entries are
    /// dropped.
    pub fn from_multipliers(multipliers: BTreeMap<HypId, BigUint>) -> Self {
        Self {
            multipliers: multipliers
                .into_iter()
                .filter(|(_, k)| !k.is_zero())
                .collect(),
        }
    }

    /// Multiplicity of hypothesis `hyp`, if it is used.
    pub fn multiplier(&self, hyp: HypId) -> Option<&BigUint> {
        self.multipliers.get(&hyp)
    }

    /// All multiplicities, ascending by hypothesis.
    pub fn multipliers(&self) -> &BTreeMap<HypId, BigUint> {
        &self.multipliers
    }

    /// Hypotheses used by the certificate.
    pub fn hypotheses(&self) -> impl Iterator<Item = HypId> + '_ {
        self.multipliers.keys().copied()
    }

    /// Number of hypotheses used.
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Whether no hypothesis is used.
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// Sum `multiplier · hyps[i]` over the certificate.
    ///
    /// The empty certificate replays to `0 = 0`.
    pub fn replay(&self, hyps: &[Comp]) -> Result<Comp> {
        let mut acc = Comp::new(Ineq::Eq, Linexp::new());
        for (&hyp, k) in &self.multipliers {
            if k.is_zero() {
                return Err(LinarithError::InvalidCertificate(format!(
                    "hypothesis {} has multiplicity zero",
                    hyp
                )));
            }
            let comp = hyps.get(hyp).ok_or_else(|| {
                LinarithError::InvalidCertificate(format!(
                    "hypothesis {} out of range ({} hypotheses)",
                    hyp,
                    hyps.len()
                ))
            })?;
            acc = acc.add(&comp.scale(k));
        }
        Ok(acc)
    }

    /// Whether the certificate replays to `0 < 0` over `hyps`.
    pub fn verify(&self, hyps: &[Comp]) -> bool {
        self.replay(hyps).is_ok_and(|c| c.is_contr())
    }
}

//! Provenance of derived comparisons.

use linarith_core::HypId;
use num_bigint::BigUint;
use num_traits::One;
use std::collections::BTreeMap;
use std::fmt;

/// How a comparison was obtained from the input hypotheses.
///
/// The tree is built bottom-up by wrapping and is never edited, so it is
/// acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompSource {
    /// The input hypothesis with this index.
    Assump(HypId),
    /// Sum of two derivations.
    Add(Box<CompSource>, Box<CompSource>),
    /// A derivation multiplied by a positive natural.
    Scale(BigUint, Box<CompSource>),
}

impl CompSource {
    /// Sum of `self` and `other`.
    #[must_use]
    pub fn add(self, other: CompSource) -> CompSource {
        CompSource::Add(Box::new(self), Box::new(other))
    }

    /// `self` multiplied by `n`.
    #[must_use]
    pub fn scale(self, n: BigUint) -> CompSource {
        CompSource::Scale(n, Box::new(self))
    }

    /// Multiplicity of every input hypothesis in the linear combination this
    /// tree denotes.
    pub fn flatten(&self) -> BTreeMap<HypId, BigUint> {
        match self {
            CompSource::Assump(n) => BTreeMap::from([(*n, BigUint::one())]),
            CompSource::Add(left, right) => {
                let mut counts = left.flatten();
                for (hyp, k) in right.flatten() {
                    *counts.entry(hyp).or_default() += k;
                }
                counts
            }
            CompSource::Scale(factor, child) => {
                let mut counts = child.flatten();
                for k in counts.values_mut() {
                    *k *= factor;
                }
                counts
            }
        }
    }
}

impl fmt::Display for CompSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompSource::Assump(n) => write!(f, "#{}", n),
            CompSource::Add(left, right) => write!(f, "({} + {})", left, right),
            CompSource::Scale(factor, child) => write!(f, "({} * {})", factor, child),
        }
    }
}

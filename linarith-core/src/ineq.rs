//! Comparator kinds.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The relation of a comparison `t R 0`.
///
/// Variants are ordered by strength: `Eq < Le < Lt`. Adding two comparisons
/// yields the maximum of their relations, so a strict inequality absorbs
/// non-strict ones and two equalities stay an equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ineq {
    /// `t = 0`
    Eq,
    /// `t ≤ 0`
    Le,
    /// `t < 0`
    Lt,
}

impl Ineq {
    /// Relation of the sum of a `self` fact and an `other` fact.
    #[must_use]
    pub fn max(self, other: Ineq) -> Ineq {
        std::cmp::max(self, other)
    }

    /// Whether the relation is strict.
    pub fn is_strict(self) -> bool {
        self == Ineq::Lt
    }

    /// Whether `k R 0` is false for the constant `k`.
    pub fn is_violated_by(self, k: &BigInt) -> bool {
        match self {
            Ineq::Eq => !k.is_zero(),
            Ineq::Le => k.is_positive(),
            Ineq::Lt => !k.is_negative(),
        }
    }
}

impl fmt::Display for Ineq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ineq::Eq => write!(f, "="),
            Ineq::Le => write!(f, "≤"),
            Ineq::Lt => write!(f, "<"),
        }
    }
}

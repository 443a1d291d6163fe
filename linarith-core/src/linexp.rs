//! Sparse linear expressions over integer coefficients.

use crate::VarId;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A linear expression `Σ cᵢ·xᵢ` without constant term.
///
/// Coefficients are kept in a map ordered by variable index. A zero
/// coefficient is never stored, so two expressions are equal exactly when
/// their maps are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<VarId, BigInt>",
    into = "BTreeMap<VarId, BigInt>"
)]
pub struct Linexp {
    coeffs: BTreeMap<VarId, BigInt>,
}

impl Linexp {
    /// The empty expression `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an expression from `(variable, coefficient)` pairs.
    ///
    /// Repeated variables are summed; zero results are dropped.
    pub fn from_terms<I, C>(terms: I) -> Self
    where
        I: IntoIterator<Item = (VarId, C)>,
        C: Into<BigInt>,
    {
        let mut result = Self::new();
        for (var, coeff) in terms {
            result.add_term(var, coeff.into());
        }
        result
    }

    fn add_term(&mut self, var: VarId, coeff: BigInt) {
        if coeff.is_zero() {
            return;
        }
        let entry = self.coeffs.entry(var).or_insert_with(BigInt::zero);
        *entry += coeff;
        if entry.is_zero() {
            self.coeffs.remove(&var);
        }
    }

    /// Pointwise sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (&var, coeff) in &other.coeffs {
            result.add_term(var, coeff.clone());
        }
        result
    }

    /// Multiply every coefficient by `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn scale(&self, n: &BigUint) -> Self {
        assert!(!n.is_zero(), "linear expressions are never scaled by zero");
        let factor = BigInt::from(n.clone());
        Self {
            coeffs: self
                .coeffs
                .iter()
                .map(|(&var, coeff)| (var, coeff * &factor))
                .collect(),
        }
    }

    /// Negate every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self
                .coeffs
                .iter()
                .map(|(&var, coeff)| (var, -coeff))
                .collect(),
        }
    }

    /// Coefficient of `var`, zero when absent.
    pub fn get(&self, var: VarId) -> BigInt {
        self.coeffs.get(&var).cloned().unwrap_or_else(BigInt::zero)
    }

    /// Whether `var` has a nonzero coefficient.
    pub fn contains(&self, var: VarId) -> bool {
        self.coeffs.contains_key(&var)
    }

    /// Variables with a nonzero coefficient, ascending.
    pub fn vars(&self) -> impl Iterator<Item = VarId> + '_ {
        self.coeffs.keys().copied()
    }

    /// Largest variable index, if any.
    pub fn max_var(&self) -> Option<VarId> {
        self.coeffs.keys().next_back().copied()
    }

    /// `(variable, coefficient)` pairs, ascending by variable.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, &BigInt)> + '_ {
        self.coeffs.iter().map(|(&var, coeff)| (var, coeff))
    }

    /// Whether every coefficient cancelled.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Number of stored (nonzero) coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }
}

impl From<BTreeMap<VarId, BigInt>> for Linexp {
    fn from(coeffs: BTreeMap<VarId, BigInt>) -> Self {
        Self::from_terms(coeffs)
    }
}

impl From<Linexp> for BTreeMap<VarId, BigInt> {
    fn from(e: Linexp) -> Self {
        e.coeffs
    }
}

impl fmt::Display for Linexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }
        for (i, (var, coeff)) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}*x{}", coeff, var)?;
        }
        Ok(())
    }
}

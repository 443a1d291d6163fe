//! Linear comparisons `Σ cᵢ·xᵢ R 0`.

use crate::{Ineq, Linexp, VarId};
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A comparison between a linear expression and zero.
///
/// Comparisons are immutable values. The derived ordering compares the
/// relation first and the coefficients second; it is the identity the
/// elimination working set deduplicates on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Comp {
    /// The relation `R`.
    pub ineq: Ineq,
    /// The left-hand side.
    pub coeffs: Linexp,
}

impl Comp {
    /// Create a comparison.
    pub fn new(ineq: Ineq, coeffs: Linexp) -> Self {
        Self { ineq, coeffs }
    }

    /// Shorthand for [`Comp::new`] over `(variable, coefficient)` pairs.
    pub fn from_terms<I, C>(ineq: Ineq, terms: I) -> Self
    where
        I: IntoIterator<Item = (VarId, C)>,
        C: Into<BigInt>,
    {
        Self::new(ineq, Linexp::from_terms(terms))
    }

    /// Sum of two comparisons: coefficients add, the relation is the
    /// stronger of the two.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            ineq: self.ineq.max(other.ineq),
            coeffs: self.coeffs.add(&other.coeffs),
        }
    }

    /// Multiply by a positive natural. The relation is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn scale(&self, n: &BigUint) -> Self {
        Self {
            ineq: self.ineq,
            coeffs: self.coeffs.scale(n),
        }
    }

    /// Coefficient of `var`, zero when absent.
    pub fn coeff_of(&self, var: VarId) -> BigInt {
        self.coeffs.get(var)
    }

    /// Variables with a nonzero coefficient, ascending.
    pub fn vars(&self) -> impl Iterator<Item = VarId> + '_ {
        self.coeffs.vars()
    }

    /// Largest variable index mentioned, if any.
    pub fn max_var(&self) -> Option<VarId> {
        self.coeffs.max_var()
    }

    /// Whether this is literally `0 < 0`.
    ///
    /// A fully cancelled `≤` or `=` comparison is trivially true and is not
    /// a contradiction.
    pub fn is_contr(&self) -> bool {
        self.coeffs.is_empty() && self.ineq.is_strict()
    }
}

impl fmt::Display for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} 0", self.coeffs, self.ineq)
    }
}

//! Single-variable Fourier-Motzkin elimination over annotated comparisons.
//!
//! ## Algorithm
//!
//! To eliminate `a` from a working set:
//! 1. Partition comparisons by the sign of their `a` coefficient
//! 2. For each (positive, negative) pair, scale both by the least multipliers
//!    that cancel `a` and add them
//! 3. Keep combinations that pass the minimality filter, plus every
//!    comparison that never mentioned `a`
//!
//! Only opposite-sign pairs are combined. The multipliers stay positive, so
//! every derived comparison is a non-negative combination of the inputs.
//!
//! ## References
//!
//! - Imbert: "Fourier's elimination: Which to choose?" (1993)

use crate::pcomp::{PComp, PCompSet};
use linarith_core::{Comp, LinarithError, OracleConfig, Resource, Result, VarId};
use num_bigint::{BigUint, Sign};
use num_integer::Integer;
use tracing::trace;

/// Least positive multipliers `(n1, n2)` with `n1·v1 + n2·v2 = 0`, where
/// `vi` is the coefficient of `a` in `ci`.
///
/// Returns `None` unless the coefficients have opposite signs: no positive
/// combination cancels same-sign or absent coefficients.
pub fn elim_var(c1: &Comp, c2: &Comp, a: VarId) -> Option<(BigUint, BigUint)> {
    let v1 = c1.coeff_of(a);
    let v2 = c2.coeff_of(a);
    if (&v1 * &v2).sign() != Sign::Minus {
        return None;
    }
    let v1 = v1.magnitude();
    let v2 = v2.magnitude();
    let lcm = v1.lcm(v2);
    Some((&lcm / v1, &lcm / v2))
}

/// Combine `p1` and `p2` to eliminate `a`, if their coefficients allow it.
pub fn pelim_var(p1: &PComp, p2: &PComp, a: VarId) -> Option<PComp> {
    let (n1, n2) = elim_var(&p1.c, &p2.c, a)?;
    Some(p1.scale(&n1).add(&p2.scale(&n2), a))
}

/// Split a working set by the sign of the coefficient of `a` into
/// `(positive, negative, absent)`.
pub fn split_by_var_sign(a: VarId, comps: &PCompSet) -> (PCompSet, PCompSet, PCompSet) {
    let mut pos = PCompSet::new();
    let mut neg = PCompSet::new();
    let mut not_present = PCompSet::new();

    for pc in comps {
        match pc.c.coeff_of(a).sign() {
            Sign::Plus => pos.insert(pc.clone()),
            Sign::Minus => neg.insert(pc.clone()),
            Sign::NoSign => not_present.insert(pc.clone()),
        };
    }

    (pos, neg, not_present)
}

/// Counters for a single elimination step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Comparisons with a positive coefficient.
    pub positive: usize,
    /// Comparisons with a negative coefficient.
    pub negative: usize,
    /// Comparisons not mentioning the variable.
    pub untouched: usize,
    /// Opposite-sign pairs combined.
    pub pairs_tried: u64,
    /// Combinations kept.
    pub generated: u64,
    /// Combinations dropped by the minimality filter.
    pub pruned: u64,
    /// Combinations dropped as duplicates of an existing comparison.
    pub duplicates: u64,
}

/// Budget-aware elimination of one variable.
///
/// The pair budget covers every step run through the same eliminator.
#[derive(Debug)]
pub struct Eliminator<'a> {
    config: &'a OracleConfig,
    prune: bool,
    pairs_spent: u64,
}

impl<'a> Eliminator<'a> {
    /// Create an eliminator that prunes as `config` says.
    pub fn new(config: &'a OracleConfig) -> Self {
        Self {
            config,
            prune: config.prune_non_minimal,
            pairs_spent: 0,
        }
    }

    /// Keep every combination, whatever the configuration says.
    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.prune = false;
        self
    }

    /// Eliminate `a` from `comps`, returning the new working set.
    ///
    /// Fails with [`LinarithError::ResourceExhausted`] as soon as the pair
    /// budget or the working-set budget is exceeded.
    pub fn eliminate(&mut self, a: VarId, comps: &PCompSet) -> Result<(PCompSet, StepStats)> {
        let (pos, neg, not_present) = split_by_var_sign(a, comps);
        let mut stats = StepStats {
            positive: pos.len(),
            negative: neg.len(),
            untouched: not_present.len(),
            ..StepStats::default()
        };

        let mut result = not_present;
        self.check_working_set(result.len())?;

        for p in &pos {
            for q in &neg {
                self.pairs_spent += 1;
                stats.pairs_tried += 1;
                if let Some(limit) = self.config.max_pairs {
                    if self.pairs_spent > limit {
                        return Err(LinarithError::ResourceExhausted {
                            resource: Resource::Pairs,
                            limit,
                        });
                    }
                }

                // Opposite signs are guaranteed by the split.
                let Some(combined) = pelim_var(p, q, a) else {
                    continue;
                };

                if self.prune && !combined.maybe_minimal(a) {
                    trace!(var = a, comp = %combined.c, src = %combined.src, "pruned non-minimal");
                    stats.pruned += 1;
                    continue;
                }

                let known = result.get(&combined).map(|existing| existing.history.len());
                match known {
                    None => {
                        result.insert(combined);
                        stats.generated += 1;
                        self.check_working_set(result.len())?;
                    }
                    Some(len) => {
                        // keep the derivation with the shorter history
                        if combined.history.len() < len {
                            result.replace(combined);
                        }
                        stats.duplicates += 1;
                    }
                }
            }
        }

        Ok((result, stats))
    }

    /// Fail if a working set of `size` comparisons exceeds the budget.
    pub fn check_working_set(&self, size: usize) -> Result<()> {
        match self.config.max_working_set {
            Some(limit) if size > limit => Err(LinarithError::ResourceExhausted {
                resource: Resource::WorkingSet,
                limit: limit as u64,
            }),
            _ => Ok(()),
        }
    }
}

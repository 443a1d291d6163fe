//! Comparisons annotated with provenance and elimination bookkeeping.

use crate::source::CompSource;
use linarith_core::{Comp, HypId, VarId};
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A comparison together with how it was derived.
///
/// Besides the provenance tree, four index sets drive the minimality filter:
///
/// - `history`: input hypotheses used, transitively
/// - `effective`: variables eliminated on purpose to reach this comparison
/// - `implicit`: variables that vanished from this comparison or one of its
///   ancestors without ever being the variable eliminated
/// - `vars`: support of `c`, cached
///
/// Equality and ordering look at `c` only. Two derivations of the same
/// comparison are interchangeable, and a [`PCompSet`] keeps one of them.
#[derive(Debug, Clone)]
pub struct PComp {
    /// The comparison.
    pub c: Comp,
    /// Derivation from the input hypotheses.
    pub src: CompSource,
    /// Input hypotheses this comparison depends on.
    pub history: BTreeSet<HypId>,
    /// Variables effectively eliminated.
    pub effective: BTreeSet<VarId>,
    /// Variables implicitly eliminated.
    pub implicit: BTreeSet<VarId>,
    /// Variables with a nonzero coefficient in `c`.
    pub vars: BTreeSet<VarId>,
}

/// Working set of annotated comparisons, deduplicated by comparison.
pub type PCompSet = BTreeSet<PComp>;

impl PComp {
    /// Wrap input hypothesis number `n`.
    pub fn assump(c: Comp, n: HypId) -> Self {
        let vars = c.vars().collect();
        Self {
            c,
            src: CompSource::Assump(n),
            history: BTreeSet::from([n]),
            effective: BTreeSet::new(),
            implicit: BTreeSet::new(),
            vars,
        }
    }

    /// Multiply comparison and provenance by `n`; the index sets are
    /// unchanged.
    #[must_use]
    pub fn scale(&self, n: &BigUint) -> Self {
        Self {
            c: self.c.scale(n),
            src: self.src.clone().scale(n.clone()),
            ..self.clone()
        }
    }

    /// Sum `self` and `other`, recording that the sum eliminates `elim_var`.
    ///
    /// The caller scales both sides beforehand so that the coefficients of
    /// `elim_var` cancel.
    #[must_use]
    pub fn add(&self, other: &PComp, elim_var: VarId) -> Self {
        let c = self.c.add(&other.c);
        let src = self.src.clone().add(other.src.clone());
        let history = self.history.union(&other.history).copied().collect();
        let vars: BTreeSet<VarId> = c.vars().collect();

        let mut effective: BTreeSet<VarId> =
            self.effective.union(&other.effective).copied().collect();
        effective.insert(elim_var);

        // accidental cancellations of the ancestors stay implicit
        let implicit = self
            .vars
            .union(&other.vars)
            .filter(|&&v| !vars.contains(&v))
            .chain(self.implicit.iter())
            .chain(other.implicit.iter())
            .filter(|&&v| !effective.contains(&v))
            .copied()
            .collect();

        Self {
            c,
            src,
            history,
            effective,
            implicit,
            vars,
        }
    }

    /// Whether this comparison may be minimal once every variable with index
    /// `>= elimed_ge` has been eliminated.
    ///
    /// A `false` answer is definitive: the comparison follows from a strict
    /// subset of its history and can be dropped. A `true` answer may be a
    /// false positive.
    pub fn maybe_minimal(&self, elimed_ge: VarId) -> bool {
        let eliminated = self
            .implicit
            .iter()
            .filter(|&&v| v >= elimed_ge)
            .chain(self.effective.iter())
            .collect::<BTreeSet<_>>()
            .len();
        self.history.len() <= 1 + eliminated
    }

    /// Whether the comparison is literally `0 < 0`.
    pub fn is_contr(&self) -> bool {
        self.c.is_contr()
    }
}

impl PartialEq for PComp {
    fn eq(&self, other: &Self) -> bool {
        self.c == other.c
    }
}

impl Eq for PComp {}

impl PartialOrd for PComp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PComp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.c.cmp(&other.c)
    }
}

//! Fourier-Motzkin Refutation Oracle.
//!
//! Decides whether a conjunction of comparisons `Σ cᵢ·xᵢ R 0` can be refuted
//! by eliminating variables one at a time, highest index first.
//!
//! ## Algorithm
//!
//! 1. Seed the working set with every hypothesis, tagged by its position
//! 2. Check the working set for `0 < 0`
//! 3. For each variable from the highest index down to 0: eliminate it,
//!    lower the variable bound, check again
//! 4. Stop at the first contradiction and return its provenance as a
//!    certificate; otherwise report that no certificate was found
//!
//! An exhausted run does not prove the hypotheses satisfiable. It only
//! means this elimination order derived no contradiction. When the
//! minimality filter is on, an exhausted run is repeated without it before
//! reporting exhaustion, so pruning never costs a refutation.
//!
//! The descending order matters: the minimality filter assumes that the
//! variables at or above the one being eliminated are exactly the ones
//! already gone.
//!
//! ## Complexity
//!
//! - Each round combines every positive occurrence with every negative one
//! - Worst case doubly exponential growth; the minimality filter and the
//!   configured budgets keep it in check

use crate::certificate::Certificate;
use crate::elimination::{Eliminator, StepStats};
use crate::oracle::CertificateOracle;
use crate::pcomp::{PComp, PCompSet};
use linarith_core::{Comp, LinarithError, OracleConfig, Result, VarId};
use std::ops::ControlFlow;
use tracing::{debug, info, warn};

/// Statistics for the Fourier-Motzkin oracle.
#[derive(Debug, Clone, Default)]
pub struct FourierMotzkinStats {
    /// Runs started.
    pub runs: u64,
    /// Runs that found a contradiction.
    pub refutations: u64,
    /// Elimination rounds performed.
    pub rounds: u64,
    /// Opposite-sign pairs combined.
    pub pairs_tried: u64,
    /// Derived comparisons kept.
    pub comps_generated: u64,
    /// Derived comparisons dropped by the minimality filter.
    pub comps_pruned: u64,
    /// Derived comparisons dropped as duplicates.
    pub duplicates: u64,
    /// Largest working set seen.
    pub max_working_set: usize,
    /// Exhausted pruned runs repeated without the minimality filter.
    pub unpruned_reruns: u64,
    /// Time (microseconds).
    pub time_us: u64,
}

impl FourierMotzkinStats {
    fn record_step(&mut self, step: &StepStats, size: usize) {
        self.rounds += 1;
        self.pairs_tried += step.pairs_tried;
        self.comps_generated += step.generated;
        self.comps_pruned += step.pruned;
        self.duplicates += step.duplicates;
        self.max_working_set = self.max_working_set.max(size);
    }
}

/// A contradiction together with the certificate extracted from it.
#[derive(Debug, Clone)]
pub struct Refutation {
    /// The derived comparison `0 < 0`.
    pub witness: PComp,
    /// Its flattened provenance.
    pub certificate: Certificate,
}

impl Refutation {
    fn new(witness: PComp) -> Self {
        let certificate = Certificate::from_witness(&witness);
        Self {
            witness,
            certificate,
        }
    }
}

/// Outcome of an elimination run.
#[derive(Debug, Clone)]
pub enum EliminationResult {
    /// A contradiction was derived.
    Contradiction(Refutation),
    /// Every variable was eliminated without deriving a contradiction.
    Exhausted,
}

impl EliminationResult {
    /// Whether a contradiction was found.
    pub fn is_contradiction(&self) -> bool {
        matches!(self, EliminationResult::Contradiction(_))
    }

    /// The certificate, if a contradiction was found.
    pub fn certificate(&self) -> Option<&Certificate> {
        match self {
            EliminationResult::Contradiction(refutation) => Some(&refutation.certificate),
            EliminationResult::Exhausted => None,
        }
    }

    /// Consume the result, keeping only the certificate.
    pub fn into_certificate(self) -> Option<Certificate> {
        match self {
            EliminationResult::Contradiction(refutation) => Some(refutation.certificate),
            EliminationResult::Exhausted => None,
        }
    }
}

/// Elimination state: the highest variable not yet eliminated and the
/// current working set.
#[derive(Debug, Clone)]
pub struct LinarithData {
    /// Highest remaining variable, `None` once variable 0 is gone.
    pub max_var: Option<VarId>,
    /// Current working set.
    pub comps: PCompSet,
}

impl LinarithData {
    /// Seed the state from the input hypotheses.
    pub fn new(hyps: &[Comp], max_var: Option<VarId>) -> Self {
        Self {
            max_var,
            comps: hyps
                .iter()
                .enumerate()
                .map(|(n, c)| PComp::assump(c.clone(), n))
                .collect(),
        }
    }

    /// Break with the first contradictory comparison of the working set.
    pub fn validate(&self) -> ControlFlow<PComp> {
        match self.comps.iter().find(|p| p.is_contr()) {
            Some(p) => ControlFlow::Break(p.clone()),
            None => ControlFlow::Continue(()),
        }
    }
}

/// Fourier-Motzkin refutation oracle.
#[derive(Debug)]
pub struct FourierMotzkin {
    config: OracleConfig,
    stats: FourierMotzkinStats,
}

impl FourierMotzkin {
    /// Create new oracle.
    pub fn new() -> Self {
        Self::with_config(OracleConfig::default())
    }

    /// Create with configuration.
    pub fn with_config(config: OracleConfig) -> Self {
        Self {
            config,
            stats: FourierMotzkinStats::default(),
        }
    }

    /// Get configuration.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Get statistics.
    pub fn stats(&self) -> &FourierMotzkinStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = FourierMotzkinStats::default();
    }

    /// Try to refute `hyps`, whose variables must all be at most `max_var`.
    ///
    /// Fails with [`LinarithError::InvalidInput`] before any elimination if
    /// a hypothesis mentions a larger variable, and with
    /// [`LinarithError::ResourceExhausted`] if a budget runs out.
    pub fn run(&mut self, hyps: &[Comp], max_var: VarId) -> Result<EliminationResult> {
        for (hypothesis, comp) in hyps.iter().enumerate() {
            if let Some(var) = comp.max_var().filter(|&v| v > max_var) {
                return Err(LinarithError::InvalidInput {
                    hypothesis,
                    var,
                    max_var,
                });
            }
        }
        self.eliminate_all(LinarithData::new(hyps, Some(max_var)))
    }

    /// Like [`FourierMotzkin::run`], with the variable bound computed from
    /// the hypotheses.
    pub fn run_auto(&mut self, hyps: &[Comp]) -> Result<EliminationResult> {
        let max_var = hyps.iter().filter_map(Comp::max_var).max();
        self.eliminate_all(LinarithData::new(hyps, max_var))
    }

    fn eliminate_all(&mut self, seed: LinarithData) -> Result<EliminationResult> {
        let start = std::time::Instant::now();
        self.stats.runs += 1;
        self.stats.max_working_set = self.stats.max_working_set.max(seed.comps.len());

        let mut state = seed.clone();
        let mut outcome = self.eliminate_from(&mut state, self.config.prune_non_minimal);

        // an exhausted pruned run is repeated with every combination kept
        if self.config.prune_non_minimal && matches!(outcome, Ok(ControlFlow::Continue(()))) {
            debug!(
                remaining = state.comps.len(),
                "pruned run exhausted, repeating without the minimality filter"
            );
            self.stats.unpruned_reruns += 1;
            state = seed;
            outcome = self.eliminate_from(&mut state, false);
        }
        self.stats.time_us += start.elapsed().as_micros() as u64;

        match outcome? {
            ControlFlow::Break(witness) => {
                self.stats.refutations += 1;
                info!(
                    src = %witness.src,
                    hypotheses = witness.history.len(),
                    "contradiction found"
                );
                Ok(EliminationResult::Contradiction(Refutation::new(witness)))
            }
            ControlFlow::Continue(()) => {
                info!(remaining = state.comps.len(), "elimination exhausted");
                Ok(EliminationResult::Exhausted)
            }
        }
    }

    fn eliminate_from(
        &mut self,
        state: &mut LinarithData,
        prune: bool,
    ) -> Result<ControlFlow<PComp>> {
        if let ControlFlow::Break(witness) = state.validate() {
            return Ok(ControlFlow::Break(witness));
        }

        let mut eliminator = Eliminator::new(&self.config);
        if !prune {
            eliminator = eliminator.without_pruning();
        }
        eliminator
            .check_working_set(state.comps.len())
            .inspect_err(|e| warn!(error = %e, "input exceeds the working-set budget"))?;
        while let Some(var) = state.max_var {
            let (comps, step) = eliminator
                .eliminate(var, &state.comps)
                .inspect_err(|e| warn!(var, error = %e, "elimination aborted"))?;

            debug!(
                var,
                positive = step.positive,
                negative = step.negative,
                untouched = step.untouched,
                generated = step.generated,
                pruned = step.pruned,
                size = comps.len(),
                "eliminated variable"
            );
            self.stats.record_step(&step, comps.len());

            state.max_var = var.checked_sub(1);
            state.comps = comps;
            if let ControlFlow::Break(witness) = state.validate() {
                return Ok(ControlFlow::Break(witness));
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}

impl Default for FourierMotzkin {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateOracle for FourierMotzkin {
    fn name(&self) -> &'static str {
        "fourier-motzkin"
    }

    fn produce_certificate(
        &mut self,
        hyps: &[Comp],
        max_var: VarId,
    ) -> Result<Option<Certificate>> {
        Ok(self.run(hyps, max_var)?.into_certificate())
    }
}

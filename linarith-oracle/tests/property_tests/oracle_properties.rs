//! Property-based tests for the Fourier-Motzkin oracle
//!
//! This module tests:
//! - `elim_var` returns the least positive cancelling multipliers
//! - Every certificate replays to `0 < 0`
//! - The driver performs at most `max_var + 1` rounds per pass
//! - The minimality filter only removes redundant work

use linarith_core::{Comp, Ineq, OracleConfig};
use linarith_oracle::{
    EliminationResult, FourierMotzkin, Hypothesis, LinarithProblem, LinearExpr, Relation,
    elim_var,
};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;
use proptest::prelude::*;

/// Strategy for a comparator
fn ineq_strategy() -> impl Strategy<Value = Ineq> {
    prop_oneof![Just(Ineq::Eq), Just(Ineq::Le), Just(Ineq::Lt)]
}

/// Strategy for a comparison over variables `0..vars`
fn comp_strategy(vars: usize) -> impl Strategy<Value = Comp> {
    (
        ineq_strategy(),
        prop::collection::vec((0..vars, -3i64..=3i64), 1..=3),
    )
        .prop_map(|(ineq, terms)| Comp::from_terms(ineq, terms))
}

/// Strategy for a hypothesis list over variables `0..vars`
fn hyps_strategy(vars: usize, max_len: usize) -> impl Strategy<Value = Vec<Comp>> {
    prop::collection::vec(comp_strategy(vars), 1..=max_len)
}

/// Strategy for a nonzero coefficient
fn nonzero_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![-1000i64..=-1i64, 1i64..=1000i64]
}

fn refutes(config: OracleConfig, hyps: &[Comp], max_var: usize) -> Option<bool> {
    let mut oracle = FourierMotzkin::with_config(config);
    oracle
        .run(hyps, max_var)
        .ok()
        .map(|result| result.is_contradiction())
}

#[cfg(test)]
mod elim_var_properties {
    use super::*;

    proptest! {
        /// Test that the multipliers cancel and are coprime
        #[test]
        fn multipliers_cancel_minimally(v1 in nonzero_strategy(), v2 in nonzero_strategy()) {
            let c1 = Comp::from_terms(Ineq::Le, [(0, v1)]);
            let c2 = Comp::from_terms(Ineq::Le, [(0, v2)]);
            let result = elim_var(&c1, &c2, 0);

            if (v1 < 0) == (v2 < 0) {
                prop_assert!(result.is_none());
            } else {
                let (n1, n2) = result.expect("opposite signs");
                prop_assert!(n1 > BigUint::from(0u32));
                prop_assert!(n2 > BigUint::from(0u32));
                let sum = BigInt::from(n1.clone()) * v1 + BigInt::from(n2.clone()) * v2;
                prop_assert_eq!(sum, BigInt::from(0));
                prop_assert!(n1.gcd(&n2).is_one());
            }
        }

        /// Test that a variable missing from one side yields no multipliers
        #[test]
        fn absent_variable_is_undefined(v in nonzero_strategy()) {
            let c1 = Comp::from_terms(Ineq::Le, [(0, v)]);
            let c2 = Comp::from_terms(Ineq::Le, [(1, v)]);
            prop_assert!(elim_var(&c1, &c2, 0).is_none());
        }
    }
}

#[cfg(test)]
mod soundness_properties {
    use super::*;

    proptest! {
        /// Test that every certificate replays to 0 < 0
        #[test]
        fn certificates_replay_to_contradiction(hyps in hyps_strategy(3, 6)) {
            let mut oracle = FourierMotzkin::new();
            if let Ok(EliminationResult::Contradiction(refutation)) = oracle.run(&hyps, 2) {
                let replayed = refutation.certificate.replay(&hyps).expect("indices in range");
                prop_assert!(replayed.is_contr());
                prop_assert_eq!(&refutation.witness.c, &replayed);
                prop_assert!(refutation.certificate.hypotheses().all(|h| h < hyps.len()));
            }
        }

        /// Test that front-end combinations check against their problem
        #[test]
        fn combinations_check(
            hyps in prop::collection::vec(
                (
                    prop::collection::vec((0usize..2, -3i64..=3i64), 1..=2),
                    prop_oneof![
                        Just(Relation::Lt),
                        Just(Relation::Le),
                        Just(Relation::Eq),
                        Just(Relation::Ge),
                        Just(Relation::Gt),
                    ],
                    -5i64..=5i64,
                ),
                1..=4,
            )
        ) {
            let mut problem = LinarithProblem::new();
            for (terms, rel, constant) in hyps {
                let lhs = terms
                    .into_iter()
                    .fold(LinearExpr::zero(), |acc, (var, c)| acc.add(&LinearExpr::term(var, c)));
                problem.add(Hypothesis::new(lhs, rel, LinearExpr::constant(constant)));
            }

            if let Ok(Some(combination)) = problem.refute() {
                prop_assert!(combination.check(&problem));
            }
        }
    }
}

#[cfg(test)]
mod termination_properties {
    use super::*;

    proptest! {
        /// Test that the driver runs at most one round per variable
        #[test]
        fn rounds_bounded_by_variables(hyps in hyps_strategy(4, 6)) {
            let mut oracle = FourierMotzkin::new();
            if oracle.run(&hyps, 3).is_ok() {
                let passes = 1 + oracle.stats().unpruned_reruns;
                prop_assert!(oracle.stats().rounds <= 4 * passes);
            }
        }

        /// Test that a declared bound above every variable only adds rounds
        #[test]
        fn larger_bound_same_outcome(hyps in hyps_strategy(2, 4)) {
            let tight = refutes(OracleConfig::default(), &hyps, 1);
            let loose = refutes(OracleConfig::default(), &hyps, 4);
            prop_assert_eq!(tight, loose);
        }
    }
}

#[cfg(test)]
mod pruning_properties {
    use super::*;

    proptest! {
        /// Test that the filter never creates refutations
        #[test]
        fn pruned_refutation_implies_unpruned(hyps in hyps_strategy(3, 5)) {
            let pruned = refutes(OracleConfig::unlimited(), &hyps, 2);
            let unpruned = refutes(OracleConfig::unlimited().with_pruning(false), &hyps, 2);
            if pruned == Some(true) {
                prop_assert_eq!(unpruned, Some(true));
            }
        }

        /// Test that the default oracle refutes exactly what the unpruned
        /// oracle refutes
        #[test]
        fn pruning_never_loses_refutations(
            vars in 3usize..=5,
            hyps in prop::collection::vec(comp_strategy(5), 4..=7)
        ) {
            // fold variables above the bound back into range
            let hyps: Vec<Comp> = hyps
                .into_iter()
                .map(|c| {
                    let terms: Vec<(usize, BigInt)> =
                        c.coeffs.iter().map(|(v, k)| (v % vars, k.clone())).collect();
                    Comp::from_terms(c.ineq, terms)
                })
                .collect();
            let budget = OracleConfig::default()
                .with_max_working_set(5_000)
                .with_max_pairs(500_000);

            let pruned = refutes(budget.clone(), &hyps, vars - 1);
            let unpruned = refutes(budget.with_pruning(false), &hyps, vars - 1);
            if let (Some(pruned), Some(unpruned)) = (pruned, unpruned) {
                prop_assert_eq!(pruned, unpruned);
            }
        }
    }
}

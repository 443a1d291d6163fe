//! Property-based tests for comparisons
//!
//! This module tests:
//! - Commutativity and associativity of `add` on coefficients
//! - `scale` composition and identity
//! - Zero coefficients are never stored

use linarith_core::{Comp, Ineq, Linexp};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use proptest::prelude::*;

/// Strategy for a comparator
fn ineq_strategy() -> impl Strategy<Value = Ineq> {
    prop_oneof![Just(Ineq::Eq), Just(Ineq::Le), Just(Ineq::Lt)]
}

/// Strategy for a small sparse expression over variables 0..6
fn linexp_strategy() -> impl Strategy<Value = Linexp> {
    prop::collection::vec((0usize..6, -20i64..20i64), 0..6)
        .prop_map(|terms| Linexp::from_terms(terms))
}

/// Strategy for a comparison
fn comp_strategy() -> impl Strategy<Value = Comp> {
    (ineq_strategy(), linexp_strategy()).prop_map(|(ineq, coeffs)| Comp::new(ineq, coeffs))
}

/// Strategy for a positive scale factor
fn factor_strategy() -> impl Strategy<Value = u32> {
    1u32..50u32
}

#[cfg(test)]
mod add_properties {
    use super::*;

    proptest! {
        /// Test that addition is commutative
        #[test]
        fn add_commutative(a in comp_strategy(), b in comp_strategy()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        /// Test that addition is associative on coefficients and relations
        #[test]
        fn add_associative(
            a in comp_strategy(),
            b in comp_strategy(),
            c in comp_strategy()
        ) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        /// Test that sums never store a zero coefficient
        #[test]
        fn add_keeps_sparsity(a in comp_strategy(), b in comp_strategy()) {
            let sum = a.add(&b);
            for (_, coeff) in sum.coeffs.iter() {
                prop_assert!(!coeff.is_zero());
            }
        }

        /// Test that every coefficient of the sum is the sum of coefficients
        #[test]
        fn add_is_pointwise(a in comp_strategy(), b in comp_strategy(), var in 0usize..6) {
            let sum = a.add(&b);
            prop_assert_eq!(sum.coeff_of(var), a.coeff_of(var) + b.coeff_of(var));
        }

        /// Test that the relation of a sum is the stronger relation
        #[test]
        fn add_relation_is_max(a in comp_strategy(), b in comp_strategy()) {
            let expected = if a.ineq == Ineq::Lt || b.ineq == Ineq::Lt {
                Ineq::Lt
            } else if a.ineq == Ineq::Eq && b.ineq == Ineq::Eq {
                Ineq::Eq
            } else {
                Ineq::Le
            };
            prop_assert_eq!(a.add(&b).ineq, expected);
        }
    }
}

#[cfg(test)]
mod scale_properties {
    use super::*;

    proptest! {
        /// Test that scaling by one is the identity
        #[test]
        fn scale_by_one(c in comp_strategy()) {
            prop_assert_eq!(c.scale(&BigUint::from(1u32)), c);
        }

        /// Test that scale(scale(c, m), n) = scale(c, m * n)
        #[test]
        fn scale_composes(c in comp_strategy(), m in factor_strategy(), n in factor_strategy()) {
            let m = BigUint::from(m);
            let n = BigUint::from(n);
            prop_assert_eq!(c.scale(&m).scale(&n), c.scale(&(&m * &n)));
        }

        /// Test that scaling preserves the support and the relation
        #[test]
        fn scale_preserves_support(c in comp_strategy(), n in factor_strategy()) {
            let scaled = c.scale(&BigUint::from(n));
            prop_assert_eq!(scaled.ineq, c.ineq);
            prop_assert_eq!(scaled.vars().collect::<Vec<_>>(), c.vars().collect::<Vec<_>>());
            for (var, coeff) in c.coeffs.iter() {
                prop_assert_eq!(scaled.coeff_of(var), coeff * BigInt::from(n));
            }
        }

        /// Test that only a cancelled strict comparison is a contradiction
        #[test]
        fn contradiction_shape(c in comp_strategy()) {
            prop_assert_eq!(c.is_contr(), c.coeffs.is_empty() && c.ineq == Ineq::Lt);
        }
    }
}

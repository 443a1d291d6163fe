//! Fuzz target for the Fourier-Motzkin oracle
//!
//! Every certificate must replay to 0 < 0 over the generated hypotheses

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use linarith_core::{Comp, Ineq, OracleConfig};
use linarith_oracle::{EliminationResult, FourierMotzkin};

#[derive(Debug, Arbitrary)]
enum FuzzIneq {
    Eq,
    Le,
    Lt,
}

#[derive(Debug, Arbitrary)]
struct FuzzComp {
    ineq: FuzzIneq,
    terms: Vec<(u8, i8)>,
}

fuzz_target!(|data: &[u8]| {
    let mut unstructured = Unstructured::new(data);

    let num_vars: u8 = match unstructured.arbitrary() {
        Ok(n) => (n % 6) + 1,
        Err(_) => return,
    };

    let comps: Vec<FuzzComp> = match unstructured.arbitrary() {
        Ok(c) => c,
        Err(_) => return,
    };

    let hyps: Vec<Comp> = comps
        .into_iter()
        .take(12)
        .map(|fc| {
            let ineq = match fc.ineq {
                FuzzIneq::Eq => Ineq::Eq,
                FuzzIneq::Le => Ineq::Le,
                FuzzIneq::Lt => Ineq::Lt,
            };
            let terms = fc
                .terms
                .into_iter()
                .take(4)
                .map(|(var, coeff)| (usize::from(var % num_vars), i64::from(coeff)));
            Comp::from_terms(ineq, terms)
        })
        .collect();

    let config = OracleConfig::default()
        .with_max_working_set(2_000)
        .with_max_pairs(50_000);
    let mut oracle = FourierMotzkin::with_config(config);

    if let Ok(EliminationResult::Contradiction(refutation)) =
        oracle.run(&hyps, usize::from(num_vars - 1))
    {
        assert!(refutation.certificate.verify(&hyps));
    }
});

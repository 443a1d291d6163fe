//! Hypothesis front end.
//!
//! Users state hypotheses as `lhs R rhs` over affine expressions. The front
//! end turns them into oracle comparisons `Σ cᵢ·xᵢ R 0` and maps the
//! resulting certificate back onto the original hypotheses.
//!
//! ## Encoding
//!
//! - User variable `i` becomes oracle variable `i + 1`
//! - Oracle variable `0` stands for the constant `1`, and the fact `0 < 1`
//!   is appended as the last oracle hypothesis
//! - `lhs R rhs` becomes `lhs - rhs R 0`, or `rhs - lhs R' 0` for `≥`/`>`
//! - An equality becomes both `e = 0` and `-e = 0`, so a certificate may use
//!   it with either sign

use crate::certificate::Certificate;
use crate::fourier_motzkin::FourierMotzkin;
use crate::oracle::CertificateOracle;
use linarith_core::{Comp, HypId, Ineq, Linexp, OracleConfig, Result, VarId};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// An affine expression `constant + Σ cᵢ·xᵢ` over user variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearExpr {
    /// Constant term.
    pub constant: BigInt,
    /// Variable coefficients.
    pub coeffs: Linexp,
}

impl LinearExpr {
    /// The expression `0`.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant expression.
    pub fn constant(c: impl Into<BigInt>) -> Self {
        Self {
            constant: c.into(),
            coeffs: Linexp::new(),
        }
    }

    /// The variable `x_var` with coefficient 1.
    pub fn var(var: VarId) -> Self {
        Self::term(var, 1)
    }

    /// The term `coeff · x_var`.
    pub fn term(var: VarId, coeff: impl Into<BigInt>) -> Self {
        Self {
            constant: BigInt::zero(),
            coeffs: Linexp::from_terms([(var, coeff.into())]),
        }
    }

    /// Sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            constant: &self.constant + &other.constant,
            coeffs: self.coeffs.add(&other.coeffs),
        }
    }

    /// Difference `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            constant: -&self.constant,
            coeffs: self.coeffs.neg(),
        }
    }

    /// Multiply by an integer.
    #[must_use]
    pub fn scale(&self, k: &BigInt) -> Self {
        let magnitude = k.magnitude();
        let scaled = match k.sign() {
            Sign::NoSign => return Self::zero(),
            _ => Self {
                constant: &self.constant * BigInt::from(magnitude.clone()),
                coeffs: self.coeffs.scale(magnitude),
            },
        };
        if k.is_negative() { scaled.neg() } else { scaled }
    }

    /// Whether no variable occurs.
    pub fn is_constant(&self) -> bool {
        self.coeffs.is_empty()
    }
}

impl fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, coeff) in self.coeffs.iter() {
            write!(f, "{}*x{} + ", coeff, var)?;
        }
        write!(f, "{}", self.constant)
    }
}

/// Relation between the two sides of a hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `lhs < rhs`
    Lt,
    /// `lhs ≤ rhs`
    Le,
    /// `lhs = rhs`
    Eq,
    /// `lhs ≥ rhs`
    Ge,
    /// `lhs > rhs`
    Gt,
}

impl Relation {
    /// The relation of `¬(lhs R rhs)`, if it is a single comparison.
    pub fn negate(self) -> Option<Relation> {
        match self {
            Relation::Lt => Some(Relation::Ge),
            Relation::Le => Some(Relation::Gt),
            Relation::Ge => Some(Relation::Lt),
            Relation::Gt => Some(Relation::Le),
            Relation::Eq => None,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Relation::Lt => "<",
            Relation::Le => "≤",
            Relation::Eq => "=",
            Relation::Ge => "≥",
            Relation::Gt => ">",
        };
        write!(f, "{}", s)
    }
}

/// A hypothesis `lhs R rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypothesis {
    /// Left-hand side.
    pub lhs: LinearExpr,
    /// Relation.
    pub rel: Relation,
    /// Right-hand side.
    pub rhs: LinearExpr,
}

impl Hypothesis {
    /// Create a hypothesis.
    pub fn new(lhs: LinearExpr, rel: Relation, rhs: LinearExpr) -> Self {
        Self { lhs, rel, rhs }
    }

    /// Rewrite as `e R 0` with `R` one of `=`, `≤`, `<`.
    pub fn normalize(&self) -> (LinearExpr, Ineq) {
        match self.rel {
            Relation::Lt => (self.lhs.sub(&self.rhs), Ineq::Lt),
            Relation::Le => (self.lhs.sub(&self.rhs), Ineq::Le),
            Relation::Eq => (self.lhs.sub(&self.rhs), Ineq::Eq),
            Relation::Ge => (self.rhs.sub(&self.lhs), Ineq::Le),
            Relation::Gt => (self.rhs.sub(&self.lhs), Ineq::Lt),
        }
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.rel, self.rhs)
    }
}

/// Where an oracle hypothesis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Hypothesis { index: HypId, negated: bool },
    Positivity,
}

/// Oracle comparisons with their origins.
#[derive(Debug, Clone)]
struct Encoding {
    comps: Vec<Comp>,
    origins: Vec<Origin>,
    max_var: VarId,
}

/// Oracle variable holding the constant term.
const CONSTANT_VAR: VarId = 0;

fn encode_expr(e: &LinearExpr, ineq: Ineq) -> Comp {
    let terms = std::iter::once((CONSTANT_VAR, e.constant.clone()))
        .chain(e.coeffs.iter().map(|(var, c)| (var + 1, c.clone())));
    Comp::from_terms(ineq, terms)
}

/// A non-negative combination of hypotheses that refutes them.
///
/// Inequality hypotheses get non-negative coefficients; equalities may get
/// any sign. `positivity` counts the copies of `0 < 1` that were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearCombination {
    /// Coefficient of each used hypothesis.
    pub coefficients: BTreeMap<HypId, BigInt>,
    /// Multiplier of the fact `0 < 1`.
    pub positivity: BigUint,
}

impl LinearCombination {
    fn from_certificate(cert: &Certificate, origins: &[Origin]) -> Self {
        let mut combination = Self::default();
        for (&hyp, k) in cert.multipliers() {
            match origins.get(hyp) {
                Some(Origin::Hypothesis { index, negated }) => {
                    let k = BigInt::from(k.clone());
                    let entry = combination.coefficients.entry(*index).or_default();
                    if *negated {
                        *entry -= k;
                    } else {
                        *entry += k;
                    }
                }
                Some(Origin::Positivity) => combination.positivity += k,
                None => {}
            }
        }
        combination.coefficients.retain(|_, k| !k.is_zero());
        combination
    }

    /// Coefficient of hypothesis `hyp`, zero when unused.
    pub fn coefficient(&self, hyp: HypId) -> BigInt {
        self.coefficients
            .get(&hyp)
            .cloned()
            .unwrap_or_else(BigInt::zero)
    }

    /// Whether the combination, applied to the hypotheses of `problem`,
    /// cancels every variable and leaves a false constant comparison.
    pub fn check(&self, problem: &LinarithProblem) -> bool {
        let mut sum = LinearExpr::constant(-BigInt::from(self.positivity.clone()));
        let mut ineq = if self.positivity.is_zero() {
            Ineq::Eq
        } else {
            Ineq::Lt
        };

        for (&hyp, k) in &self.coefficients {
            let Some(hypothesis) = problem.hypotheses.get(hyp) else {
                return false;
            };
            let (e, rel) = hypothesis.normalize();
            if rel != Ineq::Eq && k.is_negative() {
                return false;
            }
            if k.is_zero() {
                continue;
            }
            sum = sum.add(&e.scale(k));
            ineq = ineq.max(rel);
        }

        sum.is_constant() && ineq.is_violated_by(&sum.constant)
    }
}

/// One refuted negation of a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofCase {
    /// The negated goal, appended after the problem's hypotheses.
    pub negated_goal: Hypothesis,
    /// Refutation of the hypotheses plus the negated goal.
    pub combination: LinearCombination,
}

/// Proof of a goal by refuting its negation.
///
/// An equality goal needs two cases, one per direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalProof {
    /// Refuted cases.
    pub cases: Vec<ProofCase>,
}

impl GoalProof {
    /// Whether every case checks against `problem` extended by its negated
    /// goal.
    pub fn check(&self, problem: &LinarithProblem) -> bool {
        !self.cases.is_empty()
            && self.cases.iter().all(|case| {
                let extended = problem.with_hypothesis(case.negated_goal.clone());
                case.combination.check(&extended)
            })
    }
}

/// A conjunction of hypotheses to refute or to prove goals from.
#[derive(Debug, Clone, Default)]
pub struct LinarithProblem {
    hypotheses: Vec<Hypothesis>,
    config: OracleConfig,
}

impl LinarithProblem {
    /// Create an empty problem with the default oracle configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty problem with a custom oracle configuration.
    pub fn with_config(config: OracleConfig) -> Self {
        Self {
            hypotheses: Vec::new(),
            config,
        }
    }

    /// Add a hypothesis, returning its index.
    pub fn add(&mut self, hypothesis: Hypothesis) -> HypId {
        self.hypotheses.push(hypothesis);
        self.hypotheses.len() - 1
    }

    /// Add `lhs R rhs`, returning its index.
    pub fn assume(&mut self, lhs: LinearExpr, rel: Relation, rhs: LinearExpr) -> HypId {
        self.add(Hypothesis::new(lhs, rel, rhs))
    }

    /// The hypotheses, in insertion order.
    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    /// Number of hypotheses.
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    /// Whether there are no hypotheses.
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    /// Copy of this problem with one more hypothesis.
    #[must_use]
    pub fn with_hypothesis(&self, hypothesis: Hypothesis) -> Self {
        let mut extended = self.clone();
        extended.add(hypothesis);
        extended
    }

    fn encode(&self) -> Encoding {
        let mut comps = Vec::with_capacity(self.hypotheses.len() + 1);
        let mut origins = Vec::with_capacity(self.hypotheses.len() + 1);

        for (index, hypothesis) in self.hypotheses.iter().enumerate() {
            let (e, ineq) = hypothesis.normalize();
            comps.push(encode_expr(&e, ineq));
            origins.push(Origin::Hypothesis {
                index,
                negated: false,
            });
            if ineq == Ineq::Eq {
                comps.push(encode_expr(&e.neg(), ineq));
                origins.push(Origin::Hypothesis {
                    index,
                    negated: true,
                });
            }
        }

        // 0 < 1, written -1 < 0
        comps.push(Comp::from_terms(Ineq::Lt, [(CONSTANT_VAR, -1)]));
        origins.push(Origin::Positivity);

        let max_var = comps
            .iter()
            .filter_map(Comp::max_var)
            .max()
            .unwrap_or(CONSTANT_VAR);

        Encoding {
            comps,
            origins,
            max_var,
        }
    }

    /// Search for a refutation with the Fourier-Motzkin oracle.
    pub fn refute(&self) -> Result<Option<LinearCombination>> {
        let mut oracle = FourierMotzkin::with_config(self.config.clone());
        self.refute_with(&mut oracle)
    }

    /// Search for a refutation with the given oracle.
    ///
    /// `Ok(None)` means no refutation was found, not that the hypotheses are
    /// satisfiable.
    pub fn refute_with<O>(&self, oracle: &mut O) -> Result<Option<LinearCombination>>
    where
        O: CertificateOracle + ?Sized,
    {
        let encoding = self.encode();
        debug!(
            oracle = oracle.name(),
            hypotheses = self.hypotheses.len(),
            comps = encoding.comps.len(),
            max_var = encoding.max_var,
            "refuting hypotheses"
        );

        let certificate = oracle.produce_certificate(&encoding.comps, encoding.max_var)?;
        Ok(certificate.map(|cert| LinearCombination::from_certificate(&cert, &encoding.origins)))
    }

    /// Prove `goal` by refuting the hypotheses together with its negation.
    ///
    /// An equality goal is split into `≤` and `≥`, and both negations must
    /// be refuted. Returns `Ok(None)` if some case has no refutation.
    pub fn prove(&self, goal: &Hypothesis) -> Result<Option<GoalProof>> {
        let negations = match goal.rel.negate() {
            Some(rel) => vec![Hypothesis::new(goal.lhs.clone(), rel, goal.rhs.clone())],
            None => vec![
                Hypothesis::new(goal.lhs.clone(), Relation::Gt, goal.rhs.clone()),
                Hypothesis::new(goal.lhs.clone(), Relation::Lt, goal.rhs.clone()),
            ],
        };

        let mut cases = Vec::with_capacity(negations.len());
        for negated_goal in negations {
            let extended = self.with_hypothesis(negated_goal.clone());
            match extended.refute()? {
                Some(combination) => cases.push(ProofCase {
                    negated_goal,
                    combination,
                }),
                None => {
                    debug!(goal = %goal, case = %negated_goal, "negated goal not refuted");
                    return Ok(None);
                }
            }
        }

        Ok(Some(GoalProof { cases }))
    }
}

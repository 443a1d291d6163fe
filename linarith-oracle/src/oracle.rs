//! Certificate oracle trait.

use crate::certificate::Certificate;
use linarith_core::{Comp, Result, VarId};

/// A procedure that searches for a refutation certificate.
///
/// `Ok(None)` means no certificate was found. It never means the hypotheses
/// are satisfiable.
pub trait CertificateOracle {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Search for a certificate refuting `hyps`, whose variables are all at
    /// most `max_var`.
    fn produce_certificate(
        &mut self,
        hyps: &[Comp],
        max_var: VarId,
    ) -> Result<Option<Certificate>>;
}

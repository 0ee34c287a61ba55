// crates/engine/src/domain/trust_engine.rs

use super::error::EngineResult;
use super::types::EvaluationCriteria;

/// Trait implemented by trust backends (SCVP today). This is the contract a
/// host decision framework calls into.
pub trait TrustEngine<C: ?Sized> {
    /// Decide whether `credential` is trusted.
    ///
    /// `Ok(false)` means the credential was evaluated and rejected; `Err`
    /// means no decision could be reached.
    fn validate(&self, credential: &C, criteria: Option<&EvaluationCriteria>) -> EngineResult<bool>;
}

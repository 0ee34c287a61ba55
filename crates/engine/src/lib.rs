// crates/engine/src/lib.rs

//! Public facade for the SCVP trust engine.
//! Exposes a stable API and re-exports types for host integrations.

pub mod adapters;
pub mod crypto;
pub mod domain;

use domain::error::EngineResult;

/// One-shot helper: build an engine for `endpoint`/`policy_oids` and decide
/// on `certificate`. Hosts that validate repeatedly should keep a
/// [`ScvpTrustEngine`] instead.
pub fn validate_scvp<F, I, S>(
    endpoint: &str,
    policy_oids: I,
    factory: F,
    certificate: &Certificate,
    criteria: Option<&EvaluationCriteria>,
) -> EngineResult<bool>
where
    F: ClientFactory + 'static,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let engine = ScvpTrustEngine::with_endpoint(endpoint, policy_oids, factory)?;
    TrustEngine::validate(&engine, certificate, criteria)
}

// Re-exports for convenience
pub use adapters::scvp::{
    ClientFactory, DiagnosticSink, ExchangeRecord, ScvpTrustEngine, TracingSink, ValidationClient,
};
pub use crypto::provider::CryptoProvider;
pub use domain::error::{DiagnosticError, EngineError, ExchangeError};
pub use domain::trust_engine::TrustEngine;
pub use domain::types::{
    Certificate, EndpointChecks, EvaluationCriteria, EngineDefaults, ExchangeState, RequiredPolicies, TrustEngineConfig,
    TrustEngineSettings, X509Credential,
};
pub use domain::verify::ValidationVerdict;

// adapters/scvp/engine.rs

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::crypto::provider::CryptoProvider;
use crate::domain::error::{EngineError, EngineResult};
use crate::domain::trust_engine::TrustEngine;
use crate::domain::types::{
  Certificate, EvaluationCriteria, ExchangeState, TrustEngineConfig, X509Credential,
};
use crate::domain::verify::ValidationVerdict;

use super::client::ClientFactory;
use super::diagnostics::{emit_diagnostics, DiagnosticSink, ExchangeRecord, TracingSink};

/// Trust engine that delegates path validation and policy checks to an SCVP
/// validation authority.
///
/// Cloning is cheap and clones share configuration. Every call builds its own
/// client, so one engine can serve concurrent callers.
#[derive(Clone)]
pub struct ScvpTrustEngine {
  config: Arc<TrustEngineConfig>,
  factory: Arc<dyn ClientFactory>,
  sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for ScvpTrustEngine {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ScvpTrustEngine")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

impl ScvpTrustEngine {
  pub fn new<F>(config: TrustEngineConfig, factory: F) -> Self
  where
    F: ClientFactory + 'static,
  {
    Self {
      config: Arc::new(config),
      factory: Arc::new(factory),
      sink: Arc::new(TracingSink),
    }
  }

  /// Validate `endpoint` and `policy_oids` and build an engine with default
  /// timeout. Nothing is sent to the authority until the first call.
  pub fn with_endpoint<I, S, F>(endpoint: impl Into<String>, policy_oids: I, factory: F) -> EngineResult<Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: ClientFactory + 'static,
  {
    Ok(Self::new(TrustEngineConfig::new(endpoint, policy_oids)?, factory))
  }

  /// Replace the default tracing sink for exchange diagnostics.
  pub fn with_diagnostics<D>(mut self, sink: D) -> Self
  where
    D: DiagnosticSink + 'static,
  {
    self.sink = Arc::new(sink);
    self
  }

  pub fn config(&self) -> &TrustEngineConfig {
    &self.config
  }

  /// Run one exchange for `certificate` and return the full verdict.
  ///
  /// Errors from the client surface as [`EngineError::Evaluation`]; a
  /// negative answer from the authority is `Ok` with `acceptable == false`.
  pub fn evaluate(
    &self,
    certificate: &Certificate,
    criteria: Option<&EvaluationCriteria>,
  ) -> EngineResult<ValidationVerdict> {
    let cfg = &*self.config;
    let subject = certificate.subject();
    let mut state = ExchangeState::NotStarted;

    let provider = CryptoProvider::global();
    let mut client = self.factory.create(provider);

    let fingerprint = provider.fingerprint(certificate).ok();
    tracing::info!(
      subject,
      fingerprint = fingerprint.as_deref().unwrap_or("-"),
      endpoint = cfg.endpoint(),
      policies = ?cfg.required_policies().as_slice(),
      "Preparing for SCVP validation"
    );
    if let Some(criteria) = criteria {
      let keys: Vec<&str> = criteria.keys().collect();
      tracing::trace!(subject, criteria = ?keys, "evaluation criteria supplied; not applied to the exchange");
    }

    advance(&mut state, ExchangeState::Exchanging, subject);
    let outcome = catch_unwind(AssertUnwindSafe(|| {
      client.validate(
        cfg.endpoint(),
        certificate,
        cfg.required_policies(),
        cfg.timeout(),
      )
    }));

    let next = match &outcome {
      Ok(Ok(_)) => ExchangeState::Decided,
      _ => ExchangeState::Failed,
    };
    advance(&mut state, next, subject);

    // Captured after the exchange so the dump always matches this call.
    emit_diagnostics(
      &*self.sink,
      &ExchangeRecord {
        subject,
        endpoint: cfg.endpoint(),
        state,
        request: client.full_request(),
        response: client.full_response(),
      },
    );

    match outcome {
      Ok(Ok(acceptable)) => {
        tracing::info!(subject, acceptable, "SCVP validation decided");
        Ok(ValidationVerdict {
          acceptable,
          request: client.full_request().map(<[u8]>::to_vec),
          response: client.full_response().map(<[u8]>::to_vec),
        })
      }
      Ok(Err(source)) => {
        tracing::warn!(subject, error = %source, "Error with SCVP client");
        Err(EngineError::Evaluation { source })
      }
      Err(_) => {
        tracing::error!(subject, "SCVP client panicked");
        Err(EngineError::Panic("validation client panicked".into()))
      }
    }
  }

  /// Async entry point. The blocking exchange runs on tokio's blocking pool.
  pub async fn validate_async(
    &self,
    certificate: Certificate,
    criteria: Option<EvaluationCriteria>,
  ) -> EngineResult<bool> {
    let engine = self.clone();
    tokio::task::spawn_blocking(move || {
      engine
        .evaluate(&certificate, criteria.as_ref())
        .map(|v| v.acceptable)
    })
    .await
    .map_err(|e| EngineError::Panic(e.to_string()))?
  }
}

impl<C> TrustEngine<C> for ScvpTrustEngine
where
  C: X509Credential + ?Sized,
{
  fn validate(&self, credential: &C, criteria: Option<&EvaluationCriteria>) -> EngineResult<bool> {
    self
      .evaluate(credential.entity_certificate(), criteria)
      .map(|v| v.acceptable)
  }
}

fn advance(state: &mut ExchangeState, next: ExchangeState, subject: &str) {
  tracing::trace!(subject, from = %state, to = %next, "exchange state");
  *state = next;
}

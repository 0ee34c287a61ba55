// crates/engine/src/domain/error.rs
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("configuration: {0}")]
  Config(String),

  #[error("certificate: {0}")]
  Certificate(String),

  /// The validation exchange could not produce a verdict. Distinct from a
  /// negative trust decision, which is `Ok(false)`.
  #[error("trust evaluation failed: {source}")]
  Evaluation {
    #[source]
    source: ExchangeError,
  },

  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[error("feature not enabled: {0}")]
  Feature(&'static str),

  // Useful when a blocking exchange panics on a worker thread.
  #[error("internal panic: {0}")]
  Panic(String),
}

impl From<ExchangeError> for EngineError {
  fn from(source: ExchangeError) -> Self {
    EngineError::Evaluation { source }
  }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Failure raised by a validation client while talking to the authority.
#[derive(Debug, Error)]
pub enum ExchangeError {
  #[error("transport: {0}")]
  Transport(String),

  #[error("exchange timed out after {0:?}")]
  Timeout(Duration),

  #[error("malformed response: {0}")]
  MalformedResponse(String),

  #[error("response verification failed: {0}")]
  Verification(String),

  /// The authority answered with an error status instead of a verdict.
  #[error("request rejected by validation authority: {0}")]
  Rejected(String),

  #[error("{0}")]
  Other(String),
}

/// Non-fatal failure while recording exchange diagnostics.
#[derive(Debug, Error)]
#[error("diagnostic emission failed: {0}")]
pub struct DiagnosticError(pub String);

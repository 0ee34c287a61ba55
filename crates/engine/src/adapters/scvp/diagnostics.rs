use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::domain::error::DiagnosticError;
use crate::domain::types::ExchangeState;

use super::constants::{DIAGNOSTICS_TARGET, MAX_DIAGNOSTIC_BYTES};

/// Wire-level view of one completed exchange.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeRecord<'a> {
  pub subject: &'a str,
  pub endpoint: &'a str,
  pub state: ExchangeState,
  pub request: Option<&'a [u8]>,
  pub response: Option<&'a [u8]>,
}

/// Destination for exchange diagnostics.
pub trait DiagnosticSink: Send + Sync {
  fn record(&self, record: &ExchangeRecord<'_>) -> Result<(), DiagnosticError>;
}

/// Writes request and response as hex at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
  fn record(&self, record: &ExchangeRecord<'_>) -> Result<(), DiagnosticError> {
    tracing::debug!(
      target: DIAGNOSTICS_TARGET,
      subject = record.subject,
      endpoint = record.endpoint,
      state = %record.state,
      "SCVP Request: {}",
      hex_dump(record.request),
    );
    tracing::debug!(
      target: DIAGNOSTICS_TARGET,
      subject = record.subject,
      endpoint = record.endpoint,
      state = %record.state,
      "SCVP Response: {}",
      hex_dump(record.response),
    );
    Ok(())
  }
}

/// Hand a record to `sink`. Errors and panics from the sink are logged and
/// dropped.
pub fn emit_diagnostics(sink: &dyn DiagnosticSink, record: &ExchangeRecord<'_>) {
  match catch_unwind(AssertUnwindSafe(|| sink.record(record))) {
    Ok(Ok(())) => {}
    Ok(Err(e)) => tracing::warn!(target: DIAGNOSTICS_TARGET, error = %e, "dropping exchange diagnostics"),
    Err(_) => tracing::warn!(target: DIAGNOSTICS_TARGET, "diagnostic sink panicked"),
  }
}

/// Upper-case hex of `bytes`, truncated past [`MAX_DIAGNOSTIC_BYTES`].
pub fn hex_dump(bytes: Option<&[u8]>) -> String {
  match bytes {
    None => "<none>".to_string(),
    Some(b) if b.len() > MAX_DIAGNOSTIC_BYTES => format!(
      "{}... ({} bytes total)",
      hex::encode_upper(&b[..MAX_DIAGNOSTIC_BYTES]),
      b.len()
    ),
    Some(b) => hex::encode_upper(b),
  }
}

use std::time::Duration;

use crate::crypto::provider::CryptoProvider;
use crate::domain::error::ExchangeError;
use crate::domain::types::{Certificate, RequiredPolicies};

/// One SCVP exchange with a validation authority.
///
/// Implementations own the request codec and the transport. A client value
/// is created per `validate` call and is never shared between calls, so it may
/// keep the last request/response in plain fields.
pub trait ValidationClient: Send {
  /// Build a request for `certificate` with `policies` as the initial policy
  /// set, send it to `endpoint` and interpret the response.
  ///
  /// Returns `Ok(true)` only when the authority reports the certificate valid
  /// and compliant with every policy in `policies`. The exchange must give up
  /// with [`ExchangeError::Timeout`] once `timeout` has elapsed.
  fn validate(
    &mut self,
    endpoint: &str,
    certificate: &Certificate,
    policies: &RequiredPolicies,
    timeout: Duration,
  ) -> Result<bool, ExchangeError>;

  /// DER encoded request of the last exchange, or `None` before any exchange.
  fn full_request(&self) -> Option<&[u8]>;

  /// DER encoded response of the last exchange, or `None` if nothing was
  /// received.
  fn full_response(&self) -> Option<&[u8]>;
}

/// Creates a fresh [`ValidationClient`] bound to the process crypto provider.
pub trait ClientFactory: Send + Sync {
  fn create(&self, provider: &'static CryptoProvider) -> Box<dyn ValidationClient>;
}

impl<F, C> ClientFactory for F
where
  F: Fn(&'static CryptoProvider) -> C + Send + Sync,
  C: ValidationClient + 'static,
{
  fn create(&self, provider: &'static CryptoProvider) -> Box<dyn ValidationClient> {
    Box::new(self(provider))
  }
}

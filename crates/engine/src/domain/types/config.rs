use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapters::scvp::validate_endpoint_url;
use crate::domain::error::{EngineError, EngineResult};

use super::trust::RequiredPolicies;

/// Centralized defaults for the trust engine.
/// All opinionated defaults should be defined here for consistency.
pub struct EngineDefaults;

impl EngineDefaults {
    pub const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(30);
    pub const ENDPOINT_CHECKS: Option<EndpointChecks> = None; // any non-empty endpoint is accepted
    pub const ALLOW_INSECURE_HTTP: bool = false; // when checks are on: HTTPS only
}

/// Opt-in hardening applied to the validation authority endpoint when the
/// engine is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EndpointChecks {
    /// Permit `http://` endpoints (also requires the `http_urls` feature).
    #[serde(default)]
    pub allow_http: bool,
}

impl EndpointChecks {
    pub fn secure() -> Self {
        Self { allow_http: EngineDefaults::ALLOW_INSECURE_HTTP }
    }
}

/// Immutable configuration owned by one engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustEngineConfig {
    endpoint: String,
    required_policies: RequiredPolicies,
    timeout: Duration,
}

impl TrustEngineConfig {
    /// Validate and freeze an endpoint plus policy set, using default timeout
    /// and no endpoint checks.
    pub fn new<I, S>(endpoint: impl Into<String>, policy_oids: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder(endpoint).policies(policy_oids).build()
    }

    pub fn builder(endpoint: impl Into<String>) -> TrustEngineConfigBuilder {
        TrustEngineConfigBuilder {
            endpoint: endpoint.into(),
            policies: Vec::new(),
            timeout: EngineDefaults::EXCHANGE_TIMEOUT,
            endpoint_checks: EngineDefaults::ENDPOINT_CHECKS,
        }
    }

    /// Build from a JSON document shaped like [`TrustEngineSettings`].
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let settings: TrustEngineSettings = serde_json::from_str(json)?;
        settings.into_config()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn required_policies(&self) -> &RequiredPolicies {
        &self.required_policies
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Clone)]
pub struct TrustEngineConfigBuilder {
    endpoint: String,
    policies: Vec<String>,
    timeout: Duration,
    endpoint_checks: Option<EndpointChecks>,
}

impl TrustEngineConfigBuilder {
    pub fn policy(mut self, oid: impl Into<String>) -> Self {
        self.policies.push(oid.into());
        self
    }

    pub fn policies<I, S>(mut self, oids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policies.extend(oids.into_iter().map(Into::into));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint_checks(mut self, checks: EndpointChecks) -> Self {
        self.endpoint_checks = Some(checks);
        self
    }

    pub fn build(self) -> EngineResult<TrustEngineConfig> {
        if self.endpoint.is_empty() {
            return Err(EngineError::Config("server URL cannot be null or empty".into()));
        }
        let required_policies = RequiredPolicies::new(self.policies)?;
        if self.timeout.is_zero() {
            return Err(EngineError::Config("exchange timeout must be non-zero".into()));
        }
        if let Some(checks) = self.endpoint_checks {
            validate_endpoint_url(&self.endpoint, checks.allow_http)?;
        }
        Ok(TrustEngineConfig {
            endpoint: self.endpoint,
            required_policies,
            timeout: self.timeout,
        })
    }
}

/// Serializable form of the engine configuration, e.g. for a host's config
/// file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrustEngineSettings {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub required_policies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_checks: Option<EndpointChecks>,
}

impl TrustEngineSettings {
    pub fn into_config(self) -> EngineResult<TrustEngineConfig> {
        let mut builder = TrustEngineConfig::builder(self.endpoint).policies(self.required_policies);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(checks) = self.endpoint_checks {
            builder = builder.endpoint_checks(checks);
        }
        builder.build()
    }
}

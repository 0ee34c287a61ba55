use std::net::IpAddr;
use url::{Host, Url};

use crate::domain::error::{EngineError, EngineResult};

/// Check a validation authority endpoint without touching the network: the
/// scheme must be HTTPS (HTTP only when allowed and the `http_urls` feature is
/// on) and literal IP hosts must be publicly routable.
pub fn validate_endpoint_url(url_str: &str, allow_http: bool) -> EngineResult<()> {
  let url = Url::parse(url_str)
    .map_err(|_| EngineError::Config("invalid endpoint URL".into()))?;
  match url.scheme() {
    "https" => {}
    "http" => {
      if !allow_http {
        return Err(EngineError::Config("HTTP endpoints are not allowed".into()));
      }
      #[cfg(not(feature = "http_urls"))]
      {
        return Err(EngineError::Feature("http_urls"));
      }
    }
    _ => return Err(EngineError::Config("unsupported endpoint URL scheme".into())),
  }
  let host = url.host().ok_or_else(|| EngineError::Config("endpoint URL missing host".into()))?;
  let ip = match host {
    Host::Ipv4(a) => Some(IpAddr::V4(a)),
    Host::Ipv6(a) => Some(IpAddr::V6(a)),
    Host::Domain(_) => None,
  };
  if let Some(ip) = ip {
    if is_blocked(ip) {
      return Err(EngineError::Config(
        "endpoint host is not allowed (private/link-local/loopback)".into(),
      ));
    }
  }
  Ok(())
}

fn is_blocked(ip: IpAddr) -> bool {
  match ip {
    IpAddr::V4(v4) => v4.is_private() || v4.is_loopback() || v4.is_link_local() || v4.is_broadcast() || v4.is_documentation() || v4.is_unspecified(),
    IpAddr::V6(v6) => v6.is_loopback() || v6.is_unique_local() || v6.is_unicast_link_local() || v6.is_unspecified() || v6.is_multicast(),
  }
}

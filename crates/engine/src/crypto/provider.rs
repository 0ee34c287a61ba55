//! Process-wide cryptographic provider.
//!
//! Validation clients need hashing and signature primitives to build requests
//! and check signed responses. The backing library is initialised once per
//! process on first use; later calls reuse the same registration.

use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;

use crate::domain::error::EngineResult;
use crate::domain::types::Certificate;

static GLOBAL_PROVIDER: OnceCell<CryptoProvider> = OnceCell::new();
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

/// Handle to the registered provider. Only obtainable through
/// [`CryptoProvider::global`].
#[derive(Debug)]
pub struct CryptoProvider {
    name: String,
}

impl CryptoProvider {
    /// Register the provider if absent and return it. Safe to call from many
    /// threads at once; registration runs exactly once.
    pub fn global() -> &'static CryptoProvider {
        GLOBAL_PROVIDER.get_or_init(register)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sha256(&self, data: &[u8]) -> EngineResult<[u8; 32]> {
        #[cfg(feature = "openssl")]
        {
            Ok(openssl::sha::sha256(data))
        }
        #[cfg(not(feature = "openssl"))]
        {
            let _ = data;
            Err(crate::domain::error::EngineError::Feature("openssl"))
        }
    }

    /// Colon separated SHA-256 fingerprint of the certificate's DER encoding.
    pub fn fingerprint(&self, cert: &Certificate) -> EngineResult<String> {
        let digest = self.sha256(cert.der())?;
        Ok(digest
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(":"))
    }
}

/// Number of times the provider has been registered in this process. Stays at
/// one once [`CryptoProvider::global`] has been called.
pub fn registration_count() -> usize {
    REGISTRATIONS.load(Ordering::SeqCst)
}

fn register() -> CryptoProvider {
    #[cfg(feature = "openssl")]
    let name = {
        openssl::init();
        format!("openssl ({})", openssl::version::version())
    };
    #[cfg(not(feature = "openssl"))]
    let name = String::from("none");

    REGISTRATIONS.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(provider = %name, "registered crypto provider");
    CryptoProvider { name }
}

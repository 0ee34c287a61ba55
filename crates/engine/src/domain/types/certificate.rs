use x509_parser::pem::parse_x509_pem;
use x509_parser::parse_x509_certificate;

use crate::domain::error::{EngineError, EngineResult};

/// An end-entity X.509 certificate under evaluation.
///
/// The DER encoding is decoded once at construction; the engine only ever
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    der: Vec<u8>,
    subject: String,
    issuer: String,
    serial: String,
}

impl Certificate {
    pub fn from_der(der: impl Into<Vec<u8>>) -> EngineResult<Self> {
        let der = der.into();
        let (subject, issuer, serial) = {
            let (rest, x509) = parse_x509_certificate(&der)
                .map_err(|e| EngineError::Certificate(format!("invalid DER: {e}")))?;
            if !rest.is_empty() {
                return Err(EngineError::Certificate(
                    "trailing bytes after certificate".into(),
                ));
            }
            (
                x509.subject().to_string(),
                x509.issuer().to_string(),
                x509.raw_serial_as_string(),
            )
        };
        Ok(Self { der, subject, issuer, serial })
    }

    /// Parse the first `CERTIFICATE` block of a PEM document.
    pub fn from_pem(pem: &[u8]) -> EngineResult<Self> {
        let (_, pem) = parse_x509_pem(pem)
            .map_err(|e| EngineError::Certificate(format!("invalid PEM: {e}")))?;
        if pem.label != "CERTIFICATE" {
            return Err(EngineError::Certificate(format!(
                "unexpected PEM label '{}'",
                pem.label
            )));
        }
        Self::from_der(pem.contents)
    }

    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Subject distinguished name in RFC 4514 string form.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Serial number as colon-separated hex.
    pub fn serial(&self) -> &str {
        &self.serial
    }
}

/// A credential that carries an end-entity certificate.
pub trait X509Credential {
    fn entity_certificate(&self) -> &Certificate;
}

impl X509Credential for Certificate {
    fn entity_certificate(&self) -> &Certificate {
        self
    }
}

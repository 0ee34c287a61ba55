// crates/engine/src/domain/verify.rs
use serde::Serialize;

/// Outcome of one validation exchange.
///
/// `acceptable` is the only field that feeds the trust decision; the raw
/// wire bytes are retained for troubleshooting and dropped with the verdict.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub acceptable: bool,
    /// DER encoded request as sent, if the client exposed it.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "as_hex")]
    pub request: Option<Vec<u8>>,
    /// DER encoded response as received, if the client exposed it.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "as_hex")]
    pub response: Option<Vec<u8>>,
}

impl ValidationVerdict {
    pub fn request_hex(&self) -> Option<String> {
        self.request.as_deref().map(hex::encode_upper)
    }

    pub fn response_hex(&self) -> Option<String> {
        self.response.as_deref().map(hex::encode_upper)
    }
}

fn as_hex<S: serde::Serializer>(bytes: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
    match bytes {
        Some(b) => s.serialize_str(&hex::encode_upper(b)),
        None => s.serialize_none(),
    }
}

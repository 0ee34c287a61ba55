#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rcgen::{CertificateParams, DistinguishedName, DnType};
use scvp_trust_engine as ste;

pub const ENDPOINT: &str = "https://scvp.example.org";
pub const PIV_AUTH_POLICY: &str = "2.16.840.1.101.3.2.1.3.7";

/// Generate a self-signed certificate with the given common name.
pub fn make_certificate(cn: &str) -> ste::Certificate {
    let der = generate_rcgen_cert(cn).serialize_der().expect("cert der");
    ste::Certificate::from_der(der).expect("parse cert")
}

/// Same as [`make_certificate`] but returns the PEM text.
pub fn make_certificate_pem(cn: &str) -> String {
    generate_rcgen_cert(cn).serialize_pem().expect("cert pem")
}

fn generate_rcgen_cert(cn: &str) -> rcgen::Certificate {
    let mut params = CertificateParams::new(vec![format!("{cn}.example.org")]);
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, cn.to_string());
    params.distinguished_name = dn;
    rcgen::Certificate::from_params(params).expect("cert")
}

/// What a [`ScriptedClient`] does when asked to validate.
#[derive(Debug, Clone)]
pub enum Script {
    Verdict(bool),
    Timeout,
    Transport(String),
    Malformed,
    Panic,
    /// Accept only subjects containing the given marker.
    AcceptSubjectsContaining(String),
}

/// Arguments a client saw, shared with the test.
#[derive(Debug, Default)]
pub struct Observed {
    pub calls: AtomicUsize,
    pub last_endpoint: Mutex<Option<String>>,
    pub last_policies: Mutex<Vec<String>>,
    pub last_timeout: Mutex<Option<Duration>>,
}

/// Fake validation client. The "request" is the certificate DER prefixed by
/// `REQ`, the "response" is `RSP` followed by the subject and the verdict
/// byte.
pub struct ScriptedClient {
    script: Script,
    observed: Arc<Observed>,
    request: Option<Vec<u8>>,
    response: Option<Vec<u8>>,
}

impl ScriptedClient {
    pub fn new(script: Script, observed: Arc<Observed>) -> Self {
        Self { script, observed, request: None, response: None }
    }
}

impl ste::ValidationClient for ScriptedClient {
    fn validate(
        &mut self,
        endpoint: &str,
        certificate: &ste::Certificate,
        policies: &ste::RequiredPolicies,
        timeout: Duration,
    ) -> Result<bool, ste::ExchangeError> {
        self.observed.calls.fetch_add(1, Ordering::SeqCst);
        *self.observed.last_endpoint.lock().unwrap() = Some(endpoint.to_string());
        *self.observed.last_policies.lock().unwrap() = policies.as_slice().to_vec();
        *self.observed.last_timeout.lock().unwrap() = Some(timeout);

        let mut req = b"REQ".to_vec();
        req.extend_from_slice(certificate.der());
        self.request = Some(req);

        let verdict = match &self.script {
            Script::Verdict(v) => *v,
            Script::Timeout => return Err(ste::ExchangeError::Timeout(timeout)),
            Script::Transport(msg) => return Err(ste::ExchangeError::Transport(msg.clone())),
            Script::Malformed => {
                self.response = Some(vec![0xde, 0xad]);
                return Err(ste::ExchangeError::MalformedResponse("not a CVResponse".into()));
            }
            Script::Panic => panic!("scripted client panic"),
            Script::AcceptSubjectsContaining(marker) => certificate.subject().contains(marker.as_str()),
        };

        let mut rsp = b"RSP".to_vec();
        rsp.extend_from_slice(certificate.subject().as_bytes());
        rsp.push(verdict as u8);
        self.response = Some(rsp);
        Ok(verdict)
    }

    fn full_request(&self) -> Option<&[u8]> {
        self.request.as_deref()
    }

    fn full_response(&self) -> Option<&[u8]> {
        self.response.as_deref()
    }
}

/// Engine for the standard scenario endpoint/policy backed by `script`.
pub fn scripted_engine(script: Script) -> (ste::ScvpTrustEngine, Arc<Observed>) {
    let observed = Arc::new(Observed::default());
    let shared = observed.clone();
    let engine = ste::ScvpTrustEngine::with_endpoint(
        ENDPOINT,
        [PIV_AUTH_POLICY],
        move |_: &'static ste::CryptoProvider| ScriptedClient::new(script.clone(), shared.clone()),
    )
    .expect("engine");
    (engine, observed)
}

/// One captured diagnostic record.
#[derive(Debug, Clone)]
pub struct Captured {
    pub subject: String,
    pub state: ste::ExchangeState,
    pub request: Option<Vec<u8>>,
    pub response: Option<Vec<u8>>,
}

#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub records: Arc<Mutex<Vec<Captured>>>,
}

impl ste::DiagnosticSink for RecordingSink {
    fn record(&self, record: &ste::ExchangeRecord<'_>) -> Result<(), ste::DiagnosticError> {
        self.records.lock().unwrap().push(Captured {
            subject: record.subject.to_string(),
            state: record.state,
            request: record.request.map(<[u8]>::to_vec),
            response: record.response.map(<[u8]>::to_vec),
        });
        Ok(())
    }
}

pub struct FailingSink;

impl ste::DiagnosticSink for FailingSink {
    fn record(&self, _: &ste::ExchangeRecord<'_>) -> Result<(), ste::DiagnosticError> {
        Err(ste::DiagnosticError("disk full".into()))
    }
}

pub struct PanickingSink;

impl ste::DiagnosticSink for PanickingSink {
    fn record(&self, _: &ste::ExchangeRecord<'_>) -> Result<(), ste::DiagnosticError> {
        panic!("sink exploded")
    }
}

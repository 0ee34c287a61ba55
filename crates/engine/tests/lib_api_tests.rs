mod common;

use common::Script;
use scvp_trust_engine as ste;

/// A host credential that wraps the certificate with other material.
struct SamlCredential {
    entity_id: String,
    cert: ste::Certificate,
}

impl ste::X509Credential for SamlCredential {
    fn entity_certificate(&self) -> &ste::Certificate {
        &self.cert
    }
}

#[test]
fn one_shot_helper_decides() {
    let cert = common::make_certificate("alice");
    let trusted = ste::validate_scvp(
        common::ENDPOINT,
        [common::PIV_AUTH_POLICY],
        |_: &'static ste::CryptoProvider| common::ScriptedClient::new(Script::Verdict(true), Default::default()),
        &cert,
        None,
    )
    .unwrap();
    assert!(trusted);
}

#[test]
fn one_shot_helper_rejects_bad_config() {
    let cert = common::make_certificate("alice");
    let r = ste::validate_scvp(
        "",
        [common::PIV_AUTH_POLICY],
        |_: &'static ste::CryptoProvider| common::ScriptedClient::new(Script::Verdict(true), Default::default()),
        &cert,
        None,
    );
    assert!(matches!(r, Err(ste::EngineError::Config(_))));
}

#[test]
fn engine_works_behind_trait_object() {
    let (engine, _) = common::scripted_engine(Script::Verdict(true));
    let dyn_engine: &dyn ste::TrustEngine<SamlCredential> = &engine;
    let cred = SamlCredential {
        entity_id: "https://sp.example.org/shibboleth".into(),
        cert: common::make_certificate("sp"),
    };
    assert!(!cred.entity_id.is_empty());
    assert!(dyn_engine.validate(&cred, None).unwrap());
}

#[test]
fn engine_debug_shows_config() {
    let (engine, _) = common::scripted_engine(Script::Verdict(true));
    let dbg = format!("{engine:?}");
    assert!(dbg.contains("scvp.example.org"));
}

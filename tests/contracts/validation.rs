//! Validation contracts
//!
//! Fail-fast: the first structural violation aborts compilation with an
//! error naming the entry, and no plan is produced.

use domain_companion::{CompanionError, ConfigSource, DomainMapCompiler};

use crate::common::*;

fn compile_err(json: &str) -> CompanionError {
    DomainMapCompiler::default()
        .compile_source(&ConfigSource::json(json))
        .expect_err("expected compilation to fail")
}

#[test]
fn contract_missing_bounce_email_is_invalid_email_config() {
    let err = compile_err(
        r#"{"a": {"hostZoneName": "ex.com", "hostedZoneId": "Z1", "redirects": [], "emails": []}}"#,
    );
    assert!(
        matches!(&err, CompanionError::InvalidEmailConfig { key, .. } if key == "a"),
        "{err:?}"
    );
}

#[test]
fn contract_missing_zone_fields_are_invalid_domain_map() {
    for field in ["hostZoneName", "hostedZoneId", "redirects"] {
        let mut value: serde_json::Value = serde_json::from_str(
            r#"{"a": {"hostZoneName": "ex.com", "hostedZoneId": "Z1", "redirects": [], "bounceEmail": "b@ex.com", "emails": []}}"#,
        )
        .unwrap();
        value["a"].as_object_mut().unwrap().remove(field);

        let err = compile_err(&value.to_string());
        assert_eq!(err.kind(), "InvalidDomainMap", "removing {field}: {err}");
    }
}

#[test]
fn contract_first_violation_wins() {
    // entry "a" lacks a redirect field, entry "b" lacks everything; "a" is reported
    let err = compile_err(
        r#"{
            "a": {"hostZoneName": "ex.com", "hostedZoneId": "Z1", "redirects": [{}], "bounceEmail": "b@ex.com", "emails": []},
            "b": {}
        }"#,
    );
    match err {
        CompanionError::InvalidRedirect { key, index, .. } => {
            assert_eq!(key, "a");
            assert_eq!(index, 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn contract_incomplete_email_rule_is_invalid_email_rule() {
    let err = compile_err(
        r#"{"a": {"hostZoneName": "ex.com", "hostedZoneId": "Z1", "redirects": [], "bounceEmail": "b@ex.com",
                 "emails": [{"fromSender": "f@ex.com", "alias": "info", "recipients": ["u@ex.com"]}]}}"#,
    );
    assert_eq!(err.kind(), "InvalidEmailRule");
}

#[test]
fn contract_empty_documents_are_empty_config() {
    for text in ["", "null", "{}"] {
        let err = compile_err(text);
        assert_eq!(err.kind(), "EmptyConfig", "input {text:?}");
    }
}

#[test]
fn contract_unparseable_document_is_malformed() {
    assert_eq!(compile_err("{not json").kind(), "MalformedConfig");
    assert_eq!(compile_err("[]").kind(), "MalformedConfig");
}

#[test]
fn contract_redirect_sources_must_be_hostnames() {
    for redirect in [
        r#"{"sourceDomain": ".ex.com", "targetDomain": "ex.org"}"#,
        r#"{"sourceDomain": "www..ex.com", "targetDomain": "ex.org"}"#,
        r#"{"subDomain": ".www"}"#,
    ] {
        let err = compile_err(&format!(
            r#"{{"a": {}}}"#,
            entry("ex.com", &format!("[{}]", redirect), "[]")
        ));
        assert_eq!(err.kind(), "InvalidRedirect", "redirect {redirect}");
    }
}

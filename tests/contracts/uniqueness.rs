//! Cross-entry uniqueness contracts

use std::collections::HashSet;

use domain_companion::{CompanionError, ConfigSource, DomainMapCompiler};

use crate::common::*;

fn compile(json: &str) -> Result<domain_companion::CompiledDomainMap, CompanionError> {
    DomainMapCompiler::default().compile_source(&ConfigSource::json(json))
}

#[test]
fn contract_duplicate_zone_rejected() {
    let err = compile(&format!(
        r#"{{"one": {}, "two": {}}}"#,
        entry("ex.com", "[]", "[]"),
        entry("ex.com", r#"[{"subDomain": "www"}]"#, "[]")
    ))
    .unwrap_err();
    assert_eq!(err.kind(), "DuplicateZone");
}

#[test]
fn contract_identifier_collision_rejected() {
    let err = compile(&format!(
        r#"{{"one": {}, "two": {}}}"#,
        entry("a-b.com", "[]", "[]"),
        entry("ab.com", "[]", "[]")
    ))
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "zones 'a-b.com' and 'ab.com' both map to resource identifier 'abcom'"
    );
}

#[test]
fn contract_hostname_conflict_across_zones_rejected() {
    let err = compile(&format!(
        r#"{{"one": {}, "two": {}}}"#,
        entry("ex.com", r#"[{"subDomain": "mail"}]"#, "[]"),
        entry("mail.ex.com", r#"[{"subDomain": "."}]"#, "[]")
    ))
    .unwrap_err();
    assert_eq!(err.kind(), "HostnameConflict");
}

#[test]
fn contract_zone_must_yield_an_identifier() {
    let err = compile(&format!(
        r#"{{"one": {}}}"#,
        entry("--", r#"[{"subDomain": "www"}]"#, "[]")
    ))
    .unwrap_err();
    assert_eq!(err.kind(), "InvalidDomainMap");
}

#[test]
fn contract_repeated_hostname_in_one_zone_served_once() {
    let plan = compile(&format!(
        r#"{{"one": {}}}"#,
        entry(
            "ex.com",
            r#"[{"subDomain": "www"}, {"subDomain": "WWW"}, {"sourceDomain": "www.ex.com", "targetDomain": "ex.org"}]"#,
            "[]"
        )
    ))
    .unwrap();
    let group = &plan.redirect_groups[0];
    assert_eq!(group.source_hostnames, vec!["www.ex.com"]);
    assert_eq!(group.alias_labels, vec!["www"]);
    let hostnames: Vec<&str> = plan.edge_routes.iter().map(|r| r.hostname.as_str()).collect();
    assert_eq!(hostnames, vec!["www.ex.com"]);
}

#[test]
fn contract_identifiers_unique_in_valid_plan() {
    let plan = compile(MULTI_TENANT).unwrap();
    let identifiers: HashSet<&str> = plan
        .redirect_groups
        .iter()
        .map(|g| g.identifier.as_str())
        .collect();
    assert_eq!(identifiers.len(), plan.redirect_groups.len());
}

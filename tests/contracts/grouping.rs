//! Redirect grouping contracts
//!
//! One group per routable entry; hostnames, alias labels and the
//! certificate set all derive from the entry's redirects in order.

use crate::common::*;

#[test]
fn contract_reference_example_compiles_as_documented() {
    let plan = compile_json(SINGLE_ZONE);

    assert_eq!(plan.redirect_groups.len(), 1);
    let group = &plan.redirect_groups[0];
    assert_eq!(group.identifier.as_str(), "excom");
    assert_eq!(group.hosted_zone_id, "Z1");
    assert_eq!(group.source_hostnames, vec!["ex.com", "www.ex.com"]);
    assert_eq!(group.certificate_subject_domains, vec!["ex.com", "www.ex.com"]);
}

#[test]
fn contract_groups_follow_document_order() {
    let plan = compile_json(MULTI_TENANT);
    let zones: Vec<&str> = plan
        .redirect_groups
        .iter()
        .map(|g| g.zone_name.as_str())
        .collect();
    // letters.io has no redirects and is not routable
    assert_eq!(zones, vec!["weirdion.com", "parked-name.org"]);
    // but it is still a validated entry
    assert_eq!(plan.entries.len(), 3);
}

#[test]
fn contract_alias_labels_pair_with_hostnames() {
    let plan = compile_json(MULTI_TENANT);
    for group in &plan.redirect_groups {
        assert_eq!(group.alias_labels.len(), group.source_hostnames.len());
        for (label, hostname) in group.alias_records() {
            if label.is_empty() {
                assert_eq!(hostname, group.zone_name);
            } else {
                assert_eq!(hostname, format!("{}.{}", label, group.zone_name));
            }
        }
    }
}

#[test]
fn contract_absolute_redirect_normalizes_like_relative() {
    let relative = compile_json(&format!(
        r#"{{"a": {}}}"#,
        entry("ex.com", r#"[{"subDomain": "blog"}]"#, "[]")
    ));
    let absolute = compile_json(&format!(
        r#"{{"a": {}}}"#,
        entry(
            "ex.com",
            r#"[{"sourceDomain": "blog.ex.com", "targetDomain": "ex.org"}]"#,
            "[]"
        )
    ));

    let rel = &relative.redirect_groups[0];
    let abs = &absolute.redirect_groups[0];
    assert_eq!(rel.source_hostnames, abs.source_hostnames);
    assert_eq!(rel.alias_labels, abs.alias_labels);
    assert_eq!(rel.certificate_subject_domains, abs.certificate_subject_domains);
}

#[test]
fn contract_certificate_starts_with_zone_even_without_apex() {
    let plan = compile_json(&format!(
        r#"{{"a": {}}}"#,
        entry("ex.com", r#"[{"subDomain": "www"}, {"subDomain": "api"}]"#, "[]")
    ));
    assert_eq!(
        plan.redirect_groups[0].certificate_subject_domains,
        vec!["ex.com", "www.ex.com", "api.ex.com"]
    );
    assert_eq!(
        plan.redirect_groups[0].subject_alternative_names(),
        &["www.ex.com".to_string(), "api.ex.com".to_string()]
    );
}

#[test]
fn contract_edge_routes_cover_every_redirect() {
    let plan = compile_json(MULTI_TENANT);
    let hostnames: Vec<&str> = plan.edge_routes.iter().map(|r| r.hostname.as_str()).collect();
    assert_eq!(
        hostnames,
        vec![
            "weirdion.com",
            "www.weirdion.com",
            "blog.weirdion.com",
            "parked-name.org",
            "www.parked-name.org",
            "shop.parked-name.org",
        ]
    );
}

//! Routing contracts over compiled tables

use domain_companion::{EdgeRouter, ForwardingTable, MailRouter, MailRuleKind};
use domain_companion::settings::EdgeConfig;

use crate::common::*;

#[test]
fn contract_forwarding_zone_routes_to_forward_rule() {
    let plan = compile_json(MULTI_TENANT);
    let router = MailRouter::new(&plan.mail_rules);

    for address in ["hello@weirdion.com", "anything@letters.io"] {
        assert_eq!(router.route(address).unwrap().kind, MailRuleKind::Forward, "{address}");
    }
}

#[test]
fn contract_non_forwarding_zone_routes_to_its_bounce_rule() {
    let plan = compile_json(MULTI_TENANT);
    let rule = MailRouter::new(&plan.mail_rules)
        .route("sales@parked-name.org")
        .unwrap();
    assert_eq!(rule.kind, MailRuleKind::Bounce);
    assert_eq!(rule.recipients, vec!["parked-name.org"]);
}

#[test]
fn contract_forward_resolution_matches_alias_forms() {
    let plan = compile_json(MULTI_TENANT);
    let table = ForwardingTable::new(&plan.entries);

    let local = table.resolve("Someone <hello@weirdion.com>").unwrap();
    assert_eq!(local.destinations, vec!["me@mail.test"]);
    assert_eq!(local.subject("Hi"), "[weirdion] Hi");

    let full = table.resolve("jobs@weirdion.com").unwrap();
    assert_eq!(full.to_header(), "me@mail.test, agent@mail.test");

    assert!(table.resolve("jobs@letters.io").is_none());
}

#[test]
fn contract_edge_routes_resolve_targets() {
    let plan = compile_json(MULTI_TENANT);
    let edge = EdgeConfig::default();
    let router = EdgeRouter::new(&plan, &edge);

    let apex = router.resolve("weirdion.com", "/").unwrap();
    assert_eq!(apex.location, "https://github.com/weirdion");
    assert_eq!(apex.status, 301);

    let feed = router.resolve("blog.weirdion.com", "/feed").unwrap();
    assert_eq!(feed.location, "https://blog.example.net/rss.xml");

    // parked zone declares no target and no default is configured
    assert!(router.resolve("www.parked-name.org", "/").is_none());
}

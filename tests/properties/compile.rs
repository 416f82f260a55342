//! Property tests for whole-map compilation.

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use domain_companion::{ConfigSource, DomainMapCompiler, MailRuleKind};

#[derive(Debug, Clone)]
struct ZoneShape {
    labels: Vec<String>,
    aliases: usize,
}

fn zone_shape() -> impl Strategy<Value = ZoneShape> {
    let label = prop_oneof![
        1 => Just(".".to_string()),
        4 => "[a-z][a-z0-9]{0,7}",
    ];
    (proptest::collection::vec(label, 0..5), 0usize..3)
        .prop_map(|(labels, aliases)| ZoneShape { labels, aliases })
}

/// Distinct zone names `z<i>.test` keep identifiers and hostnames unique
fn document(zones: &[ZoneShape]) -> String {
    let mut map = Map::new();
    for (i, shape) in zones.iter().enumerate() {
        let zone = format!("z{}.test", i);
        let redirects: Vec<Value> = shape
            .labels
            .iter()
            .map(|l| json!({ "subDomain": l }))
            .collect();
        let emails: Vec<Value> = (0..shape.aliases)
            .map(|n| {
                json!({
                    "fromSender": format!("fwd@{}", zone),
                    "alias": format!("alias{}", n),
                    "recipients": ["me@mail.test"],
                    "subjectPrefix": "",
                })
            })
            .collect();
        map.insert(
            format!("entry{}", i),
            json!({
                "hostZoneName": zone,
                "hostedZoneId": format!("Z{}", i),
                "redirects": redirects,
                "bounceEmail": format!("bounce@{}", zone),
                "emails": emails,
            }),
        );
    }
    Value::Object(map).to_string()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: certificate sets and source hostnames never repeat, and
    /// certificates lead with the zone.
    #[test]
    fn property_certificate_set_unique_and_zone_first(
        zones in proptest::collection::vec(zone_shape(), 1..5)
    ) {
        let plan = DomainMapCompiler::default()
            .compile_source(&ConfigSource::json(document(&zones)))
            .unwrap();

        for group in &plan.redirect_groups {
            let domains = &group.certificate_subject_domains;
            prop_assert_eq!(&domains[0], &group.zone_name);
            let unique: HashSet<&String> = domains.iter().collect();
            prop_assert_eq!(unique.len(), domains.len());
            for hostname in &group.source_hostnames {
                prop_assert!(domains.contains(hostname));
            }
            let hosts: HashSet<&String> = group.source_hostnames.iter().collect();
            prop_assert_eq!(hosts.len(), group.source_hostnames.len());
            prop_assert_eq!(group.alias_labels.len(), group.source_hostnames.len());
        }
    }

    /// PROPERTY: the forward rule, when present, is first and lists exactly
    /// the zones that forward; every zone has one bounce rule, in order.
    #[test]
    fn property_mail_rule_order(
        zones in proptest::collection::vec(zone_shape(), 1..6)
    ) {
        let plan = DomainMapCompiler::default()
            .compile_source(&ConfigSource::json(document(&zones)))
            .unwrap();
        let rules = plan.mail_rules.rules();

        let forwarding: Vec<String> = zones
            .iter()
            .enumerate()
            .filter(|(_, z)| z.aliases > 0)
            .map(|(i, _)| format!("z{}.test", i))
            .collect();

        let bounces = if forwarding.is_empty() {
            rules
        } else {
            prop_assert_eq!(rules[0].kind, MailRuleKind::Forward);
            prop_assert_eq!(&rules[0].recipients, &forwarding);
            &rules[1..]
        };

        prop_assert_eq!(bounces.len(), zones.len());
        for (i, rule) in bounces.iter().enumerate() {
            prop_assert_eq!(rule.kind, MailRuleKind::Bounce);
            prop_assert_eq!(rule.recipients.clone(), vec![format!("z{}.test", i)]);
        }
    }

    /// PROPERTY: compiling twice yields identical plans and fingerprints.
    #[test]
    fn property_compile_is_deterministic(
        zones in proptest::collection::vec(zone_shape(), 1..4)
    ) {
        let doc = document(&zones);
        let compiler = DomainMapCompiler::default();
        let first = compiler.compile_source(&ConfigSource::json(doc.clone())).unwrap();
        let second = compiler.compile_source(&ConfigSource::json(doc)).unwrap();
        prop_assert_eq!(&first.fingerprint, &second.fingerprint);
        prop_assert_eq!(first.to_json_pretty(), second.to_json_pretty());
    }

    /// PROPERTY: only entries with redirects become groups, in entry order.
    #[test]
    fn property_routable_groups_in_order(
        zones in proptest::collection::vec(zone_shape(), 1..6)
    ) {
        let plan = DomainMapCompiler::default()
            .compile_source(&ConfigSource::json(document(&zones)))
            .unwrap();
        let expected: Vec<String> = zones
            .iter()
            .enumerate()
            .filter(|(_, z)| !z.labels.is_empty())
            .map(|(i, _)| format!("z{}.test", i))
            .collect();
        let actual: Vec<String> = plan
            .redirect_groups
            .iter()
            .map(|g| g.zone_name.clone())
            .collect();
        prop_assert_eq!(actual, expected);
    }
}

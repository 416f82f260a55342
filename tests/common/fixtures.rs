//! Test fixtures - reusable domain maps.

use domain_companion::{CompiledDomainMap, ConfigSource, DomainMapCompiler};

/// Single zone with apex and www redirects and one alias
pub const SINGLE_ZONE: &str = r#"{
  "a": {
    "hostZoneName": "ex.com",
    "hostedZoneId": "Z1",
    "redirects": [{"subDomain": "."}, {"subDomain": "www"}],
    "bounceEmail": "b@ex.com",
    "emails": [
      {"fromSender": "f@ex.com", "alias": "info", "recipients": ["u@ex.com"], "subjectPrefix": "[ex]"}
    ]
  }
}"#;

/// Three tenants: a forwarding site, a parked domain, and a mail-only zone
pub const MULTI_TENANT: &str = r#"{
  "personal": {
    "hostZoneName": "weirdion.com",
    "hostedZoneId": "Z0001",
    "redirects": [
      {"subDomain": ".", "targetDomain": "github.com/weirdion"},
      {"subDomain": "www", "targetDomain": "github.com/weirdion"},
      {"sourceDomain": "blog.weirdion.com", "targetDomain": "blog.example.net", "uriMap": {"/feed": "/rss.xml"}}
    ],
    "bounceEmail": "bounce@weirdion.com",
    "emails": [
      {"fromSender": "forwarder@weirdion.com", "alias": "hello", "recipients": ["me@mail.test"], "subjectPrefix": "[weirdion] "},
      {"fromSender": "forwarder@weirdion.com", "alias": "jobs@weirdion.com", "recipients": ["me@mail.test", "agent@mail.test"], "subjectPrefix": "[jobs] "}
    ]
  },
  "parked": {
    "hostZoneName": "parked-name.org",
    "hostedZoneId": "Z0002",
    "redirects": [{"subDomain": "."}, {"subDomain": "www"}, {"subDomain": "shop"}],
    "bounceEmail": "noreply@parked-name.org",
    "emails": []
  },
  "mailonly": {
    "hostZoneName": "letters.io",
    "hostedZoneId": "Z0003",
    "redirects": [],
    "bounceEmail": "postmaster@letters.io",
    "emails": [
      {"fromSender": "fwd@letters.io", "alias": "post", "recipients": ["box@mail.test"], "subjectPrefix": ""}
    ]
  }
}"#;

/// YAML rendering of a two-zone map
pub const YAML_MAP: &str = r#"
second:
  hostZoneName: second.net
  hostedZoneId: Z2
  redirects:
    - subDomain: www
  bounceEmail: bounce@second.net
  emails: []
first:
  hostZoneName: first.com
  hostedZoneId: Z1
  redirects: []
  bounceEmail: bounce@first.com
  emails:
    - fromSender: f@first.com
      alias: info
      recipients: [me@mail.test]
      subjectPrefix: "[first] "
"#;

/// Compile JSON text with default settings
pub fn compile_json(json: &str) -> CompiledDomainMap {
    DomainMapCompiler::default()
        .compile_source(&ConfigSource::json(json))
        .unwrap_or_else(|e| panic!("fixture failed to compile: {e}"))
}

/// A minimal valid entry as JSON text
pub fn entry(zone: &str, redirects: &str, emails: &str) -> String {
    format!(
        r#"{{"hostZoneName": "{zone}", "hostedZoneId": "Z-{zone}", "redirects": {redirects}, "bounceEmail": "bounce@{zone}", "emails": {emails}}}"#
    )
}

/// One alias forwarding to a single mailbox
pub fn alias(name: &str) -> String {
    format!(
        r#"[{{"fromSender": "fwd@mail.test", "alias": "{name}", "recipients": ["me@mail.test"], "subjectPrefix": ""}}]"#
    )
}

//! Alias forward resolution
//!
//! The forwarder receives the stored message and needs to know where it
//! goes. Only the last address of the `To` header counts, so a display name
//! such as `Jane <info@ex.com>` resolves the same as the bare address. The
//! local part is reduced to its leading word characters, folding tagged
//! addresses like `info+news@ex.com` onto `info@ex.com`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::entities::DomainMapEntry;
use crate::domain::value_objects::canonical_host;

static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9_]+)[a-zA-Z0-9_.+-]*@([a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+)")
        .expect("address pattern is valid")
});

/// Last address in `header`, normalized to `local@domain`
pub fn extract_address(header: &str) -> Option<(String, String)> {
    let captures = ADDRESS.captures_iter(header).last()?;
    Some((captures[1].to_string(), captures[2].to_string()))
}

/// Where a forwarded message goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardInstruction {
    /// Normalized address the message was sent to
    pub address: String,
    /// Verified sender used for the re-send
    pub sender: String,
    pub destinations: Vec<String>,
    pub subject_prefix: String,
}

impl ForwardInstruction {
    /// Subject for the forwarded copy
    pub fn subject(&self, original: &str) -> String {
        format!("{}{}", self.subject_prefix, original)
    }

    /// Destinations rendered for a `To:` header
    pub fn to_header(&self) -> String {
        self.destinations.join(", ")
    }
}

/// Alias lookup over validated entries
#[derive(Debug, Clone, Copy)]
pub struct ForwardingTable<'a> {
    entries: &'a [DomainMapEntry],
}

impl<'a> ForwardingTable<'a> {
    pub fn new(entries: &'a [DomainMapEntry]) -> Self {
        Self { entries }
    }

    /// Forward instruction for a `To` header, if its alias is configured
    pub fn resolve(&self, to_header: &str) -> Option<ForwardInstruction> {
        let (local, domain) = extract_address(to_header)?;
        let address = format!("{}@{}", local, domain);
        let domain = canonical_host(&domain);

        let entry = self
            .entries
            .iter()
            .find(|entry| canonical_host(&entry.host_zone_name) == domain)?;
        let Some(rule) = entry.email_rule_for(&address) else {
            tracing::debug!(%address, zone = %entry.host_zone_name, "no alias matched");
            return None;
        };

        tracing::info!(
            %address,
            alias = %rule.alias,
            recipients = ?rule.recipients,
            "forward resolved"
        );

        Some(ForwardInstruction {
            address,
            sender: rule.from_sender.clone(),
            destinations: rule.recipients.clone(),
            subject_prefix: rule.subject_prefix.clone(),
        })
    }
}

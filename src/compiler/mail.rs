//! Mail rule compilation
//!
//! The mail runtime evaluates receipt rules first-match-wins, so the order
//! emitted here is load-bearing:
//!
//! ```text
//! [ forward(zones with aliases) ] -> bounce(zone 1) -> bounce(zone 2) -> ...
//! ```
//!
//! A zone that forwards is captured by the forwarding rule before its own
//! bounce rule is reached; every other zone only matches its bounce rule.

use std::fmt;

use serde::Serialize;

use crate::domain::entities::DomainMapEntry;
use crate::settings::MailConfig;

/// Which half of the table a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailRuleKind {
    Forward,
    Bounce,
}

impl fmt::Display for MailRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailRuleKind::Forward => f.write_str("forward"),
            MailRuleKind::Bounce => f.write_str("bounce"),
        }
    }
}

/// How the forwarder is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Fire-and-forget: acceptance completes once the message is stored and
    /// forwarder failures surface only on the forwarder's own channel.
    Event,
}

/// Canned bounce response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BounceTemplate {
    MailboxDoesNotExist,
}

/// One step of a receipt rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MailAction {
    /// Persist the raw message
    StoreRaw {
        #[serde(rename = "objectKeyPrefix")]
        object_key_prefix: String,
    },
    /// Hand the stored message to the forwarder
    InvokeForwarder { function: String, dispatch: DispatchMode },
    /// Reject with a canned response and notify
    Bounce {
        sender: String,
        template: BounceTemplate,
        topic: String,
    },
}

/// A receipt rule: recipients it matches and what happens on a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MailRule {
    pub kind: MailRuleKind,
    /// Domains (any address at the domain) or full addresses
    pub recipients: Vec<String>,
    pub scan_enabled: bool,
    pub actions: Vec<MailAction>,
}

impl MailRule {
    /// Store-then-forward rule for every forwarding domain
    pub fn forward(domains: Vec<String>, config: &MailConfig) -> Self {
        Self {
            kind: MailRuleKind::Forward,
            recipients: domains,
            scan_enabled: config.scan_enabled,
            actions: vec![
                MailAction::StoreRaw {
                    object_key_prefix: format!(
                        "{}/",
                        config.object_key_prefix.trim_end_matches('/')
                    ),
                },
                MailAction::InvokeForwarder {
                    function: config.forwarder.clone(),
                    dispatch: DispatchMode::Event,
                },
            ],
        }
    }

    /// Catch-all bounce rule for one zone
    pub fn bounce(zone_name: &str, sender: &str, config: &MailConfig) -> Self {
        Self {
            kind: MailRuleKind::Bounce,
            recipients: vec![zone_name.to_string()],
            scan_enabled: config.scan_enabled,
            actions: vec![MailAction::Bounce {
                sender: sender.to_string(),
                template: BounceTemplate::MailboxDoesNotExist,
                topic: config.bounce_topic.clone(),
            }],
        }
    }

    /// True if `recipient` is covered by this rule.
    ///
    /// Domain entries match any address at that domain; address entries
    /// match exactly. Comparison ignores ASCII case.
    pub fn matches(&self, recipient: &str) -> bool {
        let recipient = recipient.trim();
        let domain = recipient
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or(recipient);

        self.recipients.iter().any(|entry| {
            if entry.contains('@') {
                entry.eq_ignore_ascii_case(recipient)
            } else {
                entry.trim_end_matches('.').eq_ignore_ascii_case(domain.trim_end_matches('.'))
            }
        })
    }
}

/// Ordered receipt rules: forwarding rule (if any) first, then bounce rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(transparent)]
pub struct CompiledMailRuleSet {
    rules: Vec<MailRule>,
}

impl CompiledMailRuleSet {
    pub fn rules(&self) -> &[MailRule] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &MailRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The single forwarding rule, when any zone forwards
    pub fn forwarding_rule(&self) -> Option<&MailRule> {
        self.rules.iter().find(|r| r.kind == MailRuleKind::Forward)
    }

    pub fn bounce_rules(&self) -> impl Iterator<Item = &MailRule> {
        self.rules.iter().filter(|r| r.kind == MailRuleKind::Bounce)
    }
}

/// Compiles entries into the ordered receipt rule table
#[derive(Debug, Clone, Default)]
pub struct MailRuleCompiler {
    config: MailConfig,
}

impl MailRuleCompiler {
    pub fn new(config: &MailConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn compile(&self, entries: &[DomainMapEntry]) -> CompiledMailRuleSet {
        let forwarding_domains: Vec<String> = entries
            .iter()
            .filter(|entry| entry.forwards_mail())
            .map(|entry| entry.host_zone_name.clone())
            .collect();

        let mut rules = Vec::with_capacity(entries.len() + 1);
        if !forwarding_domains.is_empty() {
            tracing::debug!(domains = ?forwarding_domains, "forwarding rule");
            rules.push(MailRule::forward(forwarding_domains, &self.config));
        }

        for entry in entries {
            rules.push(MailRule::bounce(
                &entry.host_zone_name,
                &entry.bounce_email,
                &self.config,
            ));
        }

        CompiledMailRuleSet { rules }
    }
}

//! DomainMapEntry entity - one tenant zone of the domain map

use super::{EmailRule, RedirectRule};

/// A validated domain map entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMapEntry {
    /// Top-level document key (only used to point at the entry in messages)
    pub key: String,
    /// DNS zone name, e.g. `example.com`
    pub host_zone_name: String,
    /// Opaque hosted-zone identifier
    pub hosted_zone_id: String,
    /// Sender address for bounce replies
    pub bounce_email: String,
    /// Redirected hostnames, in declaration order
    pub redirects: Vec<RedirectRule>,
    /// Forwarded aliases, in declaration order
    pub emails: Vec<EmailRule>,
}

impl DomainMapEntry {
    /// True if any alias of this zone forwards mail
    pub fn forwards_mail(&self) -> bool {
        !self.emails.is_empty()
    }

    /// True if the zone serves at least one redirect
    pub fn has_redirects(&self) -> bool {
        !self.redirects.is_empty()
    }

    /// First email rule whose alias matches `address`
    pub fn email_rule_for(&self, address: &str) -> Option<&EmailRule> {
        self.emails.iter().find(|rule| rule.matches_address(address))
    }
}

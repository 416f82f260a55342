//! EmailRule entity - one forwarded alias of a zone

/// Forwarding rule for a single alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRule {
    /// Verified sender used when re-sending the message
    pub from_sender: String,
    /// Receiving alias: a full address, or a local part of the zone
    pub alias: String,
    /// Forward destinations (never empty)
    pub recipients: Vec<String>,
    /// Prepended to the original subject
    pub subject_prefix: String,
}

impl EmailRule {
    /// True if `address` (already stripped of display name) hits this alias.
    ///
    /// An alias containing `@` must match the whole address; otherwise only
    /// the local part is compared. Both comparisons ignore ASCII case.
    pub fn matches_address(&self, address: &str) -> bool {
        if self.alias.contains('@') {
            return self.alias.eq_ignore_ascii_case(address);
        }
        address
            .split_once('@')
            .map(|(local, _)| local.eq_ignore_ascii_case(&self.alias))
            .unwrap_or(false)
    }

    /// Recipients rendered for a `To:` header
    pub fn recipients_header(&self) -> String {
        self.recipients.join(", ")
    }
}

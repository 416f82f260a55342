//! Receipt rule evaluation

use crate::compiler::{CompiledMailRuleSet, MailRule};

/// First-match-wins evaluator over the compiled receipt rules
#[derive(Debug, Clone, Copy)]
pub struct MailRouter<'a> {
    rules: &'a CompiledMailRuleSet,
}

impl<'a> MailRouter<'a> {
    pub fn new(rules: &'a CompiledMailRuleSet) -> Self {
        Self { rules }
    }

    /// Rule that handles mail for `recipient`, or `None` if no zone claims it
    pub fn route(&self, recipient: &str) -> Option<&'a MailRule> {
        let rule = self.rules.iter().find(|rule| rule.matches(recipient));
        match rule {
            Some(rule) => tracing::debug!(recipient, kind = %rule.kind, "mail routed"),
            None => tracing::debug!(recipient, "no mail rule matched"),
        }
        rule
    }
}

//! RedirectRule entity - one redirected hostname of a zone
//!
//! Two historical shapes exist in domain maps:
//!
//! ```text
//! { "subDomain": "www" }                                        // relative
//! { "sourceDomain": "www.ex.com", "targetDomain": "ex.org" }    // absolute
//! ```
//!
//! Both normalize to the same [`DerivedHost`] before grouping.

use std::collections::BTreeMap;

use crate::domain::value_objects::{canonical_host, DerivedHost};

/// A redirect declared on a zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectRule {
    /// Label relative to the zone; `"."` is the apex
    Relative {
        sub_domain: String,
        target_domain: Option<String>,
        uri_map: BTreeMap<String, String>,
    },
    /// Fully qualified source hostname with an explicit target
    Absolute {
        source_domain: String,
        target_domain: String,
        uri_map: BTreeMap<String, String>,
    },
}

impl RedirectRule {
    /// Sentinel sub-domain for the zone apex
    pub const APEX: &'static str = ".";

    /// Relative rule without a target
    pub fn relative(sub_domain: impl Into<String>) -> Self {
        RedirectRule::Relative {
            sub_domain: sub_domain.into(),
            target_domain: None,
            uri_map: BTreeMap::new(),
        }
    }

    /// Absolute rule
    pub fn absolute(source_domain: impl Into<String>, target_domain: impl Into<String>) -> Self {
        RedirectRule::Absolute {
            source_domain: source_domain.into(),
            target_domain: target_domain.into(),
            uri_map: BTreeMap::new(),
        }
    }

    /// Where requests for this host should be sent, if declared
    pub fn target_domain(&self) -> Option<&str> {
        match self {
            RedirectRule::Relative { target_domain, .. } => target_domain.as_deref(),
            RedirectRule::Absolute { target_domain, .. } => Some(target_domain),
        }
    }

    /// Per-path overrides (`/old` -> `https://new/place`)
    pub fn uri_map(&self) -> &BTreeMap<String, String> {
        match self {
            RedirectRule::Relative { uri_map, .. } | RedirectRule::Absolute { uri_map, .. } => {
                uri_map
            }
        }
    }

    /// True when the rule addresses the zone apex
    pub fn is_apex(&self, zone_name: &str) -> bool {
        match self {
            RedirectRule::Relative { sub_domain, .. } => sub_domain == Self::APEX,
            RedirectRule::Absolute { source_domain, .. } => {
                canonical_host(source_domain) == canonical_host(zone_name)
            }
        }
    }

    /// True when the source hostname lies in (or is) the zone.
    ///
    /// Relative rules always do; absolute rules must end in `.<zone>`.
    pub fn is_within_zone(&self, zone_name: &str) -> bool {
        match self {
            RedirectRule::Relative { .. } => true,
            RedirectRule::Absolute { source_domain, .. } => {
                let source = canonical_host(source_domain);
                let zone = canonical_host(zone_name);
                source == zone || source.ends_with(&format!(".{}", zone))
            }
        }
    }

    /// Normalize against the zone into an alias label and hostname.
    ///
    /// Absolute sources must already be validated as lying under the zone;
    /// the label is the source with the `.<zone>` suffix removed.
    pub fn derive(&self, zone_name: &str) -> DerivedHost {
        if self.is_apex(zone_name) {
            return DerivedHost::apex(zone_name);
        }

        match self {
            RedirectRule::Relative { sub_domain, .. } => DerivedHost::under(sub_domain, zone_name),
            RedirectRule::Absolute { source_domain, .. } => {
                let hostname = source_domain.trim_end_matches('.');
                let suffix_len = zone_name.trim_end_matches('.').len() + 1;
                let label = hostname
                    .len()
                    .checked_sub(suffix_len)
                    .and_then(|end| hostname.get(..end))
                    .unwrap_or_default();
                DerivedHost {
                    label: label.to_string(),
                    hostname: hostname.to_string(),
                }
            }
        }
    }
}

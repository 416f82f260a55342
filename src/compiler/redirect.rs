//! Redirect rule compilation
//!
//! One [`CompiledRedirectGroup`] per entry: the hostnames served by the
//! entry's edge distribution, the alias-record labels that point at it, and
//! the certificate subject set covering all of them.
//!
//! A hostname declared twice in one entry (`www`, `WWW`, `www.<zone>`) is
//! served once: the first declaration wins and later ones are dropped from
//! every table.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::domain::entities::{DomainMapEntry, RedirectRule};
use crate::domain::value_objects::{canonical_host, DerivedHost, ResourceIdentifier};
use crate::settings::EdgeConfig;

/// Per-entry edge and certificate grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledRedirectGroup {
    /// Stable resource key, see [`ResourceIdentifier::from_zone`]
    pub identifier: ResourceIdentifier,
    pub zone_name: String,
    pub hosted_zone_id: String,
    /// Distinct derived hostnames in redirect order
    pub source_hostnames: Vec<String>,
    /// Alias-record names, positionally paired with `source_hostnames`
    pub alias_labels: Vec<String>,
    /// Zone first, then every other hostname once
    pub certificate_subject_domains: Vec<String>,
}

impl CompiledRedirectGroup {
    /// Groups without hostnames get no distribution and no certificate
    pub fn is_routable(&self) -> bool {
        !self.source_hostnames.is_empty()
    }

    /// `(label, hostname)` pairs, one alias record each
    pub fn alias_records(&self) -> impl Iterator<Item = (&str, &str)> {
        self.alias_labels
            .iter()
            .map(String::as_str)
            .zip(self.source_hostnames.iter().map(String::as_str))
    }

    /// Certificate names beyond the primary (zone) name
    pub fn subject_alternative_names(&self) -> &[String] {
        self.certificate_subject_domains
            .get(1..)
            .unwrap_or_default()
    }
}

/// A hostname served at the edge and where it redirects to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRoute {
    pub hostname: String,
    /// Group (distribution) that serves this hostname
    pub identifier: ResourceIdentifier,
    /// Redirect target; `None` when neither the rule nor the settings give one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub uri_map: BTreeMap<String, String>,
}

/// Compiles entries into redirect groups and edge routes
#[derive(Debug, Clone, Default)]
pub struct RedirectRuleCompiler {
    default_location: Option<String>,
}

impl RedirectRuleCompiler {
    pub fn new(edge: &EdgeConfig) -> Self {
        Self {
            default_location: edge.default_location.clone(),
        }
    }

    /// Group an entry's redirects for certificate and alias provisioning
    pub fn compile(&self, entry: &DomainMapEntry) -> CompiledRedirectGroup {
        let zone = entry.host_zone_name.as_str();
        let identifier = ResourceIdentifier::from_zone(zone);

        tracing::debug!(zone, %identifier, "compiling redirects");

        let mut source_hostnames = Vec::with_capacity(entry.redirects.len());
        let mut alias_labels = Vec::with_capacity(entry.redirects.len());
        for (_, host) in distinct_hosts(entry) {
            alias_labels.push(host.label);
            source_hostnames.push(host.hostname);
        }

        let certificate_subject_domains = if entry.has_redirects() {
            certificate_domains(zone, &source_hostnames)
        } else {
            Vec::new()
        };

        CompiledRedirectGroup {
            identifier,
            zone_name: zone.to_string(),
            hosted_zone_id: entry.hosted_zone_id.clone(),
            source_hostnames,
            alias_labels,
            certificate_subject_domains,
        }
    }

    /// One edge route per distinct hostname, in redirect order
    pub fn edge_routes(&self, entry: &DomainMapEntry) -> Vec<EdgeRoute> {
        let identifier = ResourceIdentifier::from_zone(&entry.host_zone_name);

        distinct_hosts(entry)
            .into_iter()
            .map(|(rule, host)| EdgeRoute {
                hostname: host.hostname,
                identifier: identifier.clone(),
                location: rule
                    .target_domain()
                    .map(str::to_string)
                    .or_else(|| self.default_location.clone()),
                uri_map: rule.uri_map().clone(),
            })
            .collect()
    }
}

/// Each redirect with its derived host, skipping hostnames already seen
fn distinct_hosts(entry: &DomainMapEntry) -> Vec<(&RedirectRule, DerivedHost)> {
    let zone = entry.host_zone_name.as_str();
    let mut seen = HashSet::new();
    let mut hosts = Vec::with_capacity(entry.redirects.len());
    for rule in &entry.redirects {
        let host = rule.derive(zone);
        if seen.insert(canonical_host(&host.hostname)) {
            hosts.push((rule, host));
        } else {
            tracing::debug!(zone, hostname = %host.hostname, "repeated redirect hostname dropped");
        }
    }
    hosts
}

/// Zone first, then each hostname not already present (case-insensitive)
fn certificate_domains(zone: &str, hostnames: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut domains = Vec::with_capacity(hostnames.len() + 1);

    seen.insert(canonical_host(zone));
    domains.push(zone.to_string());

    for hostname in hostnames {
        if seen.insert(canonical_host(hostname)) {
            domains.push(hostname.clone());
        }
    }
    domains
}

//! Derived hostname value object

use serde::Serialize;

/// A redirect source normalized against its zone.
///
/// `label` is the alias-record name relative to the zone (empty for the
/// apex); `hostname` is the fully qualified name served at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedHost {
    pub label: String,
    pub hostname: String,
}

impl DerivedHost {
    /// The zone apex: empty label, hostname equal to the zone
    pub fn apex(zone_name: &str) -> Self {
        Self {
            label: String::new(),
            hostname: zone_name.to_string(),
        }
    }

    /// A labelled host under the zone
    pub fn under(label: &str, zone_name: &str) -> Self {
        Self {
            label: label.to_string(),
            hostname: format!("{}.{}", label, zone_name),
        }
    }

    pub fn is_apex(&self) -> bool {
        self.label.is_empty()
    }
}

/// Case-folded hostname without a trailing root dot
pub fn canonical_host(host: &str) -> String {
    host.trim_end_matches('.').to_ascii_lowercase()
}

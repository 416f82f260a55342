//! Resource identifier value object
//!
//! Stable, alphanumeric key derived from a zone name. Provisioning
//! collaborators prefix every per-zone resource (distribution, certificate,
//! alias records) with it.

use std::fmt;

use serde::Serialize;

/// Sanitized zone name, e.g. `example.com` -> `examplecom`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceIdentifier(String);

impl ResourceIdentifier {
    /// Drop every character that is not an ASCII letter or digit.
    ///
    /// Case is kept; characters are removed, never replaced.
    pub fn from_zone(zone_name: &str) -> Self {
        Self(
            zone_name
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Configuration warning value object.

use std::fmt;

/// Non-fatal warning raised while reading a domain map or settings file
/// (e.g. an unknown key that is probably a typo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Where the key was found (`<entry key>` or `<entry key>.redirects.0`)
    pub location: String,
    /// The unknown key
    pub key: String,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.location)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

//! Domain Value Objects
//!
//! Immutable value types derived from the domain map.

mod config_warning;
mod fingerprint;
mod hostname;
mod identifier;

pub use config_warning::ConfigWarning;
pub use fingerprint::PlanFingerprint;
pub use hostname::{canonical_host, DerivedHost};
pub use identifier::ResourceIdentifier;

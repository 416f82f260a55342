//! Domain Layer
//!
//! Typed domain map records and the value objects derived from them.
//! Nothing in here touches the file system.
//!
//! ## Structure
//!
//! - `entities/` - Validated records (`DomainMapEntry`, `RedirectRule`, `EmailRule`)
//! - `value_objects/` - Immutable derived values (identifier, hostname, fingerprint)

pub mod entities;
pub mod value_objects;

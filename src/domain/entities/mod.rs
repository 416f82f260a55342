//! Domain Entities
//!
//! Records produced by validation. They are built once per compilation and
//! never mutated afterwards.
//! - `DomainMapEntry` - A zone with its redirects and forwarded aliases
//! - `RedirectRule` - A redirected hostname (relative or absolute form)
//! - `EmailRule` - A forwarded alias

mod domain_map;
mod email;
mod redirect;

pub use domain_map::DomainMapEntry;
pub use email::EmailRule;
pub use redirect::RedirectRule;

//! domain-companion - multi-tenant domain map compiler
//!
//! Turns one declarative domain map (zones, their redirected hostnames and
//! their forwarded mail aliases) into the tables an edge network and a mail
//! receipt service need: per-zone redirect groups with certificate subject
//! sets, per-hostname edge routes, and an ordered forward-then-bounce mail
//! rule table.
//!
//! ```
//! use domain_companion::{ConfigSource, DomainMapCompiler};
//!
//! let plan = DomainMapCompiler::default()
//!     .compile_source(&ConfigSource::json(
//!         r#"{"site": {"hostZoneName": "ex.com", "hostedZoneId": "Z1",
//!             "redirects": [{"subDomain": "www"}],
//!             "bounceEmail": "bounce@ex.com", "emails": []}}"#,
//!     ))
//!     .unwrap();
//! assert_eq!(plan.redirect_groups[0].source_hostnames, vec!["www.ex.com"]);
//! ```

pub mod compiler;
pub mod differ;
pub mod domain;
pub mod error;
pub mod loader;
pub mod routing;
pub mod settings;
pub mod suggest;
pub mod validator;

// Re-exports for convenience
pub use compiler::{
    CompiledDomainMap, CompiledMailRuleSet, CompiledRedirectGroup, DomainMapCompiler, EdgeRoute,
    MailAction, MailRule, MailRuleKind,
};
pub use differ::{diff_plans, PlanDiff};
pub use domain::entities::{DomainMapEntry, EmailRule, RedirectRule};
pub use domain::value_objects::{ConfigWarning, PlanFingerprint, ResourceIdentifier};
pub use error::{CompanionError, CompanionResult};
pub use loader::{ConfigSource, DocumentFormat, RawDocument};
pub use routing::{EdgeRouter, ForwardInstruction, ForwardingTable, MailRouter, RedirectDecision};
pub use settings::CompilerSettings;
pub use validator::DomainMapValidator;

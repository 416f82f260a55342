//! Domain map compiler
//!
//! # Data Flow
//! ```text
//! ConfigSource
//!     → loader (untyped document, key order preserved)
//!     → validator (typed entries, fail-fast)
//!     → redirect compiler (groups + edge routes, per entry)
//!     → mail compiler (forward rule, then bounce rules)
//!     → uniqueness checks (zones, identifiers, hostnames)
//!     → CompiledDomainMap (read-only, handed to provisioning)
//! ```
//!
//! Compilation is pure: the same document and settings always produce the
//! same plan, byte for byte.

mod mail;
mod redirect;

pub use mail::{
    BounceTemplate, CompiledMailRuleSet, DispatchMode, MailAction, MailRule, MailRuleCompiler,
    MailRuleKind,
};
pub use redirect::{CompiledRedirectGroup, EdgeRoute, RedirectRuleCompiler};

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::DomainMapEntry;
use crate::domain::value_objects::{canonical_host, ConfigWarning, PlanFingerprint};
use crate::error::{CompanionError, CompanionResult};
use crate::loader::{self, ConfigSource, RawDocument};
use crate::settings::{CompilerSettings, EnvironmentConfig};
use crate::validator::DomainMapValidator;

/// Everything provisioning needs, derived from one domain map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledDomainMap {
    /// Routable groups only (entries with at least one redirect)
    pub redirect_groups: Vec<CompiledRedirectGroup>,
    pub edge_routes: Vec<EdgeRoute>,
    pub mail_rules: CompiledMailRuleSet,
    /// Copied from settings, never interpreted
    pub environment: EnvironmentConfig,
    pub fingerprint: PlanFingerprint,
    /// Validated entries the tables were built from
    #[serde(skip)]
    pub entries: Vec<DomainMapEntry>,
}

impl CompiledDomainMap {
    /// Canonical pretty JSON rendering (what `compile` writes to disk)
    pub fn to_json_pretty(&self) -> String {
        let mut rendered = serde_json::to_string_pretty(self)
            .expect("plan tables have string keys and serialize to JSON");
        rendered.push('\n');
        rendered
    }

    /// Group that serves `identifier`
    pub fn group(&self, identifier: &str) -> Option<&CompiledRedirectGroup> {
        self.redirect_groups
            .iter()
            .find(|g| g.identifier.as_str() == identifier)
    }
}

/// Fingerprinted portion of the plan
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanBody<'a> {
    redirect_groups: &'a [CompiledRedirectGroup],
    edge_routes: &'a [EdgeRoute],
    mail_rules: &'a CompiledMailRuleSet,
    environment: &'a EnvironmentConfig,
}

/// Orchestrates validation and both rule compilers
#[derive(Debug, Clone, Default)]
pub struct DomainMapCompiler {
    settings: CompilerSettings,
    validator: DomainMapValidator,
}

impl DomainMapCompiler {
    pub fn new(settings: CompilerSettings) -> Self {
        Self {
            settings,
            validator: DomainMapValidator::new(),
        }
    }

    pub fn settings(&self) -> &CompilerSettings {
        &self.settings
    }

    /// Load and compile in one step
    pub fn compile_source(&self, source: &ConfigSource) -> CompanionResult<CompiledDomainMap> {
        let document = loader::load(source)?;
        self.compile(&document)
    }

    /// Validate and compile a loaded document
    pub fn compile(&self, document: &RawDocument) -> CompanionResult<CompiledDomainMap> {
        self.compile_with_warnings(document).map(|(plan, _)| plan)
    }

    /// Validate and compile, also returning validation warnings
    pub fn compile_with_warnings(
        &self,
        document: &RawDocument,
    ) -> CompanionResult<(CompiledDomainMap, Vec<ConfigWarning>)> {
        let (entries, warnings) = self.validator.validate_with_warnings(document)?;
        let plan = self.compile_entries(entries)?;
        Ok((plan, warnings))
    }

    /// Compile already-validated entries
    pub fn compile_entries(
        &self,
        entries: Vec<DomainMapEntry>,
    ) -> CompanionResult<CompiledDomainMap> {
        let redirect_compiler = RedirectRuleCompiler::new(&self.settings.edge);
        let mail_compiler = MailRuleCompiler::new(&self.settings.mail);

        check_unique_zones(&entries)?;

        let groups: Vec<CompiledRedirectGroup> =
            entries.iter().map(|e| redirect_compiler.compile(e)).collect();
        check_unique_identifiers(&groups)?;
        check_unique_hostnames(&groups)?;

        let redirect_groups: Vec<CompiledRedirectGroup> =
            groups.into_iter().filter(|g| g.is_routable()).collect();
        let edge_routes: Vec<EdgeRoute> = entries
            .iter()
            .flat_map(|e| redirect_compiler.edge_routes(e))
            .collect();
        let mail_rules = mail_compiler.compile(&entries);
        let environment = self.settings.environment.clone();

        let body = PlanBody {
            redirect_groups: &redirect_groups,
            edge_routes: &edge_routes,
            mail_rules: &mail_rules,
            environment: &environment,
        };
        let canonical = serde_json::to_string(&body)
            .expect("plan tables have string keys and serialize to JSON");
        let fingerprint = PlanFingerprint::from_content(&canonical);

        tracing::info!(
            entries = entries.len(),
            redirect_groups = redirect_groups.len(),
            edge_routes = edge_routes.len(),
            mail_rules = mail_rules.len(),
            %fingerprint,
            "domain map compiled"
        );

        Ok(CompiledDomainMap {
            redirect_groups,
            edge_routes,
            mail_rules,
            environment,
            fingerprint,
            entries,
        })
    }
}

/// Two entries may not declare the same zone (case-insensitive)
fn check_unique_zones(entries: &[DomainMapEntry]) -> CompanionResult<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for entry in entries {
        if let Some(first) = seen.insert(canonical_host(&entry.host_zone_name), &entry.key) {
            return Err(CompanionError::DuplicateZone {
                zone: entry.host_zone_name.clone(),
                first: first.to_string(),
                second: entry.key.clone(),
            });
        }
    }
    Ok(())
}

/// Resource identifiers must stay unique after sanitization
fn check_unique_identifiers(groups: &[CompiledRedirectGroup]) -> CompanionResult<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for group in groups {
        if let Some(first) = seen.insert(group.identifier.as_str(), &group.zone_name) {
            return Err(CompanionError::IdentifierCollision {
                identifier: group.identifier.to_string(),
                first: first.to_string(),
                second: group.zone_name.clone(),
            });
        }
    }
    Ok(())
}

/// A hostname belongs to at most one zone's redirect group.
///
/// Groups already hold each hostname once, so any repeat here crosses zones.
fn check_unique_hostnames(groups: &[CompiledRedirectGroup]) -> CompanionResult<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for group in groups {
        for hostname in &group.source_hostnames {
            if let Some(first) = seen.insert(canonical_host(hostname), &group.zone_name) {
                return Err(CompanionError::HostnameConflict {
                    hostname: hostname.clone(),
                    first: first.to_string(),
                    second: group.zone_name.clone(),
                });
            }
        }
    }
    Ok(())
}

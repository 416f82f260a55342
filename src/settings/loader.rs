//! Settings loading and environment overrides

use std::fs;
use std::path::Path;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{CompanionError, CompanionResult};
use crate::suggest::suggest_key;

use super::types::CompilerSettings;

const SETTINGS_KEYS: &[&str] = &[
    "environment",
    "account",
    "region",
    "recipient_domains",
    "bounce_domains",
    "mail",
    "object_key_prefix",
    "forwarder",
    "bounce_topic",
    "scan_enabled",
    "edge",
    "default_location",
    "status",
    "preserve_path",
];

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CompanionResult<(CompilerSettings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: CompilerSettings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CompanionError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    settings.validate(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                location: path.display().to_string(),
                suggestion: suggest_key(&key, SETTINGS_KEYS),
                key,
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load from an explicit file, or fall back to defaults when it does not exist
pub fn load_or_default(
    path: Option<&Path>,
) -> CompanionResult<(CompilerSettings, Vec<ConfigWarning>)> {
    match path {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading settings");
            load_with_warnings(path)
        }
        _ => Ok((CompilerSettings::default(), Vec::new())),
    }
}

/// Apply overrides from the process environment
pub fn with_env_overrides(settings: CompilerSettings) -> CompilerSettings {
    with_overrides_from(settings, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup.
///
/// `COMPANION_*` names win over the legacy `RECIPIENT_DOMAIN_LIST` /
/// `BOUNCE_DOMAIN_LIST` names.
pub fn with_overrides_from<F>(mut settings: CompilerSettings, lookup: F) -> CompilerSettings
where
    F: Fn(&str) -> Option<String>,
{
    let first = |names: &[&str]| names.iter().find_map(|name| lookup(*name));

    if let Some(account) = first(&["COMPANION_ACCOUNT"]) {
        settings.environment.account = Some(account);
    }
    if let Some(region) = first(&["COMPANION_REGION"]) {
        settings.environment.region = Some(region);
    }
    if let Some(list) = first(&["COMPANION_RECIPIENT_DOMAINS", "RECIPIENT_DOMAIN_LIST"]) {
        settings.environment.recipient_domains = split_list(&list);
    }
    if let Some(list) = first(&["COMPANION_BOUNCE_DOMAINS", "BOUNCE_DOMAIN_LIST"]) {
        settings.environment.bounce_domains = split_list(&list);
    }
    if let Some(location) = first(&["COMPANION_DEFAULT_REDIRECT"]) {
        if !location.trim().is_empty() {
            settings.edge.default_location = Some(location);
        }
    }

    settings
}

/// Comma-separated list, blanks dropped
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

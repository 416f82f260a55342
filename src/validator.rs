//! Domain map validation
//!
//! Turns the untyped [`RawDocument`] into typed [`DomainMapEntry`] records.
//! Validation is fail-fast: the first structural violation aborts the run and
//! nothing is compiled.
//!
//! Checks per entry, in order:
//! 1. `hostZoneName` (a DNS name), `hostedZoneId`, `redirects` -> `InvalidDomainMap`
//! 2. every redirect carries well-formed domain fields -> `InvalidRedirect`
//! 3. `bounceEmail`, `emails` -> `InvalidEmailConfig`
//! 4. every email rule carries all four fields -> `InvalidEmailRule`

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::entities::{DomainMapEntry, EmailRule, RedirectRule};
use crate::domain::value_objects::{ConfigWarning, ResourceIdentifier};
use crate::error::{CompanionError, CompanionResult};
use crate::loader::{value_kind, RawDocument};
use crate::suggest::suggest_key;

const ENTRY_KEYS: &[&str] = &[
    "hostZoneName",
    "hostedZoneId",
    "redirects",
    "bounceEmail",
    "emails",
];
const REDIRECT_KEYS: &[&str] = &["subDomain", "sourceDomain", "targetDomain", "uriMap"];
const EMAIL_KEYS: &[&str] = &["fromSender", "alias", "recipients", "subjectPrefix"];

/// Schema validator for domain map documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainMapValidator;

impl DomainMapValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate every entry, in document order
    pub fn validate(&self, document: &RawDocument) -> CompanionResult<Vec<DomainMapEntry>> {
        self.validate_with_warnings(document)
            .map(|(entries, _)| entries)
    }

    /// Validate and collect non-fatal warnings (unknown keys)
    pub fn validate_with_warnings(
        &self,
        document: &RawDocument,
    ) -> CompanionResult<(Vec<DomainMapEntry>, Vec<ConfigWarning>)> {
        let mut entries = Vec::with_capacity(document.len());
        let mut warnings = Vec::new();

        for (key, value) in document.entries() {
            let entry = validate_entry(key, value, &mut warnings)?;
            tracing::debug!(
                key,
                zone = %entry.host_zone_name,
                redirects = entry.redirects.len(),
                emails = entry.emails.len(),
                "entry validated"
            );
            entries.push(entry);
        }

        for warning in &warnings {
            tracing::debug!(%warning, "domain map warning");
        }

        Ok((entries, warnings))
    }
}

fn validate_entry(
    key: &str,
    value: &Value,
    warnings: &mut Vec<ConfigWarning>,
) -> CompanionResult<DomainMapEntry> {
    let invalid_map = |reason: String| CompanionError::InvalidDomainMap {
        key: key.to_string(),
        reason,
    };

    let obj = value
        .as_object()
        .ok_or_else(|| invalid_map(format!("expected an object, found {}", value_kind(value))))?;

    let host_zone_name = required_str(obj, "hostZoneName", false).map_err(invalid_map)?;
    if !is_dns_name(&host_zone_name)
        || ResourceIdentifier::from_zone(&host_zone_name).is_empty()
    {
        return Err(invalid_map(format!(
            "'hostZoneName' must be a DNS name, found '{}'",
            host_zone_name
        )));
    }
    let hosted_zone_id = required_str(obj, "hostedZoneId", false).map_err(invalid_map)?;
    let raw_redirects = required_list(obj, "redirects").map_err(invalid_map)?;

    let mut redirects = Vec::with_capacity(raw_redirects.len());
    for (index, raw) in raw_redirects.iter().enumerate() {
        let location = format!("{}.redirects.{}", key, index);
        let rule = validate_redirect(raw, &host_zone_name, &location, warnings).map_err(
            |reason| CompanionError::InvalidRedirect {
                key: key.to_string(),
                index,
                reason,
            },
        )?;
        redirects.push(rule);
    }

    let invalid_email = |reason: String| CompanionError::InvalidEmailConfig {
        key: key.to_string(),
        reason,
    };
    let bounce_email = required_str(obj, "bounceEmail", false).map_err(invalid_email)?;
    let raw_emails = required_list(obj, "emails").map_err(invalid_email)?;

    let mut emails = Vec::with_capacity(raw_emails.len());
    for (index, raw) in raw_emails.iter().enumerate() {
        let location = format!("{}.emails.{}", key, index);
        let rule = validate_email(raw, &location, warnings).map_err(|reason| {
            CompanionError::InvalidEmailRule {
                key: key.to_string(),
                index,
                reason,
            }
        })?;
        emails.push(rule);
    }

    collect_unknown_keys(obj, ENTRY_KEYS, key, warnings);

    Ok(DomainMapEntry {
        key: key.to_string(),
        host_zone_name,
        hosted_zone_id,
        bounce_email,
        redirects,
        emails,
    })
}

fn validate_redirect(
    value: &Value,
    zone_name: &str,
    location: &str,
    warnings: &mut Vec<ConfigWarning>,
) -> Result<RedirectRule, String> {
    let obj = value
        .as_object()
        .ok_or_else(|| format!("expected an object, found {}", value_kind(value)))?;

    let uri_map = optional_uri_map(obj)?;

    let rule = if obj.contains_key("subDomain") {
        if obj.contains_key("sourceDomain") {
            return Err("'subDomain' and 'sourceDomain' are mutually exclusive".to_string());
        }
        let sub_domain = required_str(obj, "subDomain", false)?;
        if sub_domain != RedirectRule::APEX && sub_domain.split('.').any(str::is_empty) {
            return Err(format!(
                "'subDomain' must be a label or '{}', found '{}'",
                RedirectRule::APEX,
                sub_domain
            ));
        }
        let target_domain = match obj.get("targetDomain") {
            None | Some(Value::Null) => None,
            Some(_) => Some(required_str(obj, "targetDomain", false)?),
        };
        RedirectRule::Relative {
            sub_domain,
            target_domain,
            uri_map,
        }
    } else if obj.contains_key("sourceDomain") || obj.contains_key("targetDomain") {
        let source_domain = required_str(obj, "sourceDomain", false)?;
        let target_domain = required_str(obj, "targetDomain", false)?;
        if !is_dns_name(&source_domain) {
            return Err(format!(
                "'sourceDomain' must be a hostname, found '{}'",
                source_domain
            ));
        }
        let outside_zone = format!(
            "source domain '{}' is outside zone '{}'",
            source_domain, zone_name
        );
        let rule = RedirectRule::Absolute {
            source_domain,
            target_domain,
            uri_map,
        };
        if !rule.is_within_zone(zone_name) {
            return Err(outside_zone);
        }
        rule
    } else {
        return Err("missing 'subDomain' (or 'sourceDomain' and 'targetDomain')".to_string());
    };

    collect_unknown_keys(obj, REDIRECT_KEYS, location, warnings);
    Ok(rule)
}

fn validate_email(
    value: &Value,
    location: &str,
    warnings: &mut Vec<ConfigWarning>,
) -> Result<EmailRule, String> {
    let obj = value
        .as_object()
        .ok_or_else(|| format!("expected an object, found {}", value_kind(value)))?;

    let from_sender = required_str(obj, "fromSender", false)?;
    let alias = required_str(obj, "alias", false)?;
    let recipients = required_list(obj, "recipients")?
        .iter()
        .map(|r| {
            r.as_str()
                .map(str::to_string)
                .ok_or_else(|| {
                    format!("'recipients' must contain strings, found {}", value_kind(r))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if recipients.is_empty() {
        return Err("'recipients' must not be empty".to_string());
    }
    let subject_prefix = required_str(obj, "subjectPrefix", true)?;

    collect_unknown_keys(obj, EMAIL_KEYS, location, warnings);

    Ok(EmailRule {
        from_sender,
        alias,
        recipients,
        subject_prefix,
    })
}

/// Required string field; `null` counts as absent
/// Dot-separated non-empty labels, one optional root dot
fn is_dns_name(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    !name.is_empty() && name.split('.').all(|label| !label.is_empty())
}

fn required_str(
    obj: &Map<String, Value>,
    field: &str,
    allow_empty: bool,
) -> Result<String, String> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(format!("missing '{}'", field)),
        Some(Value::String(s)) if !allow_empty && s.trim().is_empty() => {
            Err(format!("'{}' must not be empty", field))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!(
            "'{}' must be a string, found {}",
            field,
            value_kind(other)
        )),
    }
}

/// Required list field; `null` counts as absent
fn required_list<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Vec<Value>, String> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(format!("missing '{}'", field)),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(format!("'{}' must be a list, found {}", field, value_kind(other))),
    }
}

fn optional_uri_map(obj: &Map<String, Value>) -> Result<BTreeMap<String, String>, String> {
    match obj.get("uriMap") {
        None | Some(Value::Null) => Ok(BTreeMap::new()),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(path, target)| {
                target
                    .as_str()
                    .map(|t| (path.clone(), t.to_string()))
                    .ok_or_else(|| format!("'uriMap.{}' must be a string", path))
            })
            .collect(),
        Some(other) => Err(format!(
            "'uriMap' must be an object, found {}",
            value_kind(other)
        )),
    }
}

fn collect_unknown_keys(
    obj: &Map<String, Value>,
    known: &[&str],
    location: &str,
    warnings: &mut Vec<ConfigWarning>,
) {
    for key in obj.keys() {
        if !known.contains(&key.as_str()) {
            warnings.push(ConfigWarning {
                location: location.to_string(),
                key: key.clone(),
                suggestion: suggest_key(key, known),
            });
        }
    }
}

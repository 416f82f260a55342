use std::path::Path;

use anyhow::Result;
use domain_companion::{ConfigSource, DomainMapCompiler, MailRuleKind};

use crate::output::{emit, emit_event, StartEvent};

pub fn cmd_check(source: &Path, settings_path: Option<&Path>, json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("check", source))?;
    } else {
        println!("Domain Companion Check");
        println!("Source: {}", source.display());
    }

    let (settings, settings_warnings) = super::resolve_settings(settings_path, source)?;
    let compiler = DomainMapCompiler::new(settings);
    let document = domain_companion::loader::load(&ConfigSource::from(source))?;
    let (plan, warnings) = compiler.compile_with_warnings(&document)?;

    super::report_warnings(&settings_warnings, json)?;
    super::report_warnings(&warnings, json)?;
    let warning_count = settings_warnings.len() + warnings.len();

    if json {
        for entry in &plan.entries {
            emit(serde_json::json!({
                "event": "entry",
                "key": entry.key,
                "zone": entry.host_zone_name,
                "redirects": entry.redirects.len(),
                "aliases": entry.emails.len(),
            }))?;
        }
        emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "success": true,
            "entries": plan.entries.len(),
            "redirectGroups": plan.redirect_groups.len(),
            "mailRules": plan.mail_rules.len(),
            "warnings": warning_count,
            "fingerprint": plan.fingerprint.as_str(),
        }))?;
        return Ok(());
    }

    println!("\n✓ {} entries valid", plan.entries.len());
    for group in &plan.redirect_groups {
        println!(
            "  {} [{}] {} hostnames, certificate covers {}",
            group.zone_name,
            group.identifier,
            group.source_hostnames.len(),
            group.certificate_subject_domains.join(", ")
        );
    }

    let forwarding = plan
        .mail_rules
        .forwarding_rule()
        .map(|rule| rule.recipients.join(", "))
        .unwrap_or_else(|| "none".to_string());
    let bounces = plan
        .mail_rules
        .iter()
        .filter(|rule| rule.kind == MailRuleKind::Bounce)
        .count();
    println!("  Mail: forwarding {}; {} bounce rules", forwarding, bounces);

    if warning_count > 0 {
        println!("\n{} warning(s)", warning_count);
    }
    println!("Fingerprint: {}", plan.fingerprint);

    Ok(())
}

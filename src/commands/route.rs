use std::path::Path;

use anyhow::Result;
use domain_companion::{ConfigSource, DomainMapCompiler, EdgeRouter, ForwardingTable, MailRouter};

use crate::output::{emit, emit_event, StartEvent};

pub fn cmd_route(
    source: &Path,
    host: Option<&str>,
    path: &str,
    recipient: Option<&str>,
    settings_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("route", source))?;
    }

    let (settings, _) = super::resolve_settings(settings_path, source)?;
    let compiler = DomainMapCompiler::new(settings);
    let plan = compiler.compile_source(&ConfigSource::from(source))?;

    if let Some(host) = host {
        let decision = EdgeRouter::new(&plan, &compiler.settings().edge).resolve(host, path);
        if json {
            emit(serde_json::json!({
                "event": "edge",
                "host": host,
                "path": path,
                "decision": decision,
            }))?;
        } else {
            match decision {
                Some(d) => println!(
                    "{}{} → {} ({} {})",
                    host,
                    path,
                    d.location,
                    d.status,
                    d.status_description()
                ),
                None => println!("{}{} → no route", host, path),
            }
        }
    }

    if let Some(recipient) = recipient {
        let rule = MailRouter::new(&plan.mail_rules).route(recipient);
        let forward = ForwardingTable::new(&plan.entries).resolve(recipient);
        if json {
            emit(serde_json::json!({
                "event": "mail",
                "recipient": recipient,
                "rule": rule,
                "forward": forward,
            }))?;
        } else {
            match rule {
                Some(rule) => println!(
                    "{} → {} rule [{}]",
                    recipient,
                    rule.kind,
                    rule.recipients.join(", ")
                ),
                None => println!("{} → no mail rule", recipient),
            }
            if let Some(forward) = forward {
                println!(
                    "  forwards to {} as {} (subject prefix {:?})",
                    forward.to_header(),
                    forward.sender,
                    forward.subject_prefix
                );
            }
        }
    }

    Ok(())
}

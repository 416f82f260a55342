use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use domain_companion::{ConfigSource, DomainMapCompiler};

use crate::output::{emit, emit_event, StartEvent};

pub fn cmd_compile(
    source: &Path,
    output: Option<&Path>,
    settings_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("compile", source))?;
    }

    let (settings, settings_warnings) = super::resolve_settings(settings_path, source)?;
    let compiler = DomainMapCompiler::new(settings);
    let document = domain_companion::loader::load(&ConfigSource::from(source))?;
    let (plan, warnings) = compiler.compile_with_warnings(&document)?;

    super::report_warnings(&settings_warnings, json)?;
    super::report_warnings(&warnings, json)?;

    let rendered = plan.to_json_pretty();

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write plan to {}", path.display()))?;
            if json {
                emit(serde_json::json!({
                    "event": "complete",
                    "command": "compile",
                    "output": path.display().to_string(),
                    "fingerprint": plan.fingerprint.as_str(),
                    "redirectGroups": plan.redirect_groups.len(),
                    "edgeRoutes": plan.edge_routes.len(),
                    "mailRules": plan.mail_rules.len(),
                }))?;
            } else {
                println!(
                    "✓ Compiled {} redirect groups, {} edge routes, {} mail rules",
                    plan.redirect_groups.len(),
                    plan.edge_routes.len(),
                    plan.mail_rules.len()
                );
                println!("  Plan: {} ({})", path.display(), plan.fingerprint);
            }
        }
        None if json => {
            emit(serde_json::json!({
                "event": "complete",
                "command": "compile",
                "plan": serde_json::to_value(&plan)?,
            }))?;
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

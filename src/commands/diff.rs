use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use domain_companion::{diff_plans, ConfigSource, DomainMapCompiler};

use crate::output::{emit, emit_event, StartEvent};

pub fn cmd_diff(
    source: &Path,
    plan_path: &Path,
    settings_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("diff", source))?;
    }

    let previous = fs::read_to_string(plan_path)
        .with_context(|| format!("failed to read plan {}", plan_path.display()))?;

    let (settings, _) = super::resolve_settings(settings_path, source)?;
    let plan = DomainMapCompiler::new(settings).compile_source(&ConfigSource::from(source))?;
    let diff = diff_plans(&previous, &plan);

    if json {
        emit(serde_json::json!({
            "event": "complete",
            "command": "diff",
            "changed": diff.has_changes(),
            "additions": diff.additions,
            "deletions": diff.deletions,
            "previousFingerprint": diff.previous_fingerprint,
            "currentFingerprint": diff.current_fingerprint,
            "lines": diff.changed_lines().collect::<Vec<_>>(),
        }))?;
        return Ok(());
    }

    if !diff.has_changes() {
        println!("No changes ({})", diff.current_fingerprint);
        return Ok(());
    }

    print!("{}", diff.render());
    println!("\n{} lines changed ({})", diff.additions + diff.deletions, diff.summary());
    Ok(())
}

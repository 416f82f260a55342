//! Command implementations

mod check;
mod compile;
mod diff;
mod route;

pub use check::cmd_check;
pub use compile::cmd_compile;
pub use diff::cmd_diff;
pub use route::cmd_route;

use std::path::Path;

use anyhow::{bail, Result};
use domain_companion::settings::{self, DEFAULT_SETTINGS_FILE};
use domain_companion::{CompilerSettings, ConfigWarning};

/// Settings for a run: explicit file, else `companion.toml` beside the
/// domain map, else defaults; environment overrides applied last.
pub fn resolve_settings(
    explicit: Option<&Path>,
    source: &Path,
) -> Result<(CompilerSettings, Vec<ConfigWarning>)> {
    let (resolved, warnings) = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("settings file not found: {}", path.display());
            }
            settings::load_with_warnings(path)?
        }
        None => {
            let candidate = source
                .parent()
                .map(|dir| dir.join(DEFAULT_SETTINGS_FILE));
            settings::load_or_default(candidate.as_deref())?
        }
    };
    Ok((settings::with_env_overrides(resolved), warnings))
}

/// Print warnings for humans (stderr) or as events (stdout)
pub fn report_warnings(warnings: &[ConfigWarning], json: bool) -> Result<()> {
    for warning in warnings {
        if json {
            crate::output::emit_event(&crate::output::WarningEvent::from(warning))?;
        } else {
            eprintln!("⚠ {}", warning);
        }
    }
    Ok(())
}

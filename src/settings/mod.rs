//! Compiler settings
//!
//! Everything the compiler needs besides the domain map itself, passed in as
//! an explicit [`CompilerSettings`] value. Resolution order, highest first:
//! 1. Environment variables (`COMPANION_*`, legacy `*_DOMAIN_LIST`)
//! 2. Settings file (`companion.toml`, or `--settings`)
//! 3. Built-in defaults
//!
//! Only the binary resolves environment variables; library callers build the
//! value themselves.

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, with_overrides_from};
pub use types::{CompilerSettings, EdgeConfig, EnvironmentConfig, MailConfig};

/// Settings file looked up next to the domain map when `--settings` is absent
pub const DEFAULT_SETTINGS_FILE: &str = "companion.toml";

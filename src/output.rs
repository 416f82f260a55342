//! NDJSON event output for `--json`

use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write a raw JSON value to stdout
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Write a typed event to stdout
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let value = serde_json::to_value(event).map_err(io::Error::from)?;
    emit(value)
}

/// Emitted when a command starts
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub source: String,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, source: &std::path::Path) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            source: source.display().to_string(),
        }
    }
}

/// Emitted for every non-fatal configuration warning
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub location: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&domain_companion::ConfigWarning> for WarningEvent {
    fn from(warning: &domain_companion::ConfigWarning) -> Self {
        Self {
            event: "warning",
            location: warning.location.clone(),
            key: warning.key.clone(),
            suggestion: warning.suggestion.clone(),
        }
    }
}

/// Emitted when a command fails
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub kind: &'static str,
    pub message: String,
}

impl ErrorEvent {
    pub fn from_error(err: &anyhow::Error) -> Self {
        let kind = err
            .downcast_ref::<domain_companion::CompanionError>()
            .map(|e| e.kind())
            .unwrap_or("Error");
        Self {
            event: "error",
            kind,
            message: format!("{:#}", err),
        }
    }
}

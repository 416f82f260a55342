//! Domain map loader
//!
//! Reads the raw configuration text and parses it into an untyped document.
//! Key order of the top-level object is preserved; it becomes the canonical
//! entry order for everything compiled from it.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{CompanionError, CompanionResult};

/// Syntax of a domain map document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension (`.yaml`/`.yml`, anything else is JSON)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Where a domain map comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file on disk; format follows the extension
    Path(PathBuf),
    /// In-memory text (tests, stdin, embedded fixtures)
    Text {
        name: String,
        content: String,
        format: DocumentFormat,
    },
}

impl ConfigSource {
    /// In-memory JSON document
    pub fn json(content: impl Into<String>) -> Self {
        ConfigSource::Text {
            name: "<inline>".to_string(),
            content: content.into(),
            format: DocumentFormat::Json,
        }
    }

    /// In-memory YAML document
    pub fn yaml(content: impl Into<String>) -> Self {
        ConfigSource::Text {
            name: "<inline>".to_string(),
            content: content.into(),
            format: DocumentFormat::Yaml,
        }
    }

    /// Human-readable name used in error messages
    pub fn name(&self) -> String {
        match self {
            ConfigSource::Path(path) => path.display().to_string(),
            ConfigSource::Text { name, .. } => name.clone(),
        }
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        ConfigSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::Path(path)
    }
}

/// Untyped domain map: arbitrary keys mapping to entry objects
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    source_name: String,
    entries: Map<String, Value>,
}

impl RawDocument {
    /// Name of the source this document was read from
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, value)` pairs in document order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load a domain map from a file or in-memory source
pub fn load(source: &ConfigSource) -> CompanionResult<RawDocument> {
    match source {
        ConfigSource::Path(path) => {
            let content = fs::read_to_string(path)?;
            parse_str(
                &content,
                DocumentFormat::from_path(path),
                &path.display().to_string(),
            )
        }
        ConfigSource::Text {
            name,
            content,
            format,
        } => parse_str(content, *format, name),
    }
}

/// Parse domain map text
pub fn parse_str(
    content: &str,
    format: DocumentFormat,
    source_name: &str,
) -> CompanionResult<RawDocument> {
    if content.trim().is_empty() {
        return Err(CompanionError::EmptyConfig {
            source_name: source_name.to_string(),
        });
    }

    let value: Value = match format {
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| malformed(source_name, e))?
        }
        DocumentFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| malformed(source_name, e))?
        }
    };

    let entries = match value {
        Value::Null => {
            return Err(CompanionError::EmptyConfig {
                source_name: source_name.to_string(),
            })
        }
        Value::Object(map) => map,
        other => {
            return Err(CompanionError::MalformedConfig {
                source_name: source_name.to_string(),
                message: format!("expected a top-level object, found {}", value_kind(&other)),
            })
        }
    };

    if entries.is_empty() {
        return Err(CompanionError::EmptyConfig {
            source_name: source_name.to_string(),
        });
    }

    tracing::debug!(source = source_name, entries = entries.len(), "domain map loaded");

    Ok(RawDocument {
        source_name: source_name.to_string(),
        entries,
    })
}

fn malformed(source_name: &str, err: impl std::fmt::Display) -> CompanionError {
    CompanionError::MalformedConfig {
        source_name: source_name.to_string(),
        message: err.to_string(),
    }
}

/// JSON type name for diagnostics
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

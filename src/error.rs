//! Error types for domain-companion
//!
//! Every variant is terminal: compilation stops at the first violation and no
//! partial plan is returned.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for compiler operations
pub type CompanionResult<T> = Result<T, CompanionError>;

/// Main error type for loading, validating and compiling a domain map
#[derive(Error, Debug)]
pub enum CompanionError {
    /// Document is empty, `null`, or has no entries
    #[error("domain map is empty or undefined ({source_name})")]
    EmptyConfig { source_name: String },

    /// Document could not be parsed as structured data
    #[error("malformed domain map ({source_name}): {message}")]
    MalformedConfig {
        source_name: String,
        message: String,
    },

    /// Entry lacks its zone identity or redirect list
    #[error("invalid domain map entry '{key}': {reason}")]
    InvalidDomainMap { key: String, reason: String },

    /// Redirect lacks its source/target domain fields
    #[error("invalid redirect #{index} in entry '{key}': {reason}")]
    InvalidRedirect {
        key: String,
        index: usize,
        reason: String,
    },

    /// Entry lacks its bounce sender or email list
    #[error("invalid email configuration in entry '{key}': {reason}")]
    InvalidEmailConfig { key: String, reason: String },

    /// Email rule lacks one of its four required fields
    #[error("invalid email rule #{index} in entry '{key}': {reason}")]
    InvalidEmailRule {
        key: String,
        index: usize,
        reason: String,
    },

    /// Two entries declare the same zone
    #[error("zone '{zone}' is declared by both '{first}' and '{second}'")]
    DuplicateZone {
        zone: String,
        first: String,
        second: String,
    },

    /// Two distinct zones sanitize to the same resource identifier
    #[error("zones '{first}' and '{second}' both map to resource identifier '{identifier}'")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    /// A hostname is routed more than once
    #[error("hostname '{hostname}' is claimed by both '{first}' and '{second}'")]
    HostnameConflict {
        hostname: String,
        first: String,
        second: String,
    },

    /// Compiler settings file is invalid
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompanionError {
    /// Short, stable name of the violated invariant (used in JSON output)
    pub fn kind(&self) -> &'static str {
        match self {
            CompanionError::EmptyConfig { .. } => "EmptyConfig",
            CompanionError::MalformedConfig { .. } => "MalformedConfig",
            CompanionError::InvalidDomainMap { .. } => "InvalidDomainMap",
            CompanionError::InvalidRedirect { .. } => "InvalidRedirect",
            CompanionError::InvalidEmailConfig { .. } => "InvalidEmailConfig",
            CompanionError::InvalidEmailRule { .. } => "InvalidEmailRule",
            CompanionError::DuplicateZone { .. } => "DuplicateZone",
            CompanionError::IdentifierCollision { .. } => "IdentifierCollision",
            CompanionError::HostnameConflict { .. } => "HostnameConflict",
            CompanionError::InvalidSettings { .. } => "InvalidSettings",
            CompanionError::Io(_) => "Io",
        }
    }
}

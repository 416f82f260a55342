//! Settings type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CompanionError, CompanionResult};

use super::loader;

/// Redirect status codes the edge runtime can emit
const REDIRECT_STATUSES: &[u16] = &[301, 302, 307, 308];

/// Deployment context handed through to provisioning collaborators.
///
/// The compiler copies it into the plan unchanged and never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EnvironmentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Extra recipient domains accepted by the mail runtime
    #[serde(default)]
    pub recipient_domains: Vec<String>,

    /// Extra domains the mail runtime bounces
    #[serde(default)]
    pub bounce_domains: Vec<String>,
}

/// Mail rule settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailConfig {
    /// Key prefix under which raw messages are stored
    #[serde(default = "default_object_key_prefix")]
    pub object_key_prefix: String,

    /// Forwarder function invoked after the message is stored
    #[serde(default = "default_forwarder")]
    pub forwarder: String,

    /// Notification topic for bounces
    #[serde(default = "default_bounce_topic")]
    pub bounce_topic: String,

    /// Enable spam/virus scanning on every rule
    #[serde(default = "default_true")]
    pub scan_enabled: bool,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            object_key_prefix: default_object_key_prefix(),
            forwarder: default_forwarder(),
            bounce_topic: default_bounce_topic(),
            scan_enabled: true,
        }
    }
}

fn default_object_key_prefix() -> String {
    "emails".to_string()
}

fn default_forwarder() -> String {
    "EmailForwarding".to_string()
}

fn default_bounce_topic() -> String {
    "BounceTopic".to_string()
}

fn default_true() -> bool {
    true
}

/// Edge redirect settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConfig {
    /// Location used for hosts whose redirect declares no target
    #[serde(default)]
    pub default_location: Option<String>,

    /// HTTP status of redirect responses
    #[serde(default = "default_status")]
    pub status: u16,

    /// Append the request path to the target when no `uriMap` entry matches
    #[serde(default)]
    pub preserve_path: bool,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            default_location: None,
            status: default_status(),
            preserve_path: false,
        }
    }
}

fn default_status() -> u16 {
    301
}

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompilerSettings {
    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub mail: MailConfig,

    #[serde(default)]
    pub edge: EdgeConfig,
}

impl CompilerSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> CompanionResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Semantic checks that serde cannot express
    pub fn validate(&self, file: &Path) -> CompanionResult<()> {
        let invalid = |message: String| CompanionError::InvalidSettings {
            file: file.to_path_buf(),
            message,
        };

        if !REDIRECT_STATUSES.contains(&self.edge.status) {
            return Err(invalid(format!(
                "edge.status must be one of 301, 302, 307, 308 (got {})",
                self.edge.status
            )));
        }
        if let Some(location) = &self.edge.default_location {
            if location.trim().is_empty() {
                return Err(invalid("edge.default_location must not be empty".to_string()));
            }
        }
        if self.mail.forwarder.trim().is_empty() {
            return Err(invalid("mail.forwarder must not be empty".to_string()));
        }
        if self.mail.bounce_topic.trim().is_empty() {
            return Err(invalid("mail.bounce_topic must not be empty".to_string()));
        }
        Ok(())
    }
}

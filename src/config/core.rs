use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure, read from `.readiness.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadinessConfig {
    /// Outbound form submission settings
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Shareable results link settings
    #[serde(default)]
    pub share: ShareConfig,

    /// Contact gate settings
    #[serde(default)]
    pub contact: ContactConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Session store configuration
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Form-collection endpoint receiving JSON submissions
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Set to false to never contact the endpoint
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Request timeout in seconds (single attempt, no retry)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            enabled: default_enabled(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://submit-form.com/VL1qRrueE".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Page the `#answers=` fragment is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://adversis.io/enterprise-readiness-assessment".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Additional domains rejected at the gate, on top of the free-mail list
    #[serde(default)]
    pub extra_blocked_domains: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format used when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session store file (defaults to the user cache directory)
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

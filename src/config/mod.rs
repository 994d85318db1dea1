//! Configuration: `.readiness.toml` discovery, parsing and defaults.

mod core;
mod loader;

pub use self::core::{
    ContactConfig, OutputConfig, ReadinessConfig, SessionConfig, ShareConfig, SubmissionConfig,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};

/// Contents written by `readiness init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Readiness assessment configuration

[submission]
endpoint = "https://submit-form.com/VL1qRrueE"
enabled = true
timeout_secs = 10

[share]
base_url = "https://adversis.io/enterprise-readiness-assessment"

[contact]
extra_blocked_domains = []

[output]
default_format = "terminal"

[session]
# store_path = "/tmp/readiness-session.json"
"#;

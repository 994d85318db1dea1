use std::fs;
use std::path::{Path, PathBuf};

use super::core::ReadinessConfig;
use crate::errors::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".readiness.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<ReadinessConfig, ConfigError> {
    toml::from_str::<ReadinessConfig>(contents).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load configuration from an explicit path. Missing or invalid files are errors.
pub fn load_config_from(path: &Path) -> Result<ReadinessConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a candidate path, logging anything but "not found"
fn try_load_config_from_path(config_path: &Path) -> Option<ReadinessConfig> {
    match load_config_from(config_path) {
        Ok(config) => Some(config),
        Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            None
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.readiness.toml`
pub fn discover_config(start: PathBuf) -> ReadinessConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ReadinessConfig::default()
        })
}

pub fn load_config() -> ReadinessConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ReadinessConfig::default()
        }
    }
}

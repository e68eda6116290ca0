//! TOML config file loading.

use crate::schema::ShuffleConfig;
use crate::validation;
use shuffle_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Parse config from a TOML string.
///
/// Missing fields use serde defaults. If validation fails, a warning is
/// logged and the default config is returned.
pub fn load_from_str(content: &str) -> Result<ShuffleConfig, ConfigError> {
    let config: ShuffleConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("invalid config ({e}), using defaults");
        return Ok(ShuffleConfig::default());
    }

    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<ShuffleConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config = load_from_str(&content)?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/shuffle/config.toml`
/// On macOS: `~/Library/Application Support/shuffle/config.toml`
///
/// Returns defaults when the file does not exist.
pub fn load_default() -> Result<ShuffleConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, using defaults", path.display());
        return Ok(ShuffleConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError("could not determine config directory".into())
    })?;
    Ok(config_dir.join("shuffle").join("config.toml"))
}

#[cfg(test)]
mod tests;

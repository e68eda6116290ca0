//! Shuffle configuration.
//!
//! TOML-based tuning for the parts of the engine that are policy rather
//! than geometry: fluid auto-scroll speeds, drag session flags and logging.
//! Every section uses serde defaults so partial files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shuffle_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AutoScrollConfig, LogLevel, LoggingConfig, SessionConfig, ShuffleConfig};

use std::path::Path;

use shuffle_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// A missing default file is not an error: defaults are returned. A missing
/// explicit path is.
pub fn load_config(path: Option<&Path>) -> Result<ShuffleConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// The config as pretty JSON.
pub fn config_to_json(config: &ShuffleConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

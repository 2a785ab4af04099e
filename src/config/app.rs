//! Application configuration loading from config.toml
//!
//! The file is optional. When it is absent every setting falls back to its
//! default, so a fresh deployment only needs the two secrets in the environment.

use crate::config::generation::GenerationConfig;
use crate::core::formatter::SplitPolicy;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "CHEF_CONFIG";

/// Config file read when `CHEF_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Settings for the generation API call
    pub generation: GenerationConfig,
    /// Settings for turning recipe text into Discord messages
    pub formatting: FormattingConfig,
}

/// The `[formatting]` table.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FormattingConfig {
    /// What to do with recipe text longer than two message fields
    pub split_policy: SplitPolicy,
}

/// Parses and validates configuration from a TOML string.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is malformed, contains unknown keys,
/// or holds out-of-range values.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    config.generation.validate()?;
    Ok(config)
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A value is out of range
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Loads the application configuration from `$CHEF_CONFIG` or ./config.toml.
///
/// A missing file at the default location is not an error; defaults are used.
/// A missing file explicitly named by `CHEF_CONFIG` is.
///
/// # Errors
/// Returns [`Error::Config`] if the chosen file cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => {
            info!("Loading configuration from {CONFIG_PATH_VAR}={path}");
            load_config(path)
        }
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            info!("Loading configuration from {DEFAULT_CONFIG_PATH}");
            load_config(DEFAULT_CONFIG_PATH)
        }
        Err(_) => {
            info!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults");
            Ok(AppConfig::default())
        }
    }
}

//! Generation settings shared by every `/cook` invocation.
//!
//! The values are read once at startup (defaults, optionally overridden by the
//! `[generation]` table of config.toml) and are never mutated afterwards.

use crate::errors::{Error, Result};
use serde::Deserialize;

/// Model used when config.toml does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Sampling temperature used when config.toml does not set one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Base URL of the Gemini REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process-wide generation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Model identifier sent to the API
    pub model: String,
    /// Sampling temperature, must lie in `[0, 1]`
    pub temperature: f32,
    /// Whether the model may consult Google Search before answering
    pub google_search: bool,
    /// Base URL the `models/{model}:generateContent` path is appended to
    pub endpoint: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            google_search: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl GenerationConfig {
    /// Checks the values a config file could have gotten wrong.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for an empty model name, an empty endpoint or a
    /// temperature outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::Config {
                message: "generation.model must not be empty".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(Error::Config {
                message: format!(
                    "generation.temperature must be between 0 and 1, got {}",
                    self.temperature
                ),
            });
        }
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config {
                message: "generation.endpoint must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Full `generateContent` URL for the configured model.
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

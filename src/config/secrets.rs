//! Required secrets loaded from environment variables.
//!
//! Both the Discord bot token and the Gemini API key must be present before the
//! bot starts; a missing or blank value is fatal.

use crate::errors::{Error, Result};
use std::fmt;

/// Environment variable holding the Discord bot token.
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Credentials needed to talk to Discord and to the generation API.
#[derive(Clone)]
pub struct Secrets {
    /// Discord bot token
    pub discord_token: String,
    /// Gemini API key
    pub gemini_api_key: String,
}

// Keep tokens out of logs.
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("discord_token", &"<redacted>")
            .field("gemini_api_key", &"<redacted>")
            .finish()
    }
}

impl Secrets {
    /// Reads both secrets from the process environment.
    ///
    /// # Errors
    /// Returns [`Error::MissingSecret`] naming the first variable that is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads both secrets through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    /// Returns [`Error::MissingSecret`] naming the first variable that is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(Error::MissingSecret { name })
        };

        Ok(Self {
            discord_token: require(DISCORD_TOKEN_VAR)?,
            gemini_api_key: require(GEMINI_API_KEY_VAR)?,
        })
    }
}

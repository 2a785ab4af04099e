//! Unified error types and result handling for Fridge Chef.

use thiserror::Error;

/// Every failure the bot can produce, from startup configuration to a single `/cook` call.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file or an optional setting could not be used.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// A required secret is absent from the environment.
    #[error("Missing required environment variable `{name}`")]
    MissingSecret {
        /// Name of the environment variable
        name: &'static str,
    },

    /// A command argument failed its presence check.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Which argument was rejected and why
        message: String,
    },

    /// The generation API call failed. The message is shown to the user verbatim.
    #[error("{message}")]
    Generation {
        /// Stringified cause of the failure
        message: String,
    },

    /// Transport or decoding failure from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serenity/Poise framework error.
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

impl Error {
    /// Wraps any displayable failure into a [`Error::Generation`].
    pub fn generation(cause: impl std::fmt::Display) -> Self {
        Self::Generation {
            message: cause.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

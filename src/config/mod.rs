/// Application configuration loaded from the optional config.toml
pub mod app;

/// Model, temperature and tool settings for the generation API
pub mod generation;

/// Required secrets from environment variables
pub mod secrets;

/// Keep-alive server settings from environment variables
pub mod server;

pub use app::{AppConfig, FormattingConfig, load_app_configuration};
pub use generation::GenerationConfig;
pub use secrets::Secrets;

//! Keep-alive server configuration from environment variables.

use crate::errors::{Error, Result};

/// Environment variable holding the port the hosting platform checks.
pub const PORT_VAR: &str = "PORT";

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8080;

/// Reads the keep-alive port from the environment, defaulting to [`DEFAULT_PORT`].
///
/// # Errors
/// Returns [`Error::Config`] if `PORT` is set but is not a valid port number.
pub fn keepalive_port() -> Result<u16> {
    parse_port(std::env::var(PORT_VAR).ok().as_deref())
}

/// Parses an optional port value; absent or blank means [`DEFAULT_PORT`].
///
/// # Errors
/// Returns [`Error::Config`] if the value is not a valid port number.
pub fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|e| Error::Config {
            message: format!("{PORT_VAR} must be a port number, got {value:?}: {e}"),
        }),
    }
}

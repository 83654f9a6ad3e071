//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `COMANDAS_API_URL` - Base URL of the ComandAS backend API
//!
//! ## Optional
//! - `COMANDAS_SOCKET_URL` - URL of the live-update socket endpoint
//! - `COMANDAS_SESSION_FILE` - Path of the persisted key-value store
//!   (when unset, the session lives in memory only)
//! - `COMANDAS_SIGNIN_DELAY_MS` - Minimum sign-in spinner duration
//!   (default: 1500)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default minimum duration of the sign-in loading state, in milliseconds.
///
/// Purely cosmetic: an instant response makes the spinner flash, so the
/// screen waits out the remainder of this window before resolving.
pub const DEFAULT_SIGNIN_DELAY_MS: u64 = 1500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API; endpoint paths are joined onto it.
    pub api_url: Url,
    /// URL of the live-update socket endpoint, when one is configured.
    pub socket_url: Option<Url>,
    /// Path of the persisted key-value store backing the session object.
    pub session_file: Option<PathBuf>,
    /// Minimum duration the sign-in loading state stays active.
    pub signin_delay: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or any
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = ensure_trailing_slash(parse_url(
            "COMANDAS_API_URL",
            &get_required_env("COMANDAS_API_URL")?,
        )?);
        let socket_url = get_optional_env("COMANDAS_SOCKET_URL")
            .map(|raw| parse_url("COMANDAS_SOCKET_URL", &raw))
            .transpose()?;
        let session_file = get_optional_env("COMANDAS_SESSION_FILE").map(PathBuf::from);
        let signin_delay = parse_delay_ms(
            "COMANDAS_SIGNIN_DELAY_MS",
            get_optional_env("COMANDAS_SIGNIN_DELAY_MS").as_deref(),
        )?;

        Ok(Self {
            api_url,
            socket_url,
            session_file,
            signin_delay,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse a URL-valued variable.
fn parse_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Normalize a base URL so endpoint paths join under it.
///
/// `Url::join` replaces the last path segment when the base has no
/// trailing slash, which would silently drop an `/api`-style prefix.
fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Parse a millisecond delay, falling back to the default when unset.
fn parse_delay_ms(key: &str, raw: Option<&str>) -> Result<Duration, ConfigError> {
    let millis = match raw {
        Some(value) => value
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?,
        None => DEFAULT_SIGNIN_DELAY_MS,
    };
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_valid() {
        let url = parse_url("TEST_VAR", "http://localhost:3000/api/").unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
    }

    #[test]
    fn test_parse_url_invalid() {
        let result = parse_url("TEST_VAR", "not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_trailing_slash_is_added() {
        let url = ensure_trailing_slash(parse_url("TEST_VAR", "http://localhost:3000/api").unwrap());
        assert_eq!(url.as_str(), "http://localhost:3000/api/");

        let joined = url.join("auth/signin").unwrap();
        assert_eq!(joined.as_str(), "http://localhost:3000/api/auth/signin");
    }

    #[test]
    fn test_trailing_slash_is_kept() {
        let url = ensure_trailing_slash(parse_url("TEST_VAR", "http://localhost:3000/").unwrap());
        assert_eq!(url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_delay_default() {
        let delay = parse_delay_ms("TEST_VAR", None).unwrap();
        assert_eq!(delay, Duration::from_millis(DEFAULT_SIGNIN_DELAY_MS));
    }

    #[test]
    fn test_delay_override() {
        let delay = parse_delay_ms("TEST_VAR", Some("250")).unwrap();
        assert_eq!(delay, Duration::from_millis(250));
    }

    #[test]
    fn test_delay_invalid() {
        let result = parse_delay_ms("TEST_VAR", Some("soon"));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}

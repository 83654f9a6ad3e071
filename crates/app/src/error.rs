//! Unified screen-level error type.
//!
//! Screens catch everything and degrade to a visible notice; `AppError`
//! is what crosses the boundary when a caller wants the cause instead.

use thiserror::Error;

use crate::config::ConfigError;
use crate::forms::FieldErrors;
use crate::live::LiveError;
use crate::provider::ApiError;
use crate::storage::StorageError;

/// Application-level error type for the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// A backend call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The live-update channel failed.
    #[error("live channel error: {0}")]
    Live(#[from] LiveError),

    /// Local storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A form failed local validation.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wraps_cause() {
        let err = AppError::from(ApiError::NotFound("user 9".to_owned()));
        assert_eq!(err.to_string(), "API error: not found: user 9");
    }
}

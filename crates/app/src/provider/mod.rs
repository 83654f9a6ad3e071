//! The HTTP request wrapper.
//!
//! Every remote call in the app goes through [`ApiTransport`]: a method,
//! an endpoint path relative to the configured base URL, and an optional
//! parameter object. The production implementation is
//! [`HttpTransport`] over `reqwest`; tests substitute recording stubs.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// The method name on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur when calling the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response was produced.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint path did not join onto the base URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body did not match the endpoint's expected record.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend rejected the request.
    #[error("server error{}: {message}", .code.as_deref().map(|c| format!(" [{c}]")).unwrap_or_default())]
    Server {
        /// Backend error code (e.g. `"004"`, `"005"`), when the error
        /// body carried one.
        code: Option<String>,
        /// Human-readable description.
        message: String,
    },

    /// The resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// The backend-supplied error code, if this error carries one.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Server { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Abstract HTTP-style request primitive.
///
/// Mirrors the backend's calling convention: `(method, path, params)`
/// where `params` becomes the query string for GET and the JSON body for
/// everything else. Implementations must be cheap to share behind an
/// `Arc`.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Issue a request and return the decoded JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent, if the
    /// backend responds with a non-success status, or if the body is not
    /// valid JSON.
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<Value>,
    ) -> Result<Value, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_error_code_only_on_server_errors() {
        let err = ApiError::Server {
            code: Some("005".to_owned()),
            message: "wrong password".to_owned(),
        };
        assert_eq!(err.error_code(), Some("005"));

        let err = ApiError::NotFound("user/viewUser".to_owned());
        assert_eq!(err.error_code(), None);
    }

    #[test]
    fn test_server_error_display() {
        let err = ApiError::Server {
            code: Some("004".to_owned()),
            message: "unknown user".to_owned(),
        };
        assert_eq!(err.to_string(), "server error [004]: unknown user");

        let err = ApiError::Server {
            code: None,
            message: "boom".to_owned(),
        };
        assert_eq!(err.to_string(), "server error: boom");
    }
}

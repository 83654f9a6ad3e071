//! Authentication endpoints.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use comandas_core::Session;

use crate::provider::{ApiError, ApiTransport, Method};

/// Credentials submitted by the sign-in screen.
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    /// Account name.
    pub name: String,
    /// Plain-text password; only ever travels to the backend.
    pub password: String,
}

/// Payload for creating a user, from sign-up or the admin screen.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
    pub rol: i32,
}

/// Client for the `auth/*` endpoints.
#[derive(Clone)]
pub struct AuthApi {
    transport: Arc<dyn ApiTransport>,
}

impl AuthApi {
    /// Create a new client over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Authenticate and return the session object the backend issues.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] for rejected credentials (the backend
    /// distinguishes unknown users and wrong passwords through
    /// `error_code`), and [`ApiError::Parse`] if the response is not a
    /// session object.
    #[instrument(skip_all, fields(name = %request.name))]
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<Session, ApiError> {
        let response = self
            .transport
            .request(Method::Post, "auth/signin", Some(serde_json::to_value(request)?))
            .await?;

        Ok(serde_json::from_value(response)?)
    }

    /// Register a new user.
    ///
    /// Returns the backend's acknowledgment record as-is; the admin
    /// screen relays it over the live channel without reinterpreting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip_all, fields(name = %request.name))]
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<Value, ApiError> {
        self.transport
            .request(Method::Post, "auth/signup", Some(serde_json::to_value(request)?))
            .await
    }
}

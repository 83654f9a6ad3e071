//! User record endpoints.
//!
//! The backend exposes two pairs of update operations: `updateUser` /
//! `updateProfile` for self-edits and `updateUserAdm` /
//! `updateProfileAdm` for admin edits. Within each pair, the `User`
//! variant rewrites the password along with the profile and role while
//! the `Profile` variant leaves the stored password untouched.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use comandas_core::{UserId, UserRecord};

use crate::provider::{ApiError, ApiTransport, Method};

/// Self-edit including a password change (`user/updateUser`).
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserRequest {
    pub idusers: UserId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub rol: i32,
}

/// Self-edit keeping the stored password (`user/updateProfile`).
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub idusers: UserId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Admin edit including a password change (`user/updateUserAdm`).
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserAdmRequest {
    pub idusers: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    pub password: String,
    pub rol: i32,
}

/// Admin edit keeping the stored password (`user/updateProfileAdm`).
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileAdmRequest {
    pub idusers: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    pub rol: i32,
}

/// Client for the `user/*` endpoints.
#[derive(Clone)]
pub struct UserApi {
    transport: Arc<dyn ApiTransport>,
}

impl UserApi {
    /// Create a new client over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetch a user record by id.
    ///
    /// The backend answers with an array; the record is its first
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the array is empty and
    /// [`ApiError::Parse`] when the first element is not a user record.
    #[instrument(skip(self))]
    pub async fn view_user(&self, id: UserId) -> Result<UserRecord, ApiError> {
        let response = self
            .transport
            .request(
                Method::Get,
                "user/viewUser",
                Some(serde_json::json!({ "idusers": id })),
            )
            .await?;

        let first = match response {
            Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
            // Some backend builds answer with the bare record
            Value::Object(map) => Value::Object(map),
            _ => return Err(ApiError::NotFound(format!("user {id}"))),
        };

        Ok(serde_json::from_value(first)?)
    }

    /// Update profile, role and password (`user/updateUser`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip_all, fields(idusers = %request.idusers))]
    pub async fn update_user(&self, request: &UpdateUserRequest) -> Result<Value, ApiError> {
        self.transport
            .request(Method::Put, "user/updateUser", Some(serde_json::to_value(request)?))
            .await
    }

    /// Update profile fields only (`user/updateProfile`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip_all, fields(idusers = %request.idusers))]
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<Value, ApiError> {
        self.transport
            .request(
                Method::Put,
                "user/updateProfile",
                Some(serde_json::to_value(request)?),
            )
            .await
    }

    /// Admin update of profile, role and password (`user/updateUserAdm`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip_all, fields(idusers = %request.idusers))]
    pub async fn update_user_adm(&self, request: &UpdateUserAdmRequest) -> Result<Value, ApiError> {
        self.transport
            .request(
                Method::Put,
                "user/updateUserAdm",
                Some(serde_json::to_value(request)?),
            )
            .await
    }

    /// Admin update of profile and role, password untouched
    /// (`user/updateProfileAdm`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip_all, fields(idusers = %request.idusers))]
    pub async fn update_profile_adm(
        &self,
        request: &UpdateProfileAdmRequest,
    ) -> Result<Value, ApiError> {
        self.transport
            .request(
                Method::Put,
                "user/updateProfileAdm",
                Some(serde_json::to_value(request)?),
            )
            .await
    }

    /// Delete a user record (`user/deleteUser`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<Value, ApiError> {
        self.transport
            .request(
                Method::Delete,
                "user/deleteUser",
                Some(serde_json::json!({ "idusers": id })),
            )
            .await
    }
}

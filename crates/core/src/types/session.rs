//! The locally persisted session object.

use serde::{Deserialize, Serialize};

use crate::types::id::{OrderId, UserId};
use crate::types::role::Role;

/// The session object created by a successful sign-in.
///
/// Persisted in the local key-value store under the `"user"` key and kept
/// in sync with the server record after profile edits. Field names match
/// the backend's wire shape, so the struct round-trips the sign-in
/// response unchanged.
///
/// `rol` is kept as the raw backend code: a code this client does not
/// recognize must still round-trip through storage (navigation falls back
/// to the default route for it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The user's server-side identifier.
    pub idusers: UserId,
    /// Display name, also the sign-in identifier.
    pub name: String,
    /// Contact phone number, when the record has one.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email address.
    pub email: String,
    /// Raw role code (0=admin, 1=cashier, 2=cook, 3=customer).
    pub rol: i32,
    /// The order a cook is currently working, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_order: Option<OrderId>,
}

impl Session {
    /// The role this session's code maps to, if recognized.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        Role::from_code(self.rol)
    }
}

//! The server-owned user record.

use serde::{Deserialize, Serialize};

use crate::types::id::{OrderId, UserId};
use crate::types::role::Role;

/// A transient copy of a server-owned user record.
///
/// The backend fully owns the lifecycle of these; the client only ever
/// holds a copy fetched from `user/viewUser`. The password is write-only
/// on the wire and never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-side identifier.
    pub idusers: UserId,
    /// Display name.
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

impl UserRecord {
    /// The role this record's code maps to, if recognized.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        Role::from_code(self.rol)
    }
}

//! The scoped session context.
//!
//! Instead of every screen reaching into ambient storage for the
//! logged-in user, the cached session gets one explicit owner with a
//! defined read/write/clear lifecycle, injected into each screen;
//! storage stays an implementation detail behind [`KeyValueStore`].

use std::sync::Arc;

use comandas_core::Session;

use crate::storage::{KeyValueStore, StorageError};

/// Storage keys owned by the session context.
pub mod keys {
    /// Key for the persisted session object.
    pub const CURRENT_USER: &str = "user";
}

/// Read/write/clear access to the persisted session object.
///
/// Cheap to clone; all clones share the same backing store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
}

impl SessionContext {
    /// Create a context over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The current session, if one is stored and readable.
    ///
    /// A value that fails to read or decode is treated as a signed-out
    /// state and logged; a broken cache must never take a screen down.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        let value = match self.store.get_item(keys::CURRENT_USER) {
            Ok(value) => value?,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stored session");
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "stored session did not decode, ignoring");
                None
            }
        }
    }

    /// Persist `session` as the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    pub fn set(&self, session: &Session) -> Result<(), StorageError> {
        let value = serde_json::to_value(session)?;
        self.store.set_item(keys::CURRENT_USER, value)
    }

    /// Read-modify-write the persisted session.
    ///
    /// Returns the updated session, or `None` when nobody is signed in
    /// (in which case `apply` never runs).
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    pub fn update(
        &self,
        apply: impl FnOnce(&mut Session),
    ) -> Result<Option<Session>, StorageError> {
        let Some(mut session) = self.current() else {
            return Ok(None);
        };
        apply(&mut session);
        self.set(&session)?;
        Ok(Some(session))
    }

    /// Drop the persisted session (sign-out).
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(keys::CURRENT_USER)
    }
}

//! User administration screen (create/edit/delete).

use std::sync::Arc;

use serde_json::Value;

use comandas_core::UserId;

use crate::api::{
    AuthApi, SignUpRequest, UpdateProfileAdmRequest, UpdateUserAdmRequest, UserApi,
};
use crate::error::AppError;
use crate::forms::FieldErrors;
use crate::live::{LiveChannel, topics};
use crate::navigator::Route;
use crate::notice::Notice;
use crate::state::AppContext;

/// Which variant of the screen the route selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAdminMode {
    /// Creating a new user; the password is required.
    Create,
    /// Editing an existing user; a blank password means "unchanged".
    Edit(UserId),
}

/// The admin's user form.
#[derive(Debug, Clone, Default)]
pub struct UserAdminForm {
    pub idusers: Option<UserId>,
    pub name: String,
    pub password: String,
    /// Optional on this form; blank means the record has no phone.
    pub phone: String,
    pub rol: Option<i32>,
    pub email: String,
}

impl UserAdminForm {
    /// The field rules, which depend on the screen mode.
    ///
    /// # Errors
    ///
    /// Returns the failed field rules.
    pub fn validate(&self, mode: UserAdminMode) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        errors.require("email", &self.email);
        errors.email("email", &self.email);
        errors.require_choice("rol", self.rol.as_ref());
        if matches!(mode, UserAdminMode::Create) {
            errors.require("password", &self.password);
        }
        errors.min_len("password", &self.password, 6);
        errors.into_result()
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn phone_param(&self) -> Option<String> {
        if self.phone.is_empty() {
            None
        } else {
            Some(self.phone.clone())
        }
    }
}

/// What a save or delete asks the view layer to do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAdminOutcome {
    /// Toast to show, if any.
    pub notice: Option<Notice>,
    /// Route to navigate to on success.
    pub navigate: Option<Route>,
}

impl UserAdminOutcome {
    fn refused(message: &str) -> Self {
        Self {
            notice: Some(Notice::warning(message)),
            navigate: None,
        }
    }
}

/// Controller for the user administration screen.
///
/// Mutations require the live-update channel to report itself connected
/// before the backend is touched: other admin screens refresh off the
/// `usuarios` broadcast, so a change made while disconnected would leave
/// them stale.
pub struct UserAdminScreen {
    users: UserApi,
    auth: AuthApi,
    live: Arc<dyn LiveChannel>,
    mode: UserAdminMode,
    /// Current form values.
    pub form: UserAdminForm,
    /// Whether failed validation has marked the fields.
    pub touched: bool,
}

impl UserAdminScreen {
    /// Create the screen in the given mode.
    #[must_use]
    pub fn new(ctx: &AppContext, mode: UserAdminMode) -> Self {
        Self {
            users: ctx.users().clone(),
            auth: ctx.auth().clone(),
            live: Arc::clone(ctx.live()),
            mode,
            form: UserAdminForm::default(),
            touched: false,
        }
    }

    /// The screen's mode.
    #[must_use]
    pub const fn mode(&self) -> UserAdminMode {
        self.mode
    }

    /// Pre-fill the form in edit mode.
    ///
    /// Fetches the record by id and blanks the password field for
    /// re-entry. Create mode is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be fetched or decoded.
    pub async fn load(&mut self) -> Result<(), AppError> {
        let UserAdminMode::Edit(id) = self.mode else {
            return Ok(());
        };

        let record = self.users.view_user(id).await?;
        self.form = UserAdminForm {
            idusers: Some(record.idusers),
            name: record.name,
            password: String::new(),
            phone: record.phone.unwrap_or_default(),
            rol: Some(record.rol),
            email: record.email,
        };

        Ok(())
    }

    /// Save the form: create in create mode, update in edit mode.
    ///
    /// In edit mode a non-blank password goes through `updateUserAdm`
    /// (password + role + profile); a blank one goes through
    /// `updateProfileAdm`, leaving the stored password untouched.
    pub async fn save(&mut self) -> UserAdminOutcome {
        self.touched = true;

        if self.form.validate(self.mode).is_err() || !self.live.is_connected() {
            return UserAdminOutcome::refused(self.refusal_message());
        }
        let Some(rol) = self.form.rol else {
            return UserAdminOutcome::refused(self.refusal_message());
        };

        match self.mode {
            UserAdminMode::Edit(id) => {
                let idusers = self.form.idusers.unwrap_or(id);
                let result = if self.form.password.is_empty() {
                    self.users
                        .update_profile_adm(&UpdateProfileAdmRequest {
                            idusers,
                            name: self.form.name.clone(),
                            phone: self.form.phone_param(),
                            email: self.form.email.clone(),
                            rol,
                        })
                        .await
                } else {
                    self.users
                        .update_user_adm(&UpdateUserAdmRequest {
                            idusers,
                            name: self.form.name.clone(),
                            phone: self.form.phone_param(),
                            email: self.form.email.clone(),
                            password: self.form.password.clone(),
                            rol,
                        })
                        .await
                };

                match result {
                    Ok(record) => self.announce(record, "Usuario Actualizado").await,
                    Err(err) => {
                        tracing::error!(error = %err, "user update failed");
                        UserAdminOutcome::refused("No es posible actualizar el usuario")
                    }
                }
            }
            UserAdminMode::Create => {
                let request = SignUpRequest {
                    name: self.form.name.clone(),
                    email: self.form.email.clone(),
                    phone: self.form.phone_param(),
                    password: self.form.password.clone(),
                    rol,
                };

                match self.auth.sign_up(&request).await {
                    Ok(record) => self.announce(record, "Usuario Creado").await,
                    Err(err) => {
                        tracing::error!(error = %err, "user creation failed");
                        UserAdminOutcome::refused("No es posible crear el usuario")
                    }
                }
            }
        }
    }

    /// Delete the record being edited.
    pub async fn delete(&mut self) -> UserAdminOutcome {
        const REFUSED: &str = "No es posible eliminar el usuario";

        let UserAdminMode::Edit(id) = self.mode else {
            return UserAdminOutcome::refused(REFUSED);
        };
        if !self.live.is_connected() {
            return UserAdminOutcome::refused(REFUSED);
        }

        match self.users.delete_user(id).await {
            Ok(record) => self.announce(record, "Usuario Eliminado").await,
            Err(err) => {
                tracing::error!(error = %err, "user deletion failed");
                UserAdminOutcome::refused(REFUSED)
            }
        }
    }

    /// Broadcast the acknowledged record and wrap up the screen.
    ///
    /// The broadcast is fire-and-forget: navigation does not wait on
    /// delivery and a failed send only logs.
    async fn announce(&mut self, record: Value, message: &str) -> UserAdminOutcome {
        if let Err(err) = self.live.publish(topics::USERS, record).await {
            tracing::warn!(error = %err, "user broadcast failed");
        }

        self.form.reset();
        self.touched = false;

        UserAdminOutcome {
            notice: Some(Notice::success(message)),
            navigate: Some(Route::UserView),
        }
    }

    const fn refusal_message(&self) -> &'static str {
        match self.mode {
            UserAdminMode::Create => "No es posible crear el usuario",
            UserAdminMode::Edit(_) => "No es posible actualizar el usuario",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> UserAdminForm {
        UserAdminForm {
            idusers: Some(UserId::new(4)),
            name: "mario".to_owned(),
            password: "secreto".to_owned(),
            phone: String::new(),
            rol: Some(1),
            email: "mario@comandas.mx".to_owned(),
        }
    }

    #[test]
    fn test_create_requires_password() {
        let mut form = valid_form();
        form.password = String::new();
        assert!(form.validate(UserAdminMode::Create).unwrap_err().has("password"));
        assert!(form.validate(UserAdminMode::Edit(UserId::new(4))).is_ok());
    }

    #[test]
    fn test_edit_applies_min_length_when_filled() {
        let mut form = valid_form();
        form.password = "abc".to_owned();
        let errors = form.validate(UserAdminMode::Edit(UserId::new(4))).unwrap_err();
        assert!(errors.has("password"));
    }

    #[test]
    fn test_blank_phone_is_allowed() {
        let form = valid_form();
        assert!(form.validate(UserAdminMode::Create).is_ok());
        assert_eq!(form.phone_param(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = valid_form();
        form.reset();
        assert!(form.name.is_empty());
        assert_eq!(form.rol, None);
        assert_eq!(form.idusers, None);
    }
}

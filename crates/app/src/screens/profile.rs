//! Profile self-edit screen.

use comandas_core::UserRecord;

use crate::api::{UpdateProfileRequest, UpdateUserRequest, UserApi};
use crate::forms::FieldErrors;
use crate::notice::Notice;
use crate::session::SessionContext;
use crate::state::AppContext;

/// The profile form. Password is optional; blank means "unchanged".
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

impl ProfileForm {
    /// The field rules of the profile form.
    ///
    /// # Errors
    ///
    /// Returns the failed field rules.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        errors.min_len("name", &self.name, 3);
        errors.require("phone", &self.phone);
        errors.min_len("phone", &self.phone, 10);
        errors.require("email", &self.email);
        errors.email("email", &self.email);
        errors.min_len("password", &self.password, 6);
        errors.into_result()
    }

    fn fill_from(&mut self, record: &UserRecord) {
        self.name = record.name.clone();
        self.phone = record.phone.clone().unwrap_or_default();
        self.email = record.email.clone();
        self.password = String::new();
    }
}

/// What a load or save asks the view layer to do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileOutcome {
    /// Toast to show, if any.
    pub notice: Option<Notice>,
}

/// Controller for the profile screen.
///
/// The session object only supplies identity here; the editable truth is
/// fetched fresh from the backend on load and kept as the reset
/// baseline.
pub struct ProfileScreen {
    users: UserApi,
    sessions: SessionContext,
    profile: Option<UserRecord>,
    /// Current form values.
    pub form: ProfileForm,
    /// Whether failed validation has marked the fields.
    pub touched: bool,
}

impl ProfileScreen {
    /// Create the screen from the shared context.
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            users: ctx.users().clone(),
            sessions: ctx.sessions().clone(),
            profile: None,
            form: ProfileForm::default(),
            touched: false,
        }
    }

    /// The last successfully loaded profile.
    #[must_use]
    pub const fn profile(&self) -> Option<&UserRecord> {
        self.profile.as_ref()
    }

    /// Fetch the full record for the signed-in user and fill the form.
    ///
    /// Without a session the screen stays empty; a fetch failure leaves
    /// it interactive with a notice.
    pub async fn load(&mut self) -> ProfileOutcome {
        let Some(session) = self.sessions.current() else {
            return ProfileOutcome::default();
        };

        match self.users.view_user(session.idusers).await {
            Ok(record) => {
                self.form.fill_from(&record);
                self.profile = Some(record);
                ProfileOutcome::default()
            }
            Err(err) => {
                tracing::error!(error = %err, "profile load failed");
                ProfileOutcome {
                    notice: Some(Notice::error("Error al cargar datos del perfil")),
                }
            }
        }
    }

    /// Restore the form to the last successfully loaded profile.
    pub fn reset(&mut self) {
        if let Some(record) = self.profile.clone() {
            self.form.fill_from(&record);
        }
        self.touched = false;
    }

    /// Save the form.
    ///
    /// A non-blank password goes through `user/updateUser` together with
    /// the session's role; a blank one goes through `user/updateProfile`
    /// and the stored password stays. On success the loaded profile, the
    /// in-memory session and the persisted session copy are all
    /// overwritten so the three stay consistent.
    pub async fn save(&mut self) -> ProfileOutcome {
        self.touched = true;

        if self.form.validate().is_err() {
            return ProfileOutcome {
                notice: Some(Notice::warning("Completa todos los campos correctamente")),
            };
        }

        let Some(session) = self.sessions.current() else {
            tracing::error!("profile save without a session");
            return ProfileOutcome {
                notice: Some(Notice::error("Error al actualizar el perfil")),
            };
        };

        let result = if self.form.password.trim().is_empty() {
            self.users
                .update_profile(&UpdateProfileRequest {
                    idusers: session.idusers,
                    name: self.form.name.clone(),
                    phone: self.form.phone.clone(),
                    email: self.form.email.clone(),
                })
                .await
        } else {
            self.users
                .update_user(&UpdateUserRequest {
                    idusers: session.idusers,
                    name: self.form.name.clone(),
                    phone: self.form.phone.clone(),
                    email: self.form.email.clone(),
                    password: self.form.password.clone(),
                    rol: session.rol,
                })
                .await
        };

        match result {
            Ok(_) => {
                if let Some(profile) = &mut self.profile {
                    profile.name = self.form.name.clone();
                    profile.phone = Some(self.form.phone.clone());
                    profile.email = self.form.email.clone();
                }

                // The server acknowledged; overwrite the cached copy.
                // There is no rollback path if this write fails.
                let name = self.form.name.clone();
                let phone = self.form.phone.clone();
                let email = self.form.email.clone();
                if let Err(err) = self.sessions.update(move |s| {
                    s.name = name;
                    s.phone = Some(phone);
                    s.email = email;
                }) {
                    tracing::warn!(error = %err, "failed to update persisted session");
                }

                self.form.password.clear();
                self.touched = false;

                ProfileOutcome {
                    notice: Some(Notice::success("Perfil actualizado correctamente")),
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "profile update failed");
                ProfileOutcome {
                    notice: Some(Notice::error("Error al actualizar el perfil")),
                }
            }
        }
    }
}

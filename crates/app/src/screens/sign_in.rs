//! Sign-in screen.

use std::time::Duration;

use comandas_core::Role;

use crate::api::{AuthApi, SignInRequest};
use crate::forms::FieldErrors;
use crate::navigator::{DialogRequest, Route};
use crate::notice::Notice;
use crate::provider::ApiError;
use crate::session::SessionContext;
use crate::state::AppContext;

/// Sign-in credentials plus UI-only state.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub name: String,
    pub password: String,
}

impl SignInForm {
    /// Both fields are required.
    ///
    /// # Errors
    ///
    /// Returns the failed field rules.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        errors.require("password", &self.password);
        errors.into_result()
    }
}

/// What a submit attempt asks the view layer to do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInOutcome {
    /// Toast to show, if any.
    pub notice: Option<Notice>,
    /// Route to navigate to on success.
    pub navigate: Option<Route>,
    /// Dialog to open (a cook's active order).
    pub dialog: Option<DialogRequest>,
}

/// Controller for the sign-in screen.
pub struct SignInScreen {
    auth: AuthApi,
    sessions: SessionContext,
    delay: Duration,
    /// Current form values.
    pub form: SignInForm,
    /// Whether a submit is in flight (drives the spinner).
    pub loading: bool,
    /// Password field visibility toggle.
    pub show_password: bool,
    /// Whether failed validation has marked the fields.
    pub touched: bool,
}

impl SignInScreen {
    /// Create the screen from the shared context.
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            auth: ctx.auth().clone(),
            sessions: ctx.sessions().clone(),
            delay: ctx.config().signin_delay,
            form: SignInForm::default(),
            loading: false,
            show_password: false,
            touched: false,
        }
    }

    /// Submit the credentials.
    ///
    /// One remote call per attempt, no retry. The loading state stays
    /// active for at least the configured delay even when the backend
    /// answers instantly, success or failure.
    pub async fn submit(&mut self) -> SignInOutcome {
        if self.form.validate().is_err() {
            self.touched = true;
            return SignInOutcome::default();
        }

        self.loading = true;

        let request = SignInRequest {
            name: self.form.name.clone(),
            password: self.form.password.clone(),
        };
        let (result, ()) = tokio::join!(
            self.auth.sign_in(&request),
            tokio::time::sleep(self.delay)
        );

        self.loading = false;

        match result {
            Ok(session) => {
                if let Err(err) = self.sessions.set(&session) {
                    // No rollback path: the server accepted the sign-in,
                    // so we proceed on the in-memory copy.
                    tracing::warn!(error = %err, "failed to persist session");
                }

                // Navigate by the stored copy, mirroring the read-back
                // from local storage.
                let session = self.sessions.current().unwrap_or(session);
                let dialog = if session.role() == Some(Role::Cook) {
                    session.actual_order.map(DialogRequest::OrderDetail)
                } else {
                    None
                };

                SignInOutcome {
                    notice: None,
                    navigate: Some(Route::for_role_code(session.rol)),
                    dialog,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "sign-in failed");
                SignInOutcome {
                    notice: Some(credentials_notice(&err)),
                    navigate: None,
                    dialog: None,
                }
            }
        }
    }

    /// Flip password visibility.
    pub const fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }
}

/// Map the backend's sign-in error codes to user-facing notices.
fn credentials_notice(err: &ApiError) -> Notice {
    match err.error_code() {
        Some("004") => Notice::error("No encontramos ese usuario.").with_title("Usuario incorrecto"),
        Some("005") => {
            Notice::warning("Verifica tu contraseña.").with_title("Contraseña incorrecta")
        }
        _ => Notice::error("Revisa tu usuario y contraseña").with_title("Credenciales incorrectas"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    fn server_error(code: Option<&str>) -> ApiError {
        ApiError::Server {
            code: code.map(str::to_owned),
            message: "rejected".to_owned(),
        }
    }

    #[test]
    fn test_unknown_user_code() {
        let notice = credentials_notice(&server_error(Some("004")));
        assert_eq!(notice.title.as_deref(), Some("Usuario incorrecto"));
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_wrong_password_code() {
        let notice = credentials_notice(&server_error(Some("005")));
        assert_eq!(notice.title.as_deref(), Some("Contraseña incorrecta"));
        assert_eq!(notice.message, "Verifica tu contraseña.");
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_anything_else_is_generic() {
        for err in [
            server_error(None),
            server_error(Some("999")),
            ApiError::NotFound("auth/signin".to_owned()),
        ] {
            let notice = credentials_notice(&err);
            assert_eq!(notice.title.as_deref(), Some("Credenciales incorrectas"));
        }
    }

    #[test]
    fn test_form_requires_both_fields() {
        let form = SignInForm {
            name: "bob".to_owned(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has("password"));
        assert!(!errors.has("name"));
    }
}

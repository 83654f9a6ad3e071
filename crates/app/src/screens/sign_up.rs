//! Sign-up screen.

use crate::api::{AuthApi, SignUpRequest};
use crate::forms::FieldErrors;
use crate::navigator::Route;
use crate::notice::Notice;
use crate::state::AppContext;

/// Registration fields plus UI-only state.
///
/// `confirm_password` and the visibility toggles never reach the wire.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub rol: Option<i32>,
}

impl SignUpForm {
    /// The field rules of the registration form.
    ///
    /// The password/confirmation match is checked separately in
    /// [`SignUpScreen::submit`], before these rules run.
    ///
    /// # Errors
    ///
    /// Returns the failed field rules.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        errors.min_len("name", &self.name, 3);
        errors.require("email", &self.email);
        errors.email("email", &self.email);
        errors.require("phone", &self.phone);
        errors.min_len("phone", &self.phone, 10);
        errors.require("password", &self.password);
        errors.min_len("password", &self.password, 6);
        errors.require("confirm_password", &self.confirm_password);
        errors.require_choice("rol", self.rol.as_ref());
        errors.into_result()
    }
}

/// What a submit attempt asks the view layer to do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpOutcome {
    /// Toast to show, if any.
    pub notice: Option<Notice>,
    /// Route to navigate to on success.
    pub navigate: Option<Route>,
}

/// Controller for the sign-up screen.
pub struct SignUpScreen {
    auth: AuthApi,
    /// Current form values.
    pub form: SignUpForm,
    /// Whether a submit is in flight.
    pub loading: bool,
    /// Password field visibility toggle.
    pub show_password: bool,
    /// Confirmation field visibility toggle.
    pub show_confirm_password: bool,
    /// Whether failed validation has marked the fields.
    pub touched: bool,
}

impl SignUpScreen {
    /// Create the screen from the shared context.
    #[must_use]
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            auth: ctx.auth().clone(),
            form: SignUpForm::default(),
            loading: false,
            show_password: false,
            show_confirm_password: false,
            touched: false,
        }
    }

    /// Submit the registration.
    ///
    /// The password/confirmation comparison runs first and on its own:
    /// a mismatch produces its message without marking the other fields
    /// or touching the backend. No local state is created on success -
    /// the user signs in afterwards like anyone else.
    pub async fn submit(&mut self) -> SignUpOutcome {
        if self.form.password != self.form.confirm_password {
            return SignUpOutcome {
                notice: Some(Notice::warning("Las contraseñas no coinciden")),
                navigate: None,
            };
        }

        if self.form.validate().is_err() {
            self.touched = true;
            return SignUpOutcome {
                notice: Some(Notice::warning("Completa todos los campos correctamente")),
                navigate: None,
            };
        }
        let Some(rol) = self.form.rol else {
            return SignUpOutcome::default();
        };

        self.loading = true;

        let request = SignUpRequest {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            phone: Some(self.form.phone.clone()),
            password: self.form.password.clone(),
            rol,
        };
        let result = self.auth.sign_up(&request).await;

        self.loading = false;

        match result {
            Ok(_) => SignUpOutcome {
                notice: Some(Notice::success("¡Registro exitoso! Bienvenido a ComandAS")),
                navigate: Some(Route::SignIn),
            },
            Err(err) => {
                tracing::error!(error = %err, "sign-up failed");
                SignUpOutcome {
                    notice: Some(Notice::error("Error al registrarse. Verifica tus datos.")),
                    navigate: None,
                }
            }
        }
    }

    /// Flip password visibility.
    pub const fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Flip confirmation visibility.
    pub const fn toggle_confirm_password(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }
}

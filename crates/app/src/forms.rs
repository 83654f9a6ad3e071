//! Field-level form validation.
//!
//! The small rule set the screens share: presence, minimum length, and
//! email shape. Minimum-length and email rules only
//! fire on non-empty values - presence is its own rule, so an optional
//! field can carry a length rule without becoming required.

use comandas_core::Email;

/// A single failed field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the rule belongs to.
    pub field: &'static str,
    /// Human-readable description of the failure.
    pub message: String,
}

/// Accumulated validation failures for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Start an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-blank value.
    pub fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{field} is required"));
        }
    }

    /// Require that an optional selection was made.
    pub fn require_choice<T>(&mut self, field: &'static str, value: Option<&T>) {
        if value.is_none() {
            self.push(field, format!("{field} is required"));
        }
    }

    /// Require a minimum length, ignoring blank values.
    pub fn min_len(&mut self, field: &'static str, value: &str, min: usize) {
        if !value.is_empty() && value.chars().count() < min {
            self.push(field, format!("{field} must be at least {min} characters"));
        }
    }

    /// Require email shape, ignoring blank values.
    pub fn email(&mut self, field: &'static str, value: &str) {
        if !value.is_empty()
            && let Err(err) = Email::parse(value)
        {
            self.push(field, err.to_string());
        }
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.errors.push(FieldError { field, message });
    }

    /// Whether every rule passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The collected failures.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether a specific field failed.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when every rule passed, `Err(self)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns the collected failures when any rule failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", error.message)?;
            first = false;
        }
        Ok(())
    }
}

//! Transient user-facing notices.
//!
//! The view layer renders these however it likes - toast, snackbar,
//! alert dialog. Screens only decide the severity and the words.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity, drives the rendering style.
    pub level: NoticeLevel,
    /// Short headline; plain snackbar-style notices have none.
    pub title: Option<String>,
    /// Body text.
    pub message: String,
}

impl Notice {
    /// A success notice with just a message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: None,
            message: message.into(),
        }
    }

    /// An informational notice with just a message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: None,
            message: message.into(),
        }
    }

    /// A warning notice with just a message.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: None,
            message: message.into(),
        }
    }

    /// An error notice with just a message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: None,
            message: message.into(),
        }
    }

    /// Attach a headline.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let notice = Notice::warning("Verifica tu contraseña.").with_title("Contraseña incorrecta");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title.as_deref(), Some("Contraseña incorrecta"));
        assert_eq!(notice.message, "Verifica tu contraseña.");

        let plain = Notice::success("Usuario Creado");
        assert_eq!(plain.title, None);
    }
}

//! Authentication error types.

use thiserror::Error;

/// Message shown when a required field is left blank.
pub const INCOMPLETE_FORM_MESSAGE: &str = "Не все поля заполнены";

/// Category of a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any request was made.
    Validation,
    /// Rejected by the authentication endpoint.
    Authentication,
    /// The request or its response could not be completed.
    Transport,
}

/// Authentication error variants.
///
/// Every variant carries display-ready text; `Display` yields exactly that
/// text so the message reaches the user unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Authentication { message: String },

    #[error("{message}")]
    Transport { message: String },
}

impl AuthError {
    /// Creates validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates the validation error for a form with blank fields.
    #[must_use]
    pub fn incomplete_form() -> Self {
        Self::validation(INCOMPLETE_FORM_MESSAGE)
    }

    /// Creates authentication error carrying the server's message.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates transport error.
    ///
    /// Blank messages are replaced so the user always sees some text.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "request failed".to_string()
        } else {
            message
        };
        Self::Transport { message }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Transport { .. } => ErrorKind::Transport,
        }
    }

    /// Returns the message payload.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Authentication { message }
            | Self::Transport { message } => message,
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_verbatim() {
        let error = AuthError::authentication("Такого пользователя нет либо пароли не совпадают");
        assert_eq!(
            error.to_string(),
            "Такого пользователя нет либо пароли не совпадают"
        );
        assert_eq!(error.kind(), ErrorKind::Authentication);
    }

    #[test]
    fn test_incomplete_form_message() {
        let error = AuthError::incomplete_form();
        assert_eq!(error.message(), "Не все поля заполнены");
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_transport_message_never_empty() {
        let error = AuthError::transport("  ");
        assert!(!error.message().is_empty());
        assert!(error.is_network_error());
    }
}

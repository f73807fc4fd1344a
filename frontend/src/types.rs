//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Notification Types** - Transient toasts
//! - **Error Types** - Frontend error handling

use std::fmt;

// =============================================================================
// Notification Types
// =============================================================================

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ️",
            ToastLevel::Success => "✅",
            ToastLevel::Error => "❌",
        }
    }
}

/// A notification on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Unique within the session, used to dismiss it
    pub id: u64,
    /// Severity level
    pub level: ToastLevel,
    /// Message shown to the user
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant ends up as an error toast; none crosses a component.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// The API answered with a non-success status.
    Submission { status: u16, body: String },
    /// Clipboard write refused or unavailable.
    Clipboard(String),
    /// Validation image could not be saved.
    Download(String),
    /// Invalid form data.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Falha de conexão: {}", msg),
            AppError::Submission { status, body } => {
                write!(f, "Erro do servidor ({}): {}", status, body)
            }
            AppError::Clipboard(msg) => write!(f, "Área de transferência indisponível: {}", msg),
            AppError::Download(msg) => write!(f, "Falha no download: {}", msg),
            AppError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<collabhub::WaitlistError> for AppError {
    fn from(err: collabhub::WaitlistError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Submission { status: 503, body: "down".into() };
        assert_eq!(err.to_string(), "Erro do servidor (503): down");
    }

    #[test]
    fn test_waitlist_error_becomes_validation() {
        let err: AppError = collabhub::WaitlistError::MissingField(collabhub::WaitlistField::Email).into();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("e-mail")));
        assert_eq!(err.to_string(), "Preencha o campo obrigatório: e-mail");
    }
}

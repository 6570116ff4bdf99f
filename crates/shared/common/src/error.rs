//! Unified error handling for the admin panel client.
//!
//! Two families of failures exist:
//! - input validation, reported next to the offending field
//! - remote calls, reported through a blocking notification
//!
//! Neither is fatal; callers recover by informing the user.

use domain::ValidationError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    Validation(String),

    // Remote calls. Transport failures and server-reported failures share
    // this variant: the endpoints give no way to tell them apart reliably.
    #[error("{0}")]
    Remote(String),

    // Configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Terminal dialogs
    #[error("Prompt failed: {0}")]
    Prompt(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Remote(_) => "REMOTE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Prompt(_) => "PROMPT_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Remote(msg) => msg.clone(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Check if the error came from user input
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    /// Report the first failing field, following `order`.
    pub fn from_validation(errors: &validator::ValidationErrors, order: &[&str]) -> Self {
        let message = domain::inputs::first_error(errors, order)
            .unwrap_or_else(|| "Validation failed".to_string());
        AppError::Validation(message)
    }
}

// Without a caller-supplied order, fields are reported alphabetically.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors
            .keys()
            .map(|name| {
                let name: &str = name.as_ref();
                name
            })
            .collect();
        fields.sort_unstable();
        AppError::from_validation(&errors, &fields)
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::debug!("HTTP transport error: {:?}", err);
        if err.is_timeout() {
            AppError::Remote("The server did not answer in time".to_string())
        } else if err.is_connect() {
            AppError::Remote("Could not connect to the server".to_string())
        } else if err.is_decode() {
            AppError::Remote("Unexpected response from the server".to_string())
        } else {
            AppError::Remote(format!("Request failed: {}", err))
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        AppError::Remote(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn prompt(msg: impl Into<String>) -> Self {
        AppError::Prompt(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

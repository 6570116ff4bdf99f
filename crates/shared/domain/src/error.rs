//! Domain-level errors.
//!
//! These errors represent rule violations on user input. They are independent
//! of infrastructure concerns (HTTP, terminal, rendering).

use thiserror::Error;

/// What a length or content rule was checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Dni,
    Password,
}

impl Subject {
    /// Unit used when reporting length bounds
    pub fn length_unit(&self) -> &'static str {
        match self {
            Subject::Dni => "digits",
            Subject::Password => "characters",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Dni => write!(f, "DNI"),
            Subject::Password => write!(f, "Password"),
        }
    }
}

/// Reasons a candidate value fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was entered
    #[error("{0} cannot be empty")]
    Empty(Subject),

    /// Contains a character other than an ASCII digit
    #[error("{0} must contain only numbers")]
    NonNumeric(Subject),

    /// Length outside the accepted range
    #[error("{field} must have between {min} and {max} {}", .field.length_unit())]
    BadLength {
        field: Subject,
        min: usize,
        max: usize,
    },

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one special character")]
    MissingSymbol,

    /// Confirmation differs from the first entered value
    #[error("Passwords do not match")]
    Mismatch,

    /// A required form field is missing or blank
    #[error("This field is required")]
    Required,

    #[error("Unknown user status: {0}")]
    UnknownStatus(String),
}

impl ValidationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Empty(_) => "empty",
            ValidationError::NonNumeric(_) => "non_numeric",
            ValidationError::BadLength { .. } => "bad_length",
            ValidationError::MissingUppercase => "missing_uppercase",
            ValidationError::MissingSymbol => "missing_symbol",
            ValidationError::Mismatch => "mismatch",
            ValidationError::Required => "required",
            ValidationError::UnknownStatus(_) => "unknown_status",
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, ValidationError>;

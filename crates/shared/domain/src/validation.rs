//! Input validation rules for identifiers and passwords.
//!
//! Every function here is pure: the same input always yields the same
//! result and nothing is retained between calls.

use std::borrow::Cow;

use serde::Serialize;

use crate::constants::{
    MAX_DNI_LENGTH, MAX_PASSWORD_LENGTH, MIN_DNI_LENGTH, MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS,
};
use crate::error::{DomainResult, Subject, ValidationError};

/// Outcome of a single validation, ready to be shown next to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    /// Failure reason, `None` when valid
    #[serde(skip)]
    pub reason: Option<ValidationError>,
}

impl ValidationResult {
    /// A passing result with a confirmation message
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
            reason: None,
        }
    }

    /// A failing result carrying its reason
    pub fn invalid(reason: ValidationError) -> Self {
        Self {
            is_valid: false,
            message: reason.to_string(),
            reason: Some(reason),
        }
    }

    fn from_check(check: DomainResult<()>, ok_message: &str) -> Self {
        match check {
            Ok(()) => Self::valid(ok_message),
            Err(reason) => Self::invalid(reason),
        }
    }
}

/// Check a DNI: non-empty, digits only, 6 to 8 digits long.
pub fn check_dni(input: &str) -> DomainResult<()> {
    if input.is_empty() {
        return Err(ValidationError::Empty(Subject::Dni));
    }

    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonNumeric(Subject::Dni));
    }

    // All ASCII at this point, so bytes == characters
    if !(MIN_DNI_LENGTH..=MAX_DNI_LENGTH).contains(&input.len()) {
        return Err(ValidationError::BadLength {
            field: Subject::Dni,
            min: MIN_DNI_LENGTH,
            max: MAX_DNI_LENGTH,
        });
    }

    Ok(())
}

/// Check password strength: length first, then uppercase, then symbol.
pub fn check_password(input: &str) -> DomainResult<()> {
    let length = input.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(ValidationError::BadLength {
            field: Subject::Password,
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        });
    }

    if !input.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::MissingUppercase);
    }

    if !input.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(ValidationError::MissingSymbol);
    }

    Ok(())
}

/// Validate a DNI and describe the outcome.
pub fn validate_dni(input: &str) -> ValidationResult {
    ValidationResult::from_check(check_dni(input), "DNI is valid")
}

/// Validate a password and describe the outcome.
pub fn validate_password(input: &str) -> ValidationResult {
    ValidationResult::from_check(check_password(input), "Password is valid")
}

/// Exact equality, no trimming or case folding.
pub fn passwords_match(a: &str, b: &str) -> bool {
    a == b
}

// =============================================================================
// `validator` crate adapters
// =============================================================================

/// `#[validate(custom(function = ...))]` adapter for DNI fields
pub fn validate_dni_field(value: &str) -> Result<(), validator::ValidationError> {
    check_dni(value).map_err(into_field_error)
}

/// `#[validate(custom(function = ...))]` adapter for password fields
pub fn validate_password_field(value: &str) -> Result<(), validator::ValidationError> {
    check_password(value).map_err(into_field_error)
}

/// `#[validate(custom(function = ...))]` adapter for required fields
pub fn validate_required_field(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(into_field_error(ValidationError::Required));
    }
    Ok(())
}

fn into_field_error(err: ValidationError) -> validator::ValidationError {
    let mut error = validator::ValidationError::new(err.code());
    error.message = Some(Cow::Owned(err.to_string()));
    error
}

//! Validated form payloads.
//!
//! Field rules are declared with `validator` derive attributes and delegate to
//! the functions in [`crate::validation`].

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::validation::{validate_dni_field, validate_password_field, validate_required_field};

/// Register form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegistrationInput {
    /// User DNI
    #[validate(custom(function = "validate_dni_field"))]
    pub dni: String,
    /// Candidate password
    #[serde(skip_serializing)]
    #[validate(custom(function = "validate_password_field"))]
    pub password: String,
    /// Must equal `password`
    #[serde(skip_serializing)]
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

impl RegistrationInput {
    /// Order in which failures are reported
    pub const FIELD_ORDER: [&'static str; 3] = ["dni", "confirm_password", "password"];

    /// Validate and return the first failure message, if any.
    pub fn first_error(&self) -> Option<String> {
        self.validate()
            .err()
            .and_then(|errors| first_error(&errors, &Self::FIELD_ORDER))
    }
}

/// Administrator password change payload
#[derive(Clone, Default, Serialize, Validate)]
pub struct AdminPasswordChange {
    #[validate(custom(function = "validate_required_field"))]
    pub current_password: String,
    #[validate(custom(function = "validate_password_field"))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

// Don't expose passwords in debug output
impl std::fmt::Debug for AdminPasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminPasswordChange")
            .field("current_password", &"[REDACTED]")
            .field("new_password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl AdminPasswordChange {
    /// Order in which failures are reported
    pub const FIELD_ORDER: [&'static str; 3] =
        ["current_password", "confirm_password", "new_password"];

    /// Validate and return the first failure message, if any.
    pub fn first_error(&self) -> Option<String> {
        self.validate()
            .err()
            .and_then(|errors| first_error(&errors, &Self::FIELD_ORDER))
    }
}

/// Pick the first error message following `order`.
///
/// `validator` reports errors in a map, so the order must be imposed here to
/// keep messages deterministic.
pub fn first_error(errors: &ValidationErrors, order: &[&str]) -> Option<String> {
    let field_errors = errors.field_errors();
    order.iter().find_map(|field| {
        field_errors
            .iter()
            .find(|(name, _)| {
                let name: &str = name.as_ref();
                name == *field
            })
            .and_then(|(_, list)| list.first())
            .map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field))
            })
    })
}

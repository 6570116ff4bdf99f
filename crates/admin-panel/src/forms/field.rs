//! Per-field rules and validation state.

use domain::{passwords_match, validate_dni, validate_password, ValidationError, ValidationResult};

use super::surface::FormSurface;

/// Rule applied to a field when it loses focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// DNI format
    Dni,
    /// Password strength
    Password,
    /// Must equal the live value of another field
    Confirms(&'static str),
}

impl FieldRule {
    /// Evaluate `value`; `Confirms` re-reads the other field from `surface`.
    pub fn evaluate<S: FormSurface + ?Sized>(&self, value: &str, surface: &S) -> ValidationResult {
        match self {
            FieldRule::Dni => validate_dni(value),
            FieldRule::Password => validate_password(value),
            FieldRule::Confirms(other) => {
                let expected = surface.value(other).unwrap_or_default();
                if passwords_match(value, &expected) {
                    ValidationResult::valid("Passwords match")
                } else {
                    ValidationResult::invalid(ValidationError::Mismatch)
                }
            }
        }
    }
}

/// Validation state of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Never evaluated
    #[default]
    Untouched,
    /// Evaluated at least once; holds the latest outcome
    Validated { valid: bool, message: String },
}

impl FieldState {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldState::Validated { valid: true, .. })
    }
}

impl From<&ValidationResult> for FieldState {
    fn from(result: &ValidationResult) -> Self {
        FieldState::Validated {
            valid: result.is_valid,
            message: result.message.clone(),
        }
    }
}

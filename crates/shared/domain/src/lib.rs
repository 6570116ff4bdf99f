//! Domain layer - Validation rules and value types for the admin panel.
//!
//! This crate contains pure logic with no infrastructure dependencies.
//! Everything here is deterministic and free of side effects.

pub mod constants;
pub mod error;
pub mod inputs;
pub mod status;
pub mod validation;

pub use constants::*;
pub use error::{DomainResult, Subject, ValidationError};
pub use inputs::{AdminPasswordChange, RegistrationInput};
pub use status::UserStatus;
pub use validation::{
    check_dni, check_password, passwords_match, validate_dni, validate_password,
    ValidationResult,
};

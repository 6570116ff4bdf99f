//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Statuses
// =============================================================================

/// Status of a freshly registered user that never logged in
pub const STATUS_PRISTINE: &str = "inmaculado";

/// Status of a user with a successful login
pub const STATUS_ACTIVE: &str = "activo";

/// Status after repeated failed logins in a short window
pub const STATUS_LOCKED: &str = "bloqueado";

/// Status of a user without logins for a long period
pub const STATUS_PAUSED: &str = "pausado";

/// Status of a user with failed logins on consecutive days
pub const STATUS_FLAGGED: &str = "alertado";

/// Status set manually by an administrator
pub const STATUS_SUSPENDED: &str = "suspendido";

/// All valid status values
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PRISTINE,
    STATUS_ACTIVE,
    STATUS_LOCKED,
    STATUS_PAUSED,
    STATUS_FLAGGED,
    STATUS_SUSPENDED,
];

// =============================================================================
// Validation
// =============================================================================

/// Minimum DNI length (digits)
pub const MIN_DNI_LENGTH: usize = 6;

/// Maximum DNI length (digits)
pub const MAX_DNI_LENGTH: usize = 8;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length requirement
pub const MAX_PASSWORD_LENGTH: usize = 12;

/// Symbols a password must draw at least one character from
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

// =============================================================================
// Form fields
// =============================================================================

/// Identifier input of the register form
pub const FIELD_ID: &str = "id";

/// Identifier input of the login form
pub const FIELD_IDENTIFIER: &str = "identifier";

/// Password input (register and login forms)
pub const FIELD_PASSWORD: &str = "password";

/// Password confirmation input
pub const FIELD_CONFIRM_PASSWORD: &str = "confirm_password";

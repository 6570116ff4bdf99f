//! User status vocabulary shared with the server.

use serde::{Deserialize, Serialize};

use crate::constants::{
    STATUS_ACTIVE, STATUS_FLAGGED, STATUS_LOCKED, STATUS_PAUSED, STATUS_PRISTINE,
    STATUS_SUSPENDED,
};
use crate::error::ValidationError;

/// Account status as stored by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    #[serde(rename = "inmaculado")]
    Pristine,
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "bloqueado")]
    Locked,
    #[serde(rename = "pausado")]
    Paused,
    #[serde(rename = "alertado")]
    Flagged,
    #[serde(rename = "suspendido")]
    Suspended,
}

impl UserStatus {
    pub const ALL: [UserStatus; 6] = [
        UserStatus::Pristine,
        UserStatus::Active,
        UserStatus::Locked,
        UserStatus::Paused,
        UserStatus::Flagged,
        UserStatus::Suspended,
    ];

    /// Wire value sent in `new_status`
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Pristine => STATUS_PRISTINE,
            UserStatus::Active => STATUS_ACTIVE,
            UserStatus::Locked => STATUS_LOCKED,
            UserStatus::Paused => STATUS_PAUSED,
            UserStatus::Flagged => STATUS_FLAGGED,
            UserStatus::Suspended => STATUS_SUSPENDED,
        }
    }

    /// Check if this status prevents logging in
    pub fn is_blocked(&self) -> bool {
        matches!(
            self,
            UserStatus::Locked | UserStatus::Paused | UserStatus::Flagged | UserStatus::Suspended
        )
    }
}

impl std::str::FromStr for UserStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownStatus(s.to_string()))
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

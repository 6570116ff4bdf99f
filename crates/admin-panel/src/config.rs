//! Admin panel configuration.

use std::env;

use common::{HttpClientConfig, LogConfig, DEFAULT_BASE_URL};

/// Page reloaded after a successful status change
pub const DEFAULT_REFRESH_PATH: &str = "/admin/users";

/// Admin panel configuration.
#[derive(Clone)]
pub struct PanelConfig {
    /// Server connection settings
    pub http: HttpClientConfig,
    /// Page reloaded to refresh the user list
    pub refresh_path: String,
    /// Administrator password used to open a session
    admin_password: Option<String>,
    /// Logging settings
    pub log: LogConfig,
}

impl std::fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelConfig")
            .field("http", &self.http)
            .field("refresh_path", &self.refresh_path)
            .field("admin_password", &"[REDACTED]")
            .field("log", &self.log)
            .finish()
    }
}

impl PanelConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            http: HttpClientConfig {
                base_url: env::var("ADMIN_PANEL_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
                request_timeout_ms: env::var("ADMIN_PANEL_TIMEOUT_MS")
                    .ok()
                    .and_then(|t| t.parse().ok()),
            },
            refresh_path: env::var("ADMIN_PANEL_REFRESH_PATH")
                .unwrap_or_else(|_| DEFAULT_REFRESH_PATH.to_string()),
            admin_password: env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty()),
            log: LogConfig {
                level: env::var("ADMIN_PANEL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        }
    }

    /// Override the server base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http.base_url = base_url.into();
        self
    }

    /// Set the administrator password.
    pub fn with_admin_password(mut self, password: impl Into<String>) -> Self {
        self.admin_password = Some(password.into());
        self
    }

    /// Administrator password, if configured
    pub fn admin_password(&self) -> Option<&str> {
        self.admin_password.as_deref()
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            http: HttpClientConfig::default(),
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            admin_password: None,
            log: LogConfig::default(),
        }
    }
}

//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Default server the panel talks to
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,
    /// Request timeout in milliseconds. `None` waits indefinitely.
    pub request_timeout_ms: Option<u64>,
}

impl HttpClientConfig {
    /// Join a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

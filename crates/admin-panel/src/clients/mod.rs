//! HTTP clients for the panel server.

mod admin_client;
mod page_client;

use std::time::Duration;

use common::{AppError, AppResult, HttpClientConfig};

pub use admin_client::{
    parse_action_response, ActionResponse, AdminApi, AdminClient, ADMIN_LOGIN_PATH,
    CHANGE_ADMIN_PASSWORD_PATH, CHANGE_PASSWORD_PATH, CHANGE_STATUS_PATH,
};
pub use page_client::{PageClient, ViewRefresh};

#[cfg(any(test, feature = "test-utils"))]
pub use admin_client::MockAdminApi;
#[cfg(any(test, feature = "test-utils"))]
pub use page_client::MockViewRefresh;

/// Build the shared HTTP client.
///
/// Clones share one cookie jar, so a session opened by [`AdminClient::login`]
/// is visible to every client built from the same instance.
pub fn build_http_client(config: &HttpClientConfig) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().cookie_store(true);
    if let Some(ms) = config.request_timeout_ms {
        builder = builder.timeout(Duration::from_millis(ms));
    }
    builder
        .build()
        .map_err(|e| AppError::config(format!("Failed to build HTTP client: {}", e)))
}

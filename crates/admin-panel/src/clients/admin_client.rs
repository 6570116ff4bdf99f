//! HTTP client for the admin endpoints.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};
use validator::Validate;

use common::{AppError, AppResult, HttpClientConfig};
use domain::{AdminPasswordChange, UserStatus};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const CHANGE_STATUS_PATH: &str = "/admin/change_status";
pub const CHANGE_PASSWORD_PATH: &str = "/admin/change_password";
pub const CHANGE_ADMIN_PASSWORD_PATH: &str = "/admin/change_admin_password";

/// JSON body returned by the admin endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionResponse {
    /// A bare successful response
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }
}

/// Decode an admin endpoint response.
///
/// The server answers failures with a non-2xx status and the same JSON shape,
/// so the body is decoded regardless of status.
pub fn parse_action_response(status: u16, body: &str) -> AppResult<ActionResponse> {
    match serde_json::from_str::<ActionResponse>(body) {
        Ok(response) if response.success => Ok(response),
        Ok(response) => Err(AppError::remote(
            response
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| format!("Request failed with status {}", status)),
        )),
        Err(_) => Err(AppError::remote(format!(
            "Request failed with status {}",
            status
        ))),
    }
}

/// Admin operations trait for dependency injection.
///
/// Each call is a single request: no retry, no cancellation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Set a user's status
    async fn change_status(&self, id: &str, new_status: UserStatus) -> AppResult<ActionResponse>;

    /// Replace a user's password
    async fn change_password(&self, id: &str, new_password: &str) -> AppResult<ActionResponse>;

    /// Replace the administrator password
    async fn change_admin_password(
        &self,
        change: &AdminPasswordChange,
    ) -> AppResult<ActionResponse>;
}

/// reqwest-backed implementation of [`AdminApi`].
pub struct AdminClient {
    client: reqwest::Client,
    config: HttpClientConfig,
}

impl AdminClient {
    /// Create a client on top of a shared HTTP client.
    pub fn new(client: reqwest::Client, config: HttpClientConfig) -> Self {
        Self { client, config }
    }

    /// Open an administrator session.
    ///
    /// The server redirects to the dashboard on success and renders the login
    /// page again on failure; the session cookie lands in the shared jar.
    pub async fn login(&self, password: &str) -> AppResult<()> {
        if password.is_empty() {
            return Err(AppError::validation("Administrator password is required"));
        }

        let url = self.config.url(ADMIN_LOGIN_PATH);
        debug!("Opening admin session at {}", url);

        let response = self
            .client
            .post(&url)
            .form(&[("password", password)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::remote(format!(
                "Login failed with status {}",
                status.as_u16()
            )));
        }

        if response.url().path().ends_with(ADMIN_LOGIN_PATH) {
            return Err(AppError::remote("Administrator password rejected"));
        }

        info!("Admin session established");
        Ok(())
    }

    async fn post_action(&self, path: &str, form: &[(&str, &str)]) -> AppResult<ActionResponse> {
        let url = self.config.url(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).form(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_action_response(status, &body)
    }
}

#[async_trait]
impl AdminApi for AdminClient {
    async fn change_status(&self, id: &str, new_status: UserStatus) -> AppResult<ActionResponse> {
        self.post_action(
            CHANGE_STATUS_PATH,
            &[("id", id), ("new_status", new_status.as_str())],
        )
        .await
    }

    async fn change_password(&self, id: &str, new_password: &str) -> AppResult<ActionResponse> {
        self.post_action(
            CHANGE_PASSWORD_PATH,
            &[("id", id), ("new_password", new_password)],
        )
        .await
    }

    async fn change_admin_password(
        &self,
        change: &AdminPasswordChange,
    ) -> AppResult<ActionResponse> {
        change.validate().map_err(|errors| {
            AppError::from_validation(&errors, &AdminPasswordChange::FIELD_ORDER)
        })?;

        self.post_action(
            CHANGE_ADMIN_PASSWORD_PATH,
            &[
                ("current_password", change.current_password.as_str()),
                ("new_password", change.new_password.as_str()),
                ("confirm_password", change.confirm_password.as_str()),
            ],
        )
        .await
    }
}

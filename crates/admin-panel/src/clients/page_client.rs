//! HTTP client for full pages: form submissions and view reloads.

use async_trait::async_trait;
use tracing::{debug, info};

use common::{AppError, AppResult, HttpClientConfig};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Full view reload triggered after a state-changing action.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ViewRefresh: Send + Sync {
    async fn refresh(&self) -> AppResult<()>;
}

/// Client for page-level requests.
pub struct PageClient {
    client: reqwest::Client,
    config: HttpClientConfig,
    refresh_path: String,
}

impl PageClient {
    pub fn new(
        client: reqwest::Client,
        config: HttpClientConfig,
        refresh_path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            config,
            refresh_path: refresh_path.into(),
        }
    }

    /// Submit form fields as-is to `path`, returning the response status.
    pub async fn submit(&self, path: &str, fields: &[(String, String)]) -> AppResult<u16> {
        let url = self.config.url(path);
        debug!("Submitting {} field(s) to {}", fields.len(), url);

        let response = self.client.post(&url).form(fields).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::remote(format!(
                "Submission failed with status {}",
                status.as_u16()
            )));
        }

        Ok(status.as_u16())
    }

    /// Fetch a page again.
    pub async fn reload(&self, path: &str) -> AppResult<()> {
        let url = self.config.url(path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::remote(format!(
                "Reload of {} failed with status {}",
                path,
                status.as_u16()
            )));
        }

        info!("Reloaded {}", path);
        Ok(())
    }
}

#[async_trait]
impl ViewRefresh for PageClient {
    async fn refresh(&self) -> AppResult<()> {
        self.reload(&self.refresh_path).await
    }
}

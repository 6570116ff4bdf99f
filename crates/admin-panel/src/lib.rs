//! Admin Panel Client Library
//!
//! Client-side glue for the authentication/admin panel:
//!
//! - **validation**: DNI and password rules (re-exported from `domain`)
//! - **actions**: admin status and password changes over HTTP
//! - **forms**: inline per-field validation and submit guards
//! - **clients**: reqwest clients for the panel server
//! - **prompt**: injected confirmation/prompt/alert dialogs

pub mod actions;
pub mod cli;
pub mod clients;
pub mod commands;
pub mod config;
pub mod forms;
pub mod prompt;

use std::sync::Arc;

use tracing::info;

use common::{AppError, AppResult};

pub use actions::{ActionOutcome, AdminActions};
pub use config::PanelConfig;
pub use domain::validation;
pub use prompt::{TerminalPrompt, UserPrompt};

use crate::clients::{build_http_client, AdminClient, PageClient};

/// Open an admin session and wire [`AdminActions`] to the server.
///
/// Uses the configured administrator password, or asks for one.
pub async fn connect(config: &PanelConfig, prompt: Arc<dyn UserPrompt>) -> AppResult<AdminActions> {
    let http = build_http_client(&config.http)?;
    let admin_client = AdminClient::new(http.clone(), config.http.clone());

    let password = match config.admin_password() {
        Some(password) => password.to_string(),
        None => prompt
            .prompt_text("Administrator password:")
            .ok_or_else(|| AppError::prompt("administrator password not provided"))?,
    };
    admin_client.login(&password).await?;
    info!("Connected to {}", config.http.base_url);

    let page_client = PageClient::new(http, config.http.clone(), config.refresh_path.clone());

    Ok(AdminActions::new(
        Arc::new(admin_client),
        prompt,
        Arc::new(page_client),
    ))
}

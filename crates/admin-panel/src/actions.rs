//! Admin actions: user status and password changes.
//!
//! Each action is gated by a dialog, validated client-side where it applies,
//! and then issues exactly one request. Every error ends as a notification;
//! nothing propagates past the current interaction.

use std::sync::Arc;

use tracing::{debug, info, warn};

use domain::{validate_password, AdminPasswordChange, UserStatus};

use crate::clients::{AdminApi, ViewRefresh};
use crate::prompt::UserPrompt;

/// What an action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Declined or cancelled by the user; no request sent
    Cancelled,
    /// Failed client-side validation; no request sent
    Rejected(String),
    /// Request succeeded
    Completed(String),
    /// Request failed (transport or server-reported)
    Failed(String),
}

impl ActionOutcome {
    /// Check if a request was sent
    pub fn reached_server(&self) -> bool {
        matches!(self, ActionOutcome::Completed(_) | ActionOutcome::Failed(_))
    }
}

/// Admin actions with injected transport, dialogs and view refresh.
pub struct AdminActions {
    api: Arc<dyn AdminApi>,
    prompt: Arc<dyn UserPrompt>,
    view: Arc<dyn ViewRefresh>,
}

impl AdminActions {
    pub fn new(
        api: Arc<dyn AdminApi>,
        prompt: Arc<dyn UserPrompt>,
        view: Arc<dyn ViewRefresh>,
    ) -> Self {
        Self { api, prompt, view }
    }

    /// Change a user's status after confirmation, then refresh the view.
    pub async fn change_status(&self, id: &str, new_status: &str) -> ActionOutcome {
        let status = match new_status.parse::<UserStatus>() {
            Ok(status) => status,
            Err(e) => {
                let message = e.to_string();
                self.prompt.alert(&message);
                return ActionOutcome::Rejected(message);
            }
        };

        let mut question = format!("Change the status of user {} to '{}'?", id, status);
        if status.is_blocked() {
            question.push_str(" The user will not be able to log in.");
        }
        if !self.prompt.confirm(&question) {
            debug!("Status change for {} declined", id);
            return ActionOutcome::Cancelled;
        }

        match self.api.change_status(id, status).await {
            Ok(_) => {
                let message = format!("Status of user {} changed to '{}'", id, status);
                info!("{}", message);
                self.prompt.alert(&message);
                self.refresh().await;
                ActionOutcome::Completed(message)
            }
            Err(e) => self.fail("Status change", id, e.user_message()),
        }
    }

    /// Prompt for a new password, validate it, then send it.
    pub async fn change_password(&self, id: &str) -> ActionOutcome {
        let prompt = format!("New password for user {}:", id);
        let candidate = match self.prompt.prompt_text(&prompt) {
            Some(text) if !text.is_empty() => text,
            _ => {
                debug!("Password change for {} cancelled", id);
                return ActionOutcome::Cancelled;
            }
        };

        let check = validate_password(&candidate);
        if !check.is_valid {
            self.prompt.alert(&check.message);
            return ActionOutcome::Rejected(check.message);
        }

        match self.api.change_password(id, &candidate).await {
            Ok(_) => {
                let message = format!("Password of user {} changed", id);
                info!("{}", message);
                self.prompt.alert(&message);
                ActionOutcome::Completed(message)
            }
            Err(e) => self.fail("Password change", id, e.user_message()),
        }
    }

    /// Prompt for the current and new administrator password and send them.
    pub async fn change_admin_password(&self) -> ActionOutcome {
        let Some(current_password) = self.prompt.prompt_text("Current administrator password:")
        else {
            return ActionOutcome::Cancelled;
        };
        let Some(new_password) = self.prompt.prompt_text("New administrator password:") else {
            return ActionOutcome::Cancelled;
        };
        let Some(confirm_password) = self.prompt.prompt_text("Repeat the new password:") else {
            return ActionOutcome::Cancelled;
        };

        let change = AdminPasswordChange {
            current_password,
            new_password,
            confirm_password,
        };
        if let Some(message) = change.first_error() {
            self.prompt.alert(&message);
            return ActionOutcome::Rejected(message);
        }

        match self.api.change_admin_password(&change).await {
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Administrator password changed".to_string());
                info!("{}", message);
                self.prompt.alert(&message);
                ActionOutcome::Completed(message)
            }
            Err(e) => self.fail("Administrator password change", "admin", e.user_message()),
        }
    }

    async fn refresh(&self) {
        if let Err(e) = self.view.refresh().await {
            warn!("View refresh failed: {}", e.user_message());
        }
    }

    fn fail(&self, action: &str, id: &str, message: String) -> ActionOutcome {
        warn!("{} for {} failed: {}", action, id, message);
        self.prompt.alert(&format!("Error: {}", message));
        ActionOutcome::Failed(message)
    }
}

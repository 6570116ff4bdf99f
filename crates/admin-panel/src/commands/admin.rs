//! Admin commands - User status and password changes.

use std::sync::Arc;

use common::{AppError, AppResult};

use crate::actions::ActionOutcome;
use crate::cli::args::{ChangeStatusArgs, UserArgs};
use crate::config::PanelConfig;
use crate::connect;
use crate::prompt::TerminalPrompt;

/// Execute the change-status command
pub async fn execute_change_status(args: ChangeStatusArgs, config: PanelConfig) -> AppResult<()> {
    let actions = connect(&config, Arc::new(TerminalPrompt::masked())).await?;
    into_result(actions.change_status(&args.id, &args.status).await)
}

/// Execute the change-password command
pub async fn execute_change_password(args: UserArgs, config: PanelConfig) -> AppResult<()> {
    let actions = connect(&config, Arc::new(TerminalPrompt::masked())).await?;
    into_result(actions.change_password(&args.id).await)
}

/// Execute the change-admin-password command
pub async fn execute_change_admin_password(config: PanelConfig) -> AppResult<()> {
    let actions = connect(&config, Arc::new(TerminalPrompt::masked())).await?;
    into_result(actions.change_admin_password().await)
}

/// The user was already notified; this only sets the exit status.
fn into_result(outcome: ActionOutcome) -> AppResult<()> {
    match outcome {
        ActionOutcome::Completed(_) | ActionOutcome::Cancelled => Ok(()),
        ActionOutcome::Rejected(message) => Err(AppError::validation(message)),
        ActionOutcome::Failed(message) => Err(AppError::remote(message)),
    }
}

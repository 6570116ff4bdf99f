//! Form commands - Fill in a form field by field and submit it.

use colored::Colorize;

use common::AppResult;
use domain::{FIELD_ID, FIELD_IDENTIFIER};

use crate::clients::{build_http_client, PageClient};
use crate::config::PanelConfig;
use crate::forms::{FormBinding, SubmitOutcome, TerminalSurface};
use crate::prompt::{TerminalPrompt, UserPrompt};

/// Execute the register command
pub async fn execute_register(config: PanelConfig) -> AppResult<()> {
    run_form(FormBinding::register(), config).await
}

/// Execute the login command
pub async fn execute_login(config: PanelConfig) -> AppResult<()> {
    run_form(FormBinding::login(), config).await
}

async fn run_form(mut form: FormBinding, config: PanelConfig) -> AppResult<()> {
    tracing::debug!("Filling #{}", form.form_id());

    let plain = TerminalPrompt::plain();
    let masked = TerminalPrompt::masked();
    let mut surface = TerminalSurface::new();

    let names: Vec<&'static str> = form.field_names().collect();
    for name in names {
        let prompt = if name == FIELD_ID || name == FIELD_IDENTIFIER {
            &plain
        } else {
            &masked
        };
        let Some(value) = prompt.prompt_text(name) else {
            tracing::info!("Form cancelled");
            return Ok(());
        };
        surface.set_value(name, value);
        // Moving to the next field is the terminal's loss of focus
        form.on_blur(&mut surface, name);
    }

    let fields = match form.on_submit(&mut surface, &plain) {
        SubmitOutcome::Proceed(fields) => fields,
        SubmitOutcome::Blocked(_) => return Ok(()),
    };

    let http = build_http_client(&config.http)?;
    let pages = PageClient::new(http, config.http.clone(), config.refresh_path.clone());
    let status = pages.submit(form.action_path(), &fields).await?;
    println!(
        "{} {}",
        "Submitted".green().bold(),
        format!("(status {})", status).dimmed()
    );

    Ok(())
}

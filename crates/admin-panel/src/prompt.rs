//! User dialogs: confirmation, text prompt and blocking notification.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use tracing::warn;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Dialog capability injected into actions and form guards.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserPrompt: Send + Sync {
    /// Ask a yes/no question. `false` when declined.
    fn confirm(&self, message: &str) -> bool;

    /// Ask for a line of text. `None` when cancelled.
    fn prompt_text(&self, message: &str) -> Option<String>;

    /// Show a notification the user must see.
    fn alert(&self, message: &str);
}

/// Interactive terminal dialogs.
#[derive(Debug, Clone)]
pub struct TerminalPrompt {
    /// Hide typed text (password entry)
    masked: bool,
}

impl TerminalPrompt {
    /// Dialogs whose text prompts hide input
    pub fn masked() -> Self {
        Self { masked: true }
    }

    /// Dialogs whose text prompts echo input
    pub fn plain() -> Self {
        Self { masked: false }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::masked()
    }
}

impl UserPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                warn!("Confirmation dialog failed: {}", e);
                false
            })
    }

    fn prompt_text(&self, message: &str) -> Option<String> {
        let theme = ColorfulTheme::default();
        let answer = if self.masked {
            Password::with_theme(&theme)
                .with_prompt(message)
                .allow_empty_password(true)
                .interact()
        } else {
            Input::<String>::with_theme(&theme)
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
        };

        match answer {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Text prompt failed: {}", e);
                None
            }
        }
    }

    fn alert(&self, message: &str) {
        println!("{} {}", "!".yellow().bold(), message.bold());
    }
}

//! CLI module - Command-line interface for the admin panel.
//!
//! Provides commands for:
//! - `validate-dni` / `validate-password` - Check a value against the rules
//! - `register` / `login` - Fill a form interactively and submit it
//! - `change-status` / `change-password` / `change-admin-password` - Admin actions

pub mod args;

pub use args::{Cli, Commands};

//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Admin panel client - validation and user administration
#[derive(Parser, Debug)]
#[command(name = "admin-panel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Panel server base URL
    #[arg(short, long, global = true, env = "ADMIN_PANEL_URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a DNI
    ValidateDni(ValueArgs),

    /// Check password strength
    ValidatePassword(ValueArgs),

    /// Fill in and submit the register form
    Register,

    /// Fill in and submit the login form
    Login,

    /// Change a user's status
    ChangeStatus(ChangeStatusArgs),

    /// Change a user's password
    ChangePassword(UserArgs),

    /// Change the administrator password
    ChangeAdminPassword,
}

/// A single value to validate
#[derive(Parser, Debug)]
pub struct ValueArgs {
    /// Value to check
    pub value: String,
}

/// Target user
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// User DNI
    #[arg(long)]
    pub id: String,
}

/// Arguments for the change-status command
#[derive(Parser, Debug)]
pub struct ChangeStatusArgs {
    /// User DNI
    #[arg(long)]
    pub id: String,

    /// New status (inmaculado, activo, bloqueado, pausado, alertado, suspendido)
    #[arg(long)]
    pub status: String,
}

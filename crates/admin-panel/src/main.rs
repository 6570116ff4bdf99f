//! Admin Panel - Command-line entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use admin_panel_lib::{
    cli::{Cli, Commands},
    commands,
    config::PanelConfig,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = PanelConfig::from_env();
    if let Some(url) = cli.url {
        config = config.with_base_url(url);
    }

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config.log.level);
    tracing::debug!("Configuration loaded: {:?}", config);

    // Execute command
    let result = match cli.command {
        Commands::ValidateDni(args) => commands::validate::execute_dni(args),
        Commands::ValidatePassword(args) => commands::validate::execute_password(args),
        Commands::Register => commands::forms::execute_register(config).await,
        Commands::Login => commands::forms::execute_login(config).await,
        Commands::ChangeStatus(args) => commands::admin::execute_change_status(args, config).await,
        Commands::ChangePassword(args) => {
            commands::admin::execute_change_password(args, config).await
        }
        Commands::ChangeAdminPassword => {
            commands::admin::execute_change_admin_password(config).await
        }
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

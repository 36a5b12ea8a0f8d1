//! recipefind - recipe search from the terminal
//!
//! Main entry point for the recipefind application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recipefind::cli::{Cli, Commands};
use recipefind::commands;
use recipefind::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref().unwrap_or("config/recipefind.yaml");
    let config = Config::load(config_path, &cli)?;

    config.validate()?;

    let ephemeral = cli.ephemeral;
    match cli.command {
        Commands::Load { json } => {
            tracing::info!("Running page-load trigger");
            commands::run_load(config, ephemeral, json).await?;
        }
        Commands::Search { query, json } => {
            tracing::info!("Running search trigger");
            commands::run_search(config, ephemeral, query, json).await?;
        }
        Commands::Clear => {
            tracing::info!("Running clear trigger");
            commands::run_clear(config, ephemeral).await?;
        }
        Commands::History { command } => {
            tracing::info!("Starting history command");
            commands::history::handle_history(config, ephemeral, command).await?;
        }
        Commands::Interactive => {
            commands::session::run_interactive(config, ephemeral).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so they never mix with rendered results on stdout.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "recipefind=debug"
    } else {
        "recipefind=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

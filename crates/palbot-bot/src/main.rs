//! Main entry point for Palbot.

use anyhow::Context as _;
use clap::Parser;
use palbot_bot::{logging_config, BotError, PalBot};
use palbot_common::logging::{init_logging, LoggingConfig};
use palbot_config::{Config, ConfigLoader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (.json, .yaml or .toml)
    #[arg(short, long, env = "PALBOT_CONFIG", default_value = "config.json")]
    config: PathBuf,

    /// Log level, overrides the configuration file
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let loader = ConfigLoader::new(&args.config);
    let config = match loader.load().await {
        Ok(config) => config,
        Err(e) => {
            let _guard = init_logging(&LoggingConfig::default()).ok().flatten();
            error!(
                error = %e,
                category = e.category(),
                path = %loader.path().display(),
                "Invalid configuration"
            );
            return ExitCode::FAILURE;
        }
    };

    let _guard = match logging_config(&config.logging, args.log_level.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|logging| init_logging(&logging).map_err(anyhow::Error::from))
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if args.check_config {
        info!(path = %loader.path().display(), "Configuration is valid");
        return ExitCode::SUCCESS;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<BotError>() {
                Some(err) if err.is_startup_fault() => {
                    error!(error = %err, "Invalid configuration");
                }
                _ => error!("Bot stopped with an error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    info!("Starting Palbot");
    PalBot::new(config)
        .run()
        .await
        .context("Discord client failed")
}

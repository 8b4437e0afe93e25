//! Bot assembly and lifecycle.

use crate::error::BotResult;
use crate::handler::Handler;
use crate::transport::SerenityTransport;
use palbot_commands::{ChatTransport, Dispatcher, GateSettings, ReplyFormatter};
use palbot_common::logging::{LogFormat, LoggingConfig};
use palbot_config::{Config, LoggingSettings};
use palbot_i18n::{Catalog, Locale};
use palbot_palworld::{PalworldClient, PalworldClientConfig};
use serenity::http::Http;
use serenity::prelude::GatewayIntents;
use serenity::Client;
use std::sync::Arc;
use tracing::{error, info};

/// Gateway intents the bot needs to read commands in guilds and DMs.
pub fn required_intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Builds the dispatcher described by `config`, delivering through `transport`.
pub fn build_dispatcher(config: &Config, transport: Arc<dyn ChatTransport>) -> BotResult<Dispatcher> {
    let status = PalworldClient::new(
        PalworldClientConfig::new(
            config.palworld.host.as_str(),
            config.palworld.username.as_str(),
            config.palworld.password.as_str(),
        )
        .with_timeout(config.palworld.timeout_secs),
    )?;

    let catalog = Catalog::new(Locale::parse(&config.locale.language)?)?;
    info!(
        locale = catalog.locale().code(),
        cooldown_secs = config.rate_limiting.cooldown_seconds,
        interval_ms = config.rate_limiting.global_interval_millis,
        "Send gate configured"
    );
    let settings = GateSettings {
        cooldown: config.rate_limiting.cooldown(),
        global_interval: config.rate_limiting.global_interval(),
    };

    Ok(Dispatcher::new(
        Arc::new(status),
        transport,
        ReplyFormatter::new(catalog),
        settings,
    ))
}

/// Logging set-up for the configured settings. `level_override` comes from
/// the command line and wins over the file.
pub fn logging_config(settings: &LoggingSettings, level_override: Option<&str>) -> BotResult<LoggingConfig> {
    Ok(LoggingConfig {
        level: level_override.unwrap_or(settings.level.as_str()).to_string(),
        format: settings.format.parse::<LogFormat>()?,
        file_path: settings.file.clone(),
        ..LoggingConfig::default()
    })
}

/// The running bot.
pub struct PalBot {
    config: Arc<Config>,
}

impl PalBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Connects to Discord and serves messages until Ctrl+C.
    pub async fn run(&self) -> BotResult<()> {
        let token = &self.config.discord.token;
        let transport = SerenityTransport::new(Arc::new(Http::new(token)));
        let dispatcher = build_dispatcher(&self.config, Arc::new(transport))?;

        let mut client = Client::builder(token, required_intents())
            .event_handler(Handler::new(Arc::new(dispatcher)))
            .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Shutdown requested");
                    shard_manager.shutdown_all().await;
                }
                Err(e) => error!(error = %e, "Cannot listen for shutdown signal"),
            }
        });

        info!(host = %self.config.palworld.host, "Starting Discord client");
        client.start().await?;
        info!("Discord client stopped");
        Ok(())
    }
}

impl std::fmt::Debug for PalBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PalBot")
            .field("host", &self.config.palworld.host)
            .finish_non_exhaustive()
    }
}

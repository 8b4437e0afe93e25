//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use palbot_common::logging::LogFormat;
use palbot_common::{PalbotError, Result};
use palbot_i18n::Locale;
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        let host = Url::parse(&config.palworld.host).map_err(|e| {
            PalbotError::validation_field(
                format!("'{}' is not a valid URL: {e}", config.palworld.host),
                "palworld.host",
            )
        })?;
        if !matches!(host.scheme(), "http" | "https") {
            return Err(PalbotError::validation_field(
                "host must use http or https",
                "palworld.host",
            ));
        }

        if config.palworld.username.is_empty() {
            return Err(PalbotError::validation_field(
                "username cannot be empty",
                "palworld.username",
            ));
        }

        if config.palworld.timeout_secs == 0 {
            return Err(PalbotError::validation_field(
                "timeout must be greater than 0",
                "palworld.timeout_secs",
            ));
        }

        if config.discord.token.is_empty() {
            return Err(PalbotError::validation_field(
                "Discord token cannot be empty",
                "discord.token",
            ));
        }

        if config.rate_limiting.cooldown_seconds == 0 {
            return Err(PalbotError::validation_field(
                "cooldown must be greater than 0",
                "rate_limiting.cooldown_seconds",
            ));
        }

        if config.rate_limiting.global_interval_millis == 0 {
            return Err(PalbotError::validation_field(
                "global interval must be greater than 0",
                "rate_limiting.global_interval_millis",
            ));
        }

        Locale::parse(&config.locale.language)?;
        config.logging.format.parse::<LogFormat>()?;

        Ok(())
    }
}

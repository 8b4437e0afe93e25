//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::defaults;

/// Main configuration structure for Palbot.
///
/// Only the `palworld` section is mandatory in the file; every other section
/// falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Palworld REST API configuration.
    pub palworld: PalworldConfig,
    /// Discord configuration.
    #[serde(default)]
    pub discord: DiscordConfig,
    /// Rate limiting configuration.
    #[serde(default)]
    pub rate_limiting: RateLimitingConfig,
    /// Reply language configuration.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Palworld REST API configuration (basic auth).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalworldConfig {
    /// Base URL of the REST API, e.g. `http://127.0.0.1:8212`.
    pub host: String,
    /// Basic auth user name.
    pub username: String,
    /// Basic auth password.
    pub password: String,
    /// Request timeout in seconds.
    #[serde(default = "defaults::request_timeout_secs")]
    pub timeout_secs: u64,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token.
    #[serde(default)]
    pub token: String,
}

/// Rate limiting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitingConfig {
    /// Per-sender, per-command cooldown window in seconds.
    #[serde(default = "defaults::cooldown_seconds")]
    pub cooldown_seconds: u64,
    /// Interval in milliseconds at which the global send token refills.
    #[serde(default = "defaults::global_interval_millis")]
    pub global_interval_millis: u64,
}

impl RateLimitingConfig {
    /// Cooldown window as a [`Duration`].
    pub const fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_seconds)
    }

    /// Global limiter refill interval as a [`Duration`].
    pub const fn global_interval(&self) -> Duration {
        Duration::from_millis(self.global_interval_millis)
    }
}

/// Reply language configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Language code, e.g. `en-US` or `nl-NL`.
    #[serde(default = "defaults::language")]
    pub language: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Level filter, e.g. `info` or `palbot_commands=debug,info`.
    #[serde(default = "defaults::log_level")]
    pub level: String,
    /// Console format: `pretty`, `compact` or `json`.
    #[serde(default = "defaults::log_format")]
    pub format: String,
    /// Optional path of an additional log file.
    #[serde(default)]
    pub file: Option<String>,
}

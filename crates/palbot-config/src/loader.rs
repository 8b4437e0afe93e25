//! Configuration loading from disk with environment overrides.

use crate::schema::Config;
use crate::validator::ConfigValidator;
use palbot_common::{PalbotError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding `palworld.host`.
pub const ENV_PALWORLD_HOST: &str = "PALWORLD_HOST";
/// Environment variable overriding `palworld.username`.
pub const ENV_PALWORLD_USERNAME: &str = "PALWORLD_USERNAME";
/// Environment variable overriding `palworld.password`.
pub const ENV_PALWORLD_PASSWORD: &str = "PALWORLD_PASSWORD";
/// Environment variable overriding `discord.token`.
pub const ENV_DISCORD_TOKEN: &str = "DISCORD_TOKEN";

/// On-disk configuration formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json` (also used for unknown extensions)
    Json,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl ConfigFormat {
    /// Picks the format for a path.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    /// Parses raw file contents in this format.
    pub fn parse(self, raw: &str) -> Result<Config> {
        match self {
            Self::Json => serde_json::from_str(raw)
                .map_err(|e| PalbotError::config_with_source("invalid JSON configuration", e)),
            Self::Yaml => serde_yaml::from_str(raw)
                .map_err(|e| PalbotError::config_with_source("invalid YAML configuration", e)),
            Self::Toml => toml::from_str(raw)
                .map_err(|e| PalbotError::config_with_source("invalid TOML configuration", e)),
        }
    }
}

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads, overrides from the process environment, and validates.
    pub async fn load(&self) -> Result<Config> {
        self.load_with_env(|key| std::env::var(key).ok()).await
    }

    /// Like [`load`](Self::load) but with an explicit environment lookup.
    pub async fn load_with_env<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!(path = %self.path.display(), "Reading configuration");

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PalbotError::config_with_source(
                format!("cannot read configuration file {}", self.path.display()),
                e,
            )
        })?;

        let mut config = ConfigFormat::from_path(&self.path).parse(&raw)?;
        apply_env_overrides(&mut config, lookup);
        ConfigValidator::validate(&config)?;

        info!(
            path = %self.path.display(),
            host = %config.palworld.host,
            language = %config.locale.language,
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Overrides credentials from the environment when the variables are set.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup(ENV_PALWORLD_HOST) {
        config.palworld.host = host;
    }
    if let Some(username) = lookup(ENV_PALWORLD_USERNAME) {
        config.palworld.username = username;
    }
    if let Some(password) = lookup(ENV_PALWORLD_PASSWORD) {
        config.palworld.password = password;
    }
    if let Some(token) = lookup(ENV_DISCORD_TOKEN) {
        config.discord.token = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palbot_common::test_utils::config_fixtures;
    use std::collections::HashMap;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("config.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("bot.YML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("bot.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("bot.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Json);
    }

    #[test]
    fn test_parse_minimal_json_applies_defaults() {
        let config = ConfigFormat::Json
            .parse(config_fixtures::minimal_config_json())
            .unwrap();

        assert_eq!(config.palworld.host, "http://127.0.0.1:8212");
        assert_eq!(config.palworld.timeout_secs, 10);
        assert_eq!(config.rate_limiting.cooldown_seconds, 30);
        assert_eq!(config.rate_limiting.global_interval_millis, 1000);
        assert_eq!(config.locale.language, "en-US");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_full_yaml() {
        let config = ConfigFormat::Yaml
            .parse(config_fixtures::full_config_yaml())
            .unwrap();

        assert_eq!(config.palworld.timeout_secs, 5);
        assert_eq!(config.rate_limiting.cooldown_seconds, 45);
        assert_eq!(config.locale.language, "nl-NL");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_parse_rejects_missing_palworld_section() {
        let err = ConfigFormat::Json.parse(r#"{"discord": {"token": "x"}}"#).unwrap_err();
        assert!(matches!(err, PalbotError::Config { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ConfigFormat::Json
            .parse(config_fixtures::minimal_config_json())
            .unwrap();
        let env: HashMap<&str, &str> = [
            (ENV_PALWORLD_PASSWORD, "from-env"),
            (ENV_DISCORD_TOKEN, "env-token"),
        ]
        .into_iter()
        .collect();

        apply_env_overrides(&mut config, |key| env.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.palworld.password, "from-env");
        assert_eq!(config.discord.token, "env-token");
        assert_eq!(config.palworld.username, "admin");
    }
}

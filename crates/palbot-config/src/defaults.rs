//! Default values used by the serde schema.

use crate::schema::{LocaleConfig, LoggingSettings, RateLimitingConfig};

/// Default per-sender, per-command cooldown window.
pub const DEFAULT_COOLDOWN_SECONDS: u64 = 30;

/// Default refill interval of the global send limiter.
pub const DEFAULT_GLOBAL_INTERVAL_MILLIS: u64 = 1_000;

/// Default status API request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub(crate) const fn cooldown_seconds() -> u64 {
    DEFAULT_COOLDOWN_SECONDS
}

pub(crate) const fn global_interval_millis() -> u64 {
    DEFAULT_GLOBAL_INTERVAL_MILLIS
}

pub(crate) const fn request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

pub(crate) fn language() -> String {
    palbot_i18n::Locale::default().code().to_string()
}

pub(crate) fn log_level() -> String {
    "info".to_string()
}

pub(crate) fn log_format() -> String {
    "pretty".to_string()
}

impl Default for RateLimitingConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
            global_interval_millis: DEFAULT_GLOBAL_INTERVAL_MILLIS,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: language(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: log_level(),
            format: log_format(),
            file: None,
        }
    }
}

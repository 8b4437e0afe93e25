//! Test utilities and shared test helpers for Palbot.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use std::sync::Once;

use crate::{ChatTarget, InboundEvent, SenderId};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(any(test, feature = "tempfile"))]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Chat-related fixtures.
pub mod chat_fixtures {
    use super::*;

    /// A stable test sender.
    pub fn test_sender() -> SenderId {
        SenderId::new("287345629384756234")
    }

    /// A second, distinct test sender.
    pub fn other_sender() -> SenderId {
        SenderId::new("501928374650192837")
    }

    /// A stable test chat target.
    pub fn test_target() -> ChatTarget {
        ChatTarget::new("123456789012345678")
    }

    /// An inbound event from [`test_sender`] to [`test_target`].
    pub fn event(text: &str) -> InboundEvent {
        InboundEvent::new(test_sender(), test_target(), Some(text))
    }

    /// An inbound event from an arbitrary sender.
    pub fn event_from(sender: &SenderId, text: &str) -> InboundEvent {
        InboundEvent::new(sender.clone(), test_target(), Some(text))
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration in the JSON layout of `config.json`.
    pub fn minimal_config_json() -> &'static str {
        r#"{
  "palworld": {
    "host": "http://127.0.0.1:8212",
    "username": "admin",
    "password": "secret"
  },
  "discord": {
    "token": "test_token"
  }
}"#
    }

    /// A full configuration as YAML.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "palworld:\n",
            "  host: \"http://127.0.0.1:8212\"\n",
            "  username: \"admin\"\n",
            "  password: \"secret\"\n",
            "  timeout_secs: 5\n",
            "\n",
            "discord:\n",
            "  token: \"test_token_full\"\n",
            "\n",
            "rate_limiting:\n",
            "  cooldown_seconds: 45\n",
            "  global_interval_millis: 2000\n",
            "\n",
            "locale:\n",
            "  language: \"nl-NL\"\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  format: \"json\"\n",
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(any(test, feature = "proptest"))]
pub mod property_testing {
    use crate::SenderId;
    use proptest::prelude::*;

    /// Strategy for generating snowflake-shaped sender ids.
    pub fn sender_id_strategy() -> impl Strategy<Value = SenderId> {
        r"[1-9][0-9]{16,18}".prop_map(SenderId)
    }

    /// Strategy for generating slash commands with optional arguments.
    pub fn slash_command_strategy() -> impl Strategy<Value = String> {
        (r"/[a-z]{1,12}", r"( [a-zA-Z0-9]{1,8}){0,3}").prop_map(|(cmd, args)| cmd + &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_fixtures_are_distinct() {
        assert_ne!(chat_fixtures::test_sender(), chat_fixtures::other_sender());
        assert_eq!(chat_fixtures::event("/metrics").text, "/metrics");
    }

    #[test]
    fn test_temp_dir() {
        let dir = create_temp_dir();
        assert!(dir.path().exists());
    }
}

//! Error types and utilities for Palbot

use thiserror::Error;

/// Result type alias for Palbot operations
pub type Result<T> = std::result::Result<T, PalbotError>;

/// Main error type for Palbot operations
#[derive(Error, Debug)]
pub enum PalbotError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network related errors (HTTP requests, gateway, etc.)
    #[error("Network error: {message}")]
    Network {
        /// Description of the failure.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Status API related errors
    #[error("Status API error: {message}")]
    StatusApi {
        /// Description of the failure.
        message: String,
        /// HTTP status returned by the server, if any.
        status_code: Option<u16>,
    },

    /// Chat transport errors
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        /// Description of the failure.
        message: String,
        /// Locale involved, if known.
        locale: Option<String>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the failure.
        message: String,
        /// Offending field, if any.
        field: Option<String>,
    },
}

impl PalbotError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new status API error carrying the HTTP status
    pub fn status_api_with_status(msg: impl Into<String>, status_code: u16) -> Self {
        Self::StatusApi {
            message: msg.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a new transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new transport error with source
    pub fn transport_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>, locale: Option<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale,
        }
    }

    /// Create a new validation error for a specific field
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether the error happened before the bot started serving.
    pub const fn is_startup_fault(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::Validation { .. } | Self::Io(_)
        )
    }

    /// Short category name, handy as a structured log field.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Io(_) => "io",
            Self::Network { .. } => "network",
            Self::StatusApi { .. } => "status_api",
            Self::Transport { .. } => "transport",
            Self::Serialization(_) => "serialization",
            Self::Localization { .. } => "localization",
            Self::Validation { .. } => "validation",
        }
    }
}

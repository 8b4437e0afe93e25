//! Application-wide error types using thiserror.

use palbot_common::PalbotError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration, catalogue or client set-up failed.
    #[error("Startup error: {0}")]
    Startup(#[from] PalbotError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BotError {
    /// Whether the bot stopped because its configuration is unusable.
    pub const fn is_startup_fault(&self) -> bool {
        match self {
            Self::Startup(fault) => fault.is_startup_fault(),
            Self::Discord(_) | Self::Io(_) => false,
        }
    }
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;

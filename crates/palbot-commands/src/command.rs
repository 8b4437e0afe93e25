//! Recognised commands and cooldown bucket keys derived from message text.

use palbot_common::truncate_chars;
use std::fmt;

/// Length of the bucket key used for text that is not a slash command.
pub const PLAIN_TEXT_KEY_CHARS: usize = 20;

/// Canonical cooldown bucket of a message.
///
/// A slash command keys on its first token (`/players 1 2` → `/players`);
/// any other text keys on its first [`PLAIN_TEXT_KEY_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandKey(String);

impl CommandKey {
    /// Derives the key from raw message text. Never fails; blank text yields
    /// the empty key.
    pub fn extract(text: &str) -> Self {
        let text = text.trim();

        if text.starts_with('/') {
            let token = text.split_whitespace().next().unwrap_or(text);
            return Self(token.to_string());
        }

        Self(truncate_chars(text, PLAIN_TEXT_KEY_CHARS).to_string())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Commands the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `/metrics`: server performance summary.
    Metrics,
    /// `/players`: list of online players.
    Players,
}

impl Command {
    /// Matches the whole trimmed text, case-sensitively. Arguments are not
    /// accepted: `/players now` is not a command.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "/metrics" => Some(Self::Metrics),
            "/players" => Some(Self::Players),
            _ => None,
        }
    }

    /// The literal command text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metrics => "/metrics",
            Self::Players => "/players",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

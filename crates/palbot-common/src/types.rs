//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text used when an inbound message carries no readable text.
pub const UNKNOWN_MESSAGE_PLACEHOLDER: &str = "[unknown message type]";

/// Protocol-level identity of a message sender.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SenderId(pub String);

impl SenderId {
    /// Creates a sender id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SenderId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Destination of a reply (a channel or chat identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatTarget(pub String);

impl ChatTarget {
    /// Creates a chat target from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the target as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChatTarget {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A decoded inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    /// Who sent the message.
    pub sender: SenderId,
    /// Where replies should be delivered.
    pub target: ChatTarget,
    /// Message text, or [`UNKNOWN_MESSAGE_PLACEHOLDER`] when none was readable.
    pub text: String,
}

impl InboundEvent {
    /// Builds an event, substituting the placeholder for missing or blank text.
    pub fn new(sender: SenderId, target: ChatTarget, text: Option<&str>) -> Self {
        let text = match text {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => UNKNOWN_MESSAGE_PLACEHOLDER.to_string(),
        };

        Self {
            sender,
            target,
            text,
        }
    }
}

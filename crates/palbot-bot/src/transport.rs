//! Discord implementation of the chat transport.

use async_trait::async_trait;
use palbot_commands::ChatTransport;
use palbot_common::{ChatTarget, PalbotError, Result};
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::debug;

/// Sends replies to Discord channels over the REST API.
#[derive(Clone)]
pub struct SerenityTransport {
    http: Arc<Http>,
}

impl SerenityTransport {
    /// Transport over an existing HTTP client.
    pub const fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

impl std::fmt::Debug for SerenityTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerenityTransport").finish_non_exhaustive()
    }
}

/// Parses a chat target into a Discord channel id.
pub fn channel_id(target: &ChatTarget) -> Result<ChannelId> {
    target
        .as_str()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(ChannelId::new)
        .ok_or_else(|| PalbotError::transport(format!("invalid channel id '{target}'")))
}

#[async_trait]
impl ChatTransport for SerenityTransport {
    async fn send(&self, target: &ChatTarget, text: &str) -> Result<()> {
        let channel = channel_id(target)?;
        channel
            .say(self.http.as_ref(), text)
            .await
            .map_err(|e| PalbotError::transport_with_source("Discord rejected the message", e))?;

        debug!(%channel, "Reply delivered");
        Ok(())
    }
}

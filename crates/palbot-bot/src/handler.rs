//! Gateway event handler.

use async_trait::async_trait;
use palbot_commands::Dispatcher;
use palbot_common::{ChatTarget, InboundEvent, SenderId};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler};
use std::sync::Arc;
use tracing::{debug, info};

/// Feeds every human-authored message to the dispatcher.
///
/// Serenity runs each event on its own task, so slow status requests for
/// one message never hold up another.
#[derive(Debug, Clone)]
pub struct Handler {
    dispatcher: Arc<Dispatcher>,
}

impl Handler {
    /// Handler dispatching through `dispatcher`.
    pub const fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

/// Converts a Discord message into the platform-neutral event.
pub fn inbound_event(author_id: u64, channel_id: u64, content: &str) -> InboundEvent {
    InboundEvent::new(
        SenderId::new(author_id.to_string()),
        ChatTarget::new(channel_id.to_string()),
        Some(content),
    )
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, _ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let event = inbound_event(msg.author.id.get(), msg.channel_id.get(), &msg.content);
        if let Some(outcome) = self.dispatcher.handle_event(&event).await {
            debug!(?outcome, message_id = %msg.id, "Command handled");
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Connected to Discord"
        );
    }
}

//! Inbound event handling and the outbound send gate
//!
//! Every reply passes the global throttle first and the cooldown tracker
//! second. A throttled reply is dropped without a trace in the chat; a reply
//! on cooldown becomes one notice per window and silence afterwards.

use crate::clock::{Clock, SystemClock};
use crate::command::{Command, CommandKey};
use crate::cooldown::{CooldownDecision, CooldownTracker, DEFAULT_COOLDOWN};
use crate::replies::ReplyFormatter;
use crate::throttle::{GlobalThrottle, DEFAULT_GLOBAL_INTERVAL};
use crate::transport::ChatTransport;
use palbot_common::{ChatTarget, InboundEvent, SenderId};
use palbot_palworld::StatusSource;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// What the send gate did with a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// The reply was handed to the transport.
    Sent,
    /// The cooldown notice was handed to the transport instead.
    Noticed,
    /// Dropped by the cooldown tracker.
    Suppressed,
    /// Dropped by the global throttle.
    Throttled,
}

/// Timing of the two gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateSettings {
    /// Cooldown window per sender and command.
    pub cooldown: Duration,
    /// Refill interval of the global throttle.
    pub global_interval: Duration,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            global_interval: DEFAULT_GLOBAL_INTERVAL,
        }
    }
}

/// Turns inbound chat messages into gated replies.
pub struct Dispatcher<C: Clock = SystemClock> {
    status: Arc<dyn StatusSource>,
    transport: Arc<dyn ChatTransport>,
    replies: ReplyFormatter,
    throttle: GlobalThrottle<C>,
    cooldowns: CooldownTracker,
    clock: C,
}

impl Dispatcher<SystemClock> {
    /// Dispatcher on the system clock.
    pub fn new(
        status: Arc<dyn StatusSource>,
        transport: Arc<dyn ChatTransport>,
        replies: ReplyFormatter,
        settings: GateSettings,
    ) -> Self {
        Self::with_clock(status, transport, replies, settings, SystemClock::default())
    }
}

impl<C: Clock> Dispatcher<C> {
    /// Dispatcher whose throttle and cooldowns both read `clock`.
    pub fn with_clock(
        status: Arc<dyn StatusSource>,
        transport: Arc<dyn ChatTransport>,
        replies: ReplyFormatter,
        settings: GateSettings,
        clock: C,
    ) -> Self {
        Self {
            status,
            transport,
            replies,
            throttle: GlobalThrottle::with_clock(settings.global_interval, &clock),
            cooldowns: CooldownTracker::new(settings.cooldown),
            clock,
        }
    }

    /// The cooldown tracker, for inspection.
    pub const fn cooldowns(&self) -> &CooldownTracker {
        &self.cooldowns
    }

    /// Handles one inbound message. Returns `None` when the text is not a
    /// known command.
    #[instrument(skip(self, event), fields(sender = %event.sender, target = %event.target))]
    pub async fn handle_event(&self, event: &InboundEvent) -> Option<GateOutcome> {
        let Some(command) = Command::parse(&event.text) else {
            debug!("Not a command");
            return None;
        };

        info!(%command, "Command received");
        let reply = self.build_reply(command).await;

        Some(
            self.on_reply_requested(&event.sender, &event.target, &event.text, &reply)
                .await,
        )
    }

    async fn build_reply(&self, command: Command) -> String {
        match command {
            Command::Metrics => match self.status.fetch_metrics().await {
                Ok(metrics) => self.replies.metrics(&metrics),
                Err(e) => {
                    warn!(error = %e, "Failed to fetch server metrics");
                    self.replies.metrics_error()
                }
            },
            Command::Players => match self.status.fetch_players().await {
                Ok(players) => self.replies.players(&players),
                Err(e) => {
                    warn!(error = %e, "Failed to fetch player list");
                    self.replies.players_error()
                }
            },
        }
    }

    /// Offers `reply` for delivery to `target`.
    ///
    /// The cooldown bucket comes from `command_text`, the inbound text that
    /// caused the reply. A notice reuses the token this attempt already took.
    pub async fn on_reply_requested(
        &self,
        sender: &SenderId,
        target: &ChatTarget,
        command_text: &str,
        reply: &str,
    ) -> GateOutcome {
        if !self.throttle.try_acquire() {
            debug!(%sender, "Reply dropped by global throttle");
            return GateOutcome::Throttled;
        }

        let command = CommandKey::extract(command_text);
        let (text, outcome) = match self.cooldowns.evaluate(sender, &command, self.clock.now()) {
            CooldownDecision::Admit => (reply.to_string(), GateOutcome::Sent),
            CooldownDecision::SuppressWithNotice => {
                debug!(%sender, %command, "On cooldown, sending notice");
                (self.replies.cooldown_notice(), GateOutcome::Noticed)
            }
            CooldownDecision::SuppressSilently => {
                debug!(%sender, %command, "On cooldown, suppressed");
                return GateOutcome::Suppressed;
            }
        };

        if let Err(e) = self.transport.send(target, &text).await {
            warn!(error = %e, %target, "Failed to send reply");
        }

        outcome
    }
}

impl<C: Clock> fmt::Debug for Dispatcher<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("throttle", &self.throttle)
            .field("cooldowns", &self.cooldowns)
            .finish_non_exhaustive()
    }
}

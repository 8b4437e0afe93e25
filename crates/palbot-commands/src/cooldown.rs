//! Per-sender, per-command cooldowns
//!
//! Each (sender, command) pair is idle until its first reply is admitted.
//! Inside the window that follows, the first suppressed reply is turned into
//! a cooldown notice and every later one is dropped silently. Entries are
//! never evicted; an expired entry simply admits the next reply.

use crate::command::CommandKey;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use palbot_common::SenderId;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default cooldown window.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(30);

/// Key of a tracked pair.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CooldownKey {
    sender: SenderId,
    command: CommandKey,
}

/// State of a pair that is not idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownState {
    /// A reply was admitted at `since`; no notice sent yet.
    Cooling {
        /// Start of the window.
        since: Instant,
    },
    /// The notice for the window starting at `since` went out.
    Notified {
        /// Start of the window.
        since: Instant,
    },
}

impl CooldownState {
    /// Start of the current window.
    pub const fn since(self) -> Instant {
        match self {
            Self::Cooling { since } | Self::Notified { since } => since,
        }
    }
}

/// Outcome of offering a reply to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownDecision {
    /// Send the reply; a new window has started.
    Admit,
    /// Send the cooldown notice instead of the reply.
    SuppressWithNotice,
    /// Send nothing.
    SuppressSilently,
}

/// Tracks cooldown windows for every (sender, command) pair seen.
#[derive(Debug)]
pub struct CooldownTracker {
    window: Duration,
    entries: DashMap<CooldownKey, CooldownState>,
}

impl CooldownTracker {
    /// Tracker with the given window length.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: DashMap::new(),
        }
    }

    /// Length of a cooldown window.
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Decides what happens to a reply for `sender` and `command` at `now`
    /// and records the transition.
    ///
    /// The read and the update happen under the entry's shard lock, so
    /// concurrent callers for the same pair see each transition exactly once.
    pub fn evaluate(&self, sender: &SenderId, command: &CommandKey, now: Instant) -> CooldownDecision {
        let key = CooldownKey {
            sender: sender.clone(),
            command: command.clone(),
        };

        let decision = match self.entries.entry(key) {
            Entry::Vacant(vacant) => {
                vacant.insert(CooldownState::Cooling { since: now });
                CooldownDecision::Admit
            }
            Entry::Occupied(mut occupied) => {
                let state = *occupied.get();
                if now.saturating_duration_since(state.since()) >= self.window {
                    occupied.insert(CooldownState::Cooling { since: now });
                    CooldownDecision::Admit
                } else if let CooldownState::Cooling { since } = state {
                    occupied.insert(CooldownState::Notified { since });
                    CooldownDecision::SuppressWithNotice
                } else {
                    CooldownDecision::SuppressSilently
                }
            }
        };

        debug!(sender = %sender, command = %command, ?decision, "Cooldown evaluated");
        decision
    }

    /// Current state of a pair, `None` while idle.
    pub fn state(&self, sender: &SenderId, command: &CommandKey) -> Option<CooldownState> {
        let key = CooldownKey {
            sender: sender.clone(),
            command: command.clone(),
        };
        self.entries.get(&key).map(|entry| *entry)
    }

    /// Number of pairs that have ever been admitted.
    pub fn tracked_pairs(&self) -> usize {
        self.entries.len()
    }
}

impl Default for CooldownTracker {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

//! Time sources shared by the throttle and the cooldown tracker.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A `governor` clock that reads [`std::time::Instant`].
///
/// Both gates must observe the same time, so the dispatcher takes one clock
/// and hands it to the throttle and uses it for cooldown timestamps.
pub trait Clock: governor::clock::Clock<Instant = Instant> + Send + Sync + 'static {}

impl<T> Clock for T where T: governor::clock::Clock<Instant = Instant> + Send + Sync + 'static {}

/// The real monotonic clock.
pub type SystemClock = governor::clock::MonotonicClock;

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    /// Starts at the current instant.
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Moves time forward.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl governor::clock::Clock for ManualClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

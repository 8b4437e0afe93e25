//! Global send throttle.
//!
//! One token shared by every sender and command. The token comes back one
//! interval after it was taken and idle time never banks a second one, so
//! at most one reply leaves the bot per interval no matter how many are
//! offered.

use crate::clock::{Clock, SystemClock};
use parking_lot::Mutex;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default refill interval of the global bucket.
pub const DEFAULT_GLOBAL_INTERVAL: Duration = Duration::from_secs(1);

/// Process-wide limiter in front of every outbound reply.
pub struct GlobalThrottle<C: Clock = SystemClock> {
    clock: C,
    interval: Duration,
    /// Earliest instant the token is available again; `None` until first use.
    next_free: Mutex<Option<Instant>>,
}

impl GlobalThrottle<SystemClock> {
    /// Throttle on the monotonic system clock.
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(interval, &SystemClock::default())
    }
}

impl<C: Clock> GlobalThrottle<C> {
    /// Throttle driven by `clock`.
    pub fn with_clock(interval: Duration, clock: &C) -> Self {
        Self {
            clock: clock.clone(),
            interval,
            next_free: Mutex::new(None),
        }
    }

    /// Takes the token if one is available. Never blocks on time.
    pub fn try_acquire(&self) -> bool {
        let now = self.clock.now();
        let mut next_free = self.next_free.lock();

        if next_free.is_some_and(|at| now < at) {
            debug!("Global throttle saturated");
            return false;
        }

        *next_free = Some(now + self.interval);
        true
    }

    /// Refill interval of the bucket.
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl<C: Clock> fmt::Debug for GlobalThrottle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalThrottle")
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

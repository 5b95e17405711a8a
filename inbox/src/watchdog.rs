//! Inactivity timeout for the signed-in session.
//!
//! The client records user activity with [`SessionWatchdog::touch`] and
//! samples [`SessionWatchdog::state`] on a timer. The final stretch before
//! expiry is a warning period during which any activity still resets the
//! clock.

#[cfg(test)]
#[path = "watchdog_test.rs"]
mod watchdog_test;

/// Default inactivity limit (30 minutes).
pub const DEFAULT_TIMEOUT_MS: i64 = 30 * 60 * 1000;
/// Default warning period before expiry (60 seconds).
pub const DEFAULT_WARNING_MS: i64 = 60 * 1000;
/// How often the client samples the watchdog; fine enough for a live countdown.
pub const CHECK_INTERVAL_MS: u32 = 1_000;

/// Sampled watchdog state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    Active,
    /// Expiry is near; `remaining_ms` is always positive.
    Warning { remaining_ms: i64 },
    Expired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionWatchdog {
    timeout_ms: i64,
    warning_ms: i64,
    last_activity_ms: i64,
}

impl SessionWatchdog {
    /// Start a watchdog with the default limits.
    #[must_use]
    pub fn start(now_ms: i64) -> Self {
        Self::with_limits(now_ms, DEFAULT_TIMEOUT_MS, DEFAULT_WARNING_MS)
    }

    /// Start with custom limits. `warning_ms` is clamped to `timeout_ms`.
    #[must_use]
    pub fn with_limits(now_ms: i64, timeout_ms: i64, warning_ms: i64) -> Self {
        let timeout_ms = timeout_ms.max(1);
        Self {
            timeout_ms,
            warning_ms: warning_ms.clamp(0, timeout_ms),
            last_activity_ms: now_ms,
        }
    }

    /// Record user activity. Activity never moves the clock backwards.
    pub fn touch(&mut self, now_ms: i64) {
        self.last_activity_ms = self.last_activity_ms.max(now_ms);
    }

    #[must_use]
    pub fn last_activity_ms(&self) -> i64 {
        self.last_activity_ms
    }

    #[must_use]
    pub fn state(&self, now_ms: i64) -> WatchState {
        let idle = now_ms - self.last_activity_ms;
        if idle >= self.timeout_ms {
            return WatchState::Expired;
        }
        let remaining_ms = self.timeout_ms - idle;
        if remaining_ms <= self.warning_ms {
            WatchState::Warning { remaining_ms }
        } else {
            WatchState::Active
        }
    }

    #[must_use]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        matches!(self.state(now_ms), WatchState::Expired)
    }
}

//! Two-click delete confirmation.
//!
//! The first click on an item arms it; a second click on the same item while
//! the window is open confirms. Clicking after the window lapsed re-arms
//! instead of confirming, and arming another item disarms the previous one.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// How long an armed delete waits for its second click. The window is
/// half-open: a click exactly `CONFIRM_WINDOW_MS` after arming re-arms.
pub const CONFIRM_WINDOW_MS: i64 = 3_000;

/// Result of a click on a delete control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The item is now armed; nothing should be deleted yet.
    Armed,
    /// Second click inside the window; perform the delete.
    Confirmed,
}

/// Arming state for one list of deletable items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteConfirm<K> {
    armed: Option<(K, i64)>,
    window_ms: i64,
}

impl<K> Default for DeleteConfirm<K> {
    fn default() -> Self {
        Self::new(CONFIRM_WINDOW_MS)
    }
}

impl<K> DeleteConfirm<K> {
    #[must_use]
    pub fn new(window_ms: i64) -> Self {
        Self { armed: None, window_ms }
    }

    /// Drop any pending arming.
    pub fn reset(&mut self) {
        self.armed = None;
    }

    #[must_use]
    pub fn window_ms(&self) -> i64 {
        self.window_ms
    }
}

impl<K: PartialEq + Clone> DeleteConfirm<K> {
    /// Register a click on `key` at `now_ms`.
    pub fn click(&mut self, key: &K, now_ms: i64) -> ConfirmOutcome {
        if self.is_armed(key, now_ms) {
            self.armed = None;
            return ConfirmOutcome::Confirmed;
        }
        self.armed = Some((key.clone(), now_ms));
        ConfirmOutcome::Armed
    }

    /// Whether `key` is armed and still inside its window.
    #[must_use]
    pub fn is_armed(&self, key: &K, now_ms: i64) -> bool {
        match &self.armed {
            Some((armed_key, armed_at)) => armed_key == key && now_ms - armed_at < self.window_ms,
            None => false,
        }
    }

    /// The armed key, if its window has not lapsed.
    #[must_use]
    pub fn armed(&self, now_ms: i64) -> Option<&K> {
        self.armed
            .as_ref()
            .filter(|(_, armed_at)| now_ms - armed_at < self.window_ms)
            .map(|(key, _)| key)
    }

    /// Forget an arming whose window has lapsed. Returns whether one was dropped.
    pub fn expire(&mut self, now_ms: i64) -> bool {
        let lapsed = self
            .armed
            .as_ref()
            .is_some_and(|(_, armed_at)| now_ms - armed_at >= self.window_ms);
        if lapsed {
            self.armed = None;
        }
        lapsed
    }
}

//! Cancellation guard for view-owned pollers.
//!
//! A view creates one [`Subscription`], hands clones to its poll loop and to
//! every in-flight request, and cancels it when it unmounts. Work that
//! finishes after cancellation checks [`Subscription::is_live`] (or uses
//! [`Subscription::deliver`]) and drops its result instead of writing into
//! disposed state.
//!
//! A live subscription is not enough when one view is re-keyed in place
//! (a route param change keeps the component mounted). Results fetched for
//! one key are also checked with [`still_current`] before being applied.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Subscription {
    alive: Arc<AtomicBool>,
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl Subscription {
    #[must_use]
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Stop the poll loop and invalidate every outstanding clone.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Run `apply` with `value` only while live. Returns whether it ran.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if !self.is_live() {
            return false;
        }
        apply(value);
        true
    }
}

/// Whether a result fetched for `requested` still belongs to the view, whose
/// key is now `current`.
pub fn still_current<K: PartialEq>(current: Option<&K>, requested: &K) -> bool {
    current == Some(requested)
}

//! View-scoped polling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every periodically refreshed view (notification badge, conversation
//! thread, collaboration portal, inactivity watchdog) goes through
//! [`spawn_poll`]. The loop is owned by an [`inbox::Subscription`] that
//! [`use_subscription`] cancels when the owning component is disposed, and
//! each tick's result should be applied through the same subscription so a
//! response landing after unmount is dropped.

use std::future::Future;

use inbox::Subscription;
use leptos::prelude::on_cleanup;

/// Whether a poll loop keeps running after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollControl {
    Continue,
    Stop,
}

/// A subscription cancelled when the calling component is cleaned up.
pub fn use_subscription() -> Subscription {
    let subscription = Subscription::new();
    let on_dispose = subscription.clone();
    on_cleanup(move || on_dispose.cancel());
    subscription
}

/// Run `tick` every `interval_ms` (first run immediately when `immediate`)
/// until `subscription` is cancelled or a tick returns [`PollControl::Stop`].
///
/// No retries or backoff: a failed tick is the tick's own concern.
pub fn spawn_poll<F, Fut>(subscription: Subscription, interval_ms: u32, immediate: bool, tick: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = PollControl> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if !immediate {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(interval_ms))).await;
            }
            while subscription.is_live() {
                if tick().await == PollControl::Stop {
                    break;
                }
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(interval_ms))).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (subscription, interval_ms, immediate, tick);
    }
}

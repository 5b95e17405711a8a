//! Spawning browser work from pages and event handlers.
//!
//! Server builds never run these futures; SSR renders the loading state.

use std::future::Future;

use leptos::prelude::*;
use wire::ApiError;

/// A page-level load: `None` while pending, then the result or its message.
pub type Fetched<T> = Option<Result<T, String>>;

/// Run `future` and publish its outcome into `target`.
pub fn spawn_into<T, F>(target: RwSignal<Fetched<T>>, future: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn_action(async move {
        let result = future.await.map_err(|e| e.to_string());
        target.set(Some(result));
    });
}

/// Fire-and-forget a future on the browser event loop.
pub fn spawn_action<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(future);
    #[cfg(not(feature = "hydrate"))]
    drop(future);
}

/// Full-page navigation, for external URLs and post-sign-out resets.
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(href).is_err() {
                leptos::logging::warn!("navigation to {href} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

//! Renders the toast queue and expires entries.

use leptos::prelude::*;

use crate::state::toast::{TOAST_TTL_MS, ToastState};
use crate::util::clock::now_ms;
use crate::util::poll::{PollControl, spawn_poll, use_subscription};

const SWEEP_INTERVAL_MS: u32 = 500;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    spawn_poll(use_subscription(), SWEEP_INTERVAL_MS, false, move || async move {
        let now = now_ms();
        let stale = toasts.with_untracked(|s| s.toasts.iter().any(|t| now - t.created_ms >= TOAST_TTL_MS));
        if stale {
            toasts.update(|s| {
                s.expire(now);
            });
        }
        PollControl::Continue
    });

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__dismiss"
                                type="button"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

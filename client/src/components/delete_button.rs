//! Two-click delete control.
//!
//! DESIGN
//! ======
//! The button is presentational: the owning list decides what a click means
//! through an `inbox::DeleteConfirm` (or a tracker embedding one) and passes
//! the armed flag back in. [`confirm_click`] covers the common case.

use inbox::confirm::CONFIRM_WINDOW_MS;
use inbox::{ConfirmOutcome, DeleteConfirm};
use leptos::prelude::*;
use wire::Id;

use crate::util::clock::now_ms;

#[component]
pub fn DeleteButton(
    #[prop(into)] armed: Signal<bool>,
    on_click: Callback<()>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Delete".to_owned());
    view! {
        <button
            class="delete-button"
            class:delete-button--armed=move || armed.get()
            type="button"
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_click.run(());
            }
        >
            {move || if armed.get() { "Click again to confirm".to_owned() } else { label.clone() }}
        </button>
    }
}

/// Register a click on `id`; true when the delete should happen now.
///
/// A first click arms `id` and schedules a refresh so the button falls back
/// to its idle label once the window lapses.
pub fn confirm_click(confirm: RwSignal<DeleteConfirm<Id>>, id: Id) -> bool {
    let now = now_ms();
    let mut outcome = ConfirmOutcome::Armed;
    confirm.update(|c| outcome = c.click(&id, now));
    if outcome == ConfirmOutcome::Armed {
        after_confirm_window(move || {
            confirm.update(|c| {
                c.expire(now_ms());
            });
        });
    }
    outcome == ConfirmOutcome::Confirmed
}

/// Reactive armed flag for `id`.
pub fn armed_signal(confirm: RwSignal<DeleteConfirm<Id>>, id: Id) -> Signal<bool> {
    Signal::derive(move || confirm.with(|c| c.is_armed(&id, now_ms())))
}

/// Run `f` just after an arming made now would lapse.
pub fn after_confirm_window<F>(f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let wait_ms = u64::try_from(CONFIRM_WINDOW_MS + 50).unwrap_or(3_050);
        gloo_timers::future::sleep(std::time::Duration::from_millis(wait_ms)).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (f, CONFIRM_WINDOW_MS);
    }
}

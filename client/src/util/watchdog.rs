//! Browser wiring for the inactivity watchdog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once by the navbar. Window-level click, keydown, and mousemove
//! listeners feed [`SessionWatchdog::touch`]; a poll loop samples the state
//! and mirrors the warning countdown into `UiState`. On expiry the session is
//! signed out and the browser goes to `/login?expired=1`.

use inbox::watchdog::CHECK_INTERVAL_MS;
use inbox::{SessionWatchdog, WatchState};
use leptos::prelude::*;

use super::auth::sign_out;
use super::clock::now_ms;
use super::poll::{PollControl, spawn_poll, use_subscription};
use super::task::redirect;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Route the browser lands on after an inactivity sign-out.
pub const EXPIRED_REDIRECT: &str = "/login?expired=1";

pub fn install_session_watchdog(auth: RwSignal<AuthState>, ui: RwSignal<UiState>) {
    let watchdog = StoredValue::new(SessionWatchdog::start(now_ms()));

    #[cfg(feature = "hydrate")]
    {
        let touch = move || {
            watchdog.update_value(|w| w.touch(now_ms()));
            if ui.get_untracked().session_warning_ms.is_some() {
                ui.update(|u| u.session_warning_ms = None);
            }
        };
        let click = window_event_listener(leptos::ev::click, move |_| touch());
        let keydown = window_event_listener(leptos::ev::keydown, move |_| touch());
        let mousemove = window_event_listener(leptos::ev::mousemove, move |_| touch());
        on_cleanup(move || {
            click.remove();
            keydown.remove();
            mousemove.remove();
        });
    }

    spawn_poll(use_subscription(), CHECK_INTERVAL_MS, false, move || async move {
        let now = now_ms();
        if auth.get_untracked().user.is_none() {
            watchdog.update_value(|w| w.touch(now));
            set_warning(ui, None);
            return PollControl::Continue;
        }
        match watchdog.get_value().state(now) {
            WatchState::Active => set_warning(ui, None),
            WatchState::Warning { remaining_ms } => set_warning(ui, Some(remaining_ms)),
            WatchState::Expired => {
                leptos::logging::log!("session expired after inactivity");
                set_warning(ui, None);
                sign_out(auth);
                watchdog.update_value(|w| w.touch(now));
                redirect(EXPIRED_REDIRECT);
            }
        }
        PollControl::Continue
    });
}

fn set_warning(ui: RwSignal<UiState>, remaining_ms: Option<i64>) {
    if ui.get_untracked().session_warning_ms != remaining_ms {
        ui.update(|u| u.session_warning_ms = remaining_ms);
    }
}

//! OAuth landing route.
//!
//! The backend redirects here with `?token=` (or `?access_token=`) on
//! success and `?error=` on failure. The query is read once on mount.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::util::auth::complete_sign_in;
use crate::util::session::token_from_callback;
use crate::util::task::spawn_action;

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let error = RwSignal::new(None::<String>);
    let started = StoredValue::new(false);

    Effect::new(move || {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        let token = query.with_untracked(|q| token_from_callback(q.get("token"), q.get("access_token"), q.get("error")));
        let token = match token {
            Ok(token) => token,
            Err(message) => {
                leptos::logging::warn!("oauth callback rejected: {message}");
                error.set(Some(message));
                return;
            }
        };
        let navigate = navigate.clone();
        spawn_action(async move {
            match complete_sign_in(auth, &token).await {
                Ok(_) => navigate("/dashboard", NavigateOptions::default()),
                Err(e) => error.set(Some(format!("Sign-in could not be completed: {e}"))),
            }
        });
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <Show
                    when=move || error.get().is_some()
                    fallback=|| view! { <p class="login-message">"Completing sign-in..."</p> }
                >
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    <a class="login-button" href="/login">"Back to sign in"</a>
                </Show>
            </div>
        </div>
    }
}

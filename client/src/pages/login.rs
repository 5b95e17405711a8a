//! Login page supporting email + password and OAuth providers.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::util::auth::complete_sign_in;
use crate::util::task::{redirect, spawn_action};

/// OAuth providers offered on the sign-in pages, as `(slug, label)`.
pub const OAUTH_PROVIDERS: [(&str, &str); 2] = [("github", "GitHub"), ("google", "Google")];

/// Trimmed email and untouched password, both required.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Message for the `?expired=1` redirect from the inactivity watchdog.
pub fn expired_notice(expired: Option<&str>) -> Option<&'static str> {
    matches!(expired, Some("1" | "true")).then_some("You were signed out after 30 minutes of inactivity.")
}

/// Buttons that hand the window to the backend's OAuth start endpoint.
#[component]
pub fn OAuthButtons() -> impl IntoView {
    OAUTH_PROVIDERS
        .iter()
        .map(|(slug, label)| {
            let slug = *slug;
            view! {
                <button
                    class="login-button login-button--oauth"
                    type="button"
                    on:click=move |_| redirect(&crate::net::auth::oauth_url(slug))
                >
                    {format!("Continue with {label}")}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let notice = move || query.with(|q| expired_notice(q.get("expired").as_deref()));

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if auth.get().user.is_some() {
            navigate_home("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());
        let navigate = navigate.clone();
        spawn_action(async move {
            let outcome = match crate::net::auth::login(&email_value, &password_value).await {
                Ok(token) => complete_sign_in(auth, &token.access_token).await.map(|_| ()),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(e) if e.is_unauthorized() => info.set("Incorrect email or password.".to_owned()),
                Err(e) => info.set(format!("Sign-in failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"DevMarket"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                {move || notice().map(|n| view! { <p class="login-message login-message--notice">{n}</p> })}
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <OAuthButtons/>
                <p class="login-card__footer">
                    "New here? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

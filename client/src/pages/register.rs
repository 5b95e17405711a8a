//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wire::{RegisterRequest, Role};

use crate::pages::login::OAuthButtons;
use crate::state::auth::AuthState;
use crate::util::auth::complete_sign_in;
use crate::util::task::spawn_action;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw register form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub role: Role,
}

pub fn validate_registration(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let full_name = form.full_name.trim();
    let email = form.email.trim();
    if full_name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Fill in your name, email, and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    if !matches!(form.role, Role::Client | Role::Developer) {
        return Err("Choose whether you are hiring or a developer.");
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: form.password.clone(),
        full_name: full_name.to_owned(),
        role: form.role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_registration(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating your account...".to_owned());
        let navigate = navigate.clone();
        spawn_action(async move {
            let outcome = match crate::net::auth::register(&request).await {
                Ok(token) => complete_sign_in(auth, &token.access_token).await.map(|_| ()),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(e) => info.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
    };

    let text_field = move |placeholder: &'static str, kind: &'static str, get: fn(&RegisterForm) -> String, set: fn(&mut RegisterForm, String)| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Join DevMarket"</h1>
                <form class="login-form" on:submit=on_submit>
                    {text_field("Full name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {text_field("you@example.com", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field("Password (8+ characters)", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {text_field("Confirm password", "password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
                    <fieldset class="login-roles">
                        <label>
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || form.with(|f| f.role == Role::Client)
                                on:change=move |_| form.update(|f| f.role = Role::Client)
                            />
                            "I'm hiring"
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || form.with(|f| f.role == Role::Developer)
                                on:change=move |_| form.update(|f| f.role = Role::Developer)
                            />
                            "I'm a developer"
                        </label>
                    </fieldset>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <OAuthButtons/>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

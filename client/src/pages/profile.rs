//! Developer profile editor.
//!
//! A developer without a profile yet gets an empty form; saving creates it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::{DeveloperProfile, ProfileUpdate};

use crate::components::developer_card::DeveloperCard;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::auth::install_unauth_redirect;
use crate::util::form::{non_blank, parse_optional, split_comma_list};
use crate::util::task::spawn_action;

/// Raw profile form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub bio: String,
    /// Comma-separated.
    pub skills: String,
    pub experience_years: String,
    pub hourly_rate: String,
    pub portfolio_url: String,
    pub is_public: bool,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            bio: String::new(),
            skills: String::new(),
            experience_years: String::new(),
            hourly_rate: String::new(),
            portfolio_url: String::new(),
            is_public: true,
        }
    }
}

impl ProfileForm {
    pub fn from_profile(profile: &DeveloperProfile) -> Self {
        Self {
            bio: profile.bio.clone().unwrap_or_default(),
            skills: profile.skills.join(", "),
            experience_years: profile.experience_years.map(|y| y.to_string()).unwrap_or_default(),
            hourly_rate: profile.hourly_rate.map(|r| r.to_string()).unwrap_or_default(),
            portfolio_url: profile.portfolio_url.clone().unwrap_or_default(),
            is_public: profile.is_public,
        }
    }
}

pub fn validate_profile(form: &ProfileForm) -> Result<ProfileUpdate, &'static str> {
    let experience_years = parse_optional::<u32>(&form.experience_years, "Experience must be a whole number of years.")?;
    let hourly_rate = parse_optional::<f64>(&form.hourly_rate, "Hourly rate must be a number.")?;
    if hourly_rate.is_some_and(|rate| !rate.is_finite() || rate < 0.0) {
        return Err("Hourly rate must be a number.");
    }
    let portfolio_url = non_blank(&form.portfolio_url);
    if portfolio_url
        .as_deref()
        .is_some_and(|url| !(url.starts_with("http://") || url.starts_with("https://")))
    {
        return Err("Portfolio URL must start with http:// or https://.");
    }
    Ok(ProfileUpdate {
        bio: non_blank(&form.bio),
        skills: split_comma_list(&form.skills),
        experience_years,
        hourly_rate,
        portfolio_url,
        is_public: form.is_public,
    })
}

#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Pending,
    Existing(DeveloperProfile),
    Missing,
    Failed(String),
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let loaded = RwSignal::new(Loaded::Pending);
    let form = RwSignal::new(ProfileForm::default());
    let saving = RwSignal::new(false);

    Effect::new(move || {
        spawn_action(async move {
            match crate::net::profile::own_profile().await {
                Ok(profile) => {
                    form.set(ProfileForm::from_profile(&profile));
                    loaded.set(Loaded::Existing(profile));
                }
                Err(e) if e.is_not_found() => loaded.set(Loaded::Missing),
                Err(e) => loaded.set(Loaded::Failed(e.to_string())),
            }
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = match validate_profile(&form.get()) {
            Ok(update) => update,
            Err(message) => {
                notify(toasts, ToastKind::Info, message);
                return;
            }
        };
        saving.set(true);
        spawn_action(async move {
            match crate::net::profile::update_profile(&update).await {
                Ok(profile) => {
                    form.set(ProfileForm::from_profile(&profile));
                    loaded.set(Loaded::Existing(profile));
                    notify(toasts, ToastKind::Success, "Profile saved.");
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not save profile: {e}")),
            }
            saving.set(false);
        });
    };

    let text_field = move |label: &'static str, get: fn(&ProfileForm) -> String, set: fn(&mut ProfileForm, String)| {
        view! {
            <label>
                {label}
                <input
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        form.update(|f| set(f, v));
                    }
                />
            </label>
        }
    };

    view! {
        <section class="profile">
            <h1>"Your developer profile"</h1>
            {move || match loaded.get() {
                Loaded::Pending => view! { <p class="loading">"Loading profile..."</p> }.into_any(),
                Loaded::Failed(e) => view! { <p class="error">{e}</p> }.into_any(),
                Loaded::Missing => view! { <p>"You have no profile yet. Fill in the form to create one."</p> }.into_any(),
                Loaded::Existing(profile) => view! {
                    <div class="profile__preview">
                        <DeveloperCard profile/>
                    </div>
                }
                    .into_any(),
            }}
            <Show when=move || !matches!(loaded.get(), Loaded::Pending | Loaded::Failed(_))>
                <form class="profile__form" on:submit=on_save>
                    <label>
                        "Bio"
                        <textarea
                            prop:value=move || form.with(|f| f.bio.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                form.update(|f| f.bio = v);
                            }
                        ></textarea>
                    </label>
                    {text_field("Skills (comma separated)", |f| f.skills.clone(), |f, v| f.skills = v)}
                    {text_field("Years of experience", |f| f.experience_years.clone(), |f, v| f.experience_years = v)}
                    {text_field("Hourly rate (USD)", |f| f.hourly_rate.clone(), |f, v| f.hourly_rate = v)}
                    {text_field("Portfolio URL", |f| f.portfolio_url.clone(), |f, v| f.portfolio_url = v)}
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_public)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.is_public = checked);
                            }
                        />
                        "Show in the public directory"
                    </label>
                    <button type="submit" disabled=move || saving.get()>"Save profile"</button>
                </form>
            </Show>
        </section>
    }
}

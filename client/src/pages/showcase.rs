//! The signed-in developer's showcase: list, create, edit, delete.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use inbox::DeleteConfirm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::{Id, Showcase, ShowcaseDraft};

use crate::components::delete_button::{DeleteButton, armed_signal, confirm_click};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::auth::install_unauth_redirect;
use crate::util::form::{non_blank, split_comma_list};
use crate::util::task::{Fetched, spawn_action, spawn_into};

/// Raw showcase form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowcaseForm {
    pub title: String,
    pub description: String,
    pub demo_url: String,
    pub repository_url: String,
    /// Comma-separated.
    pub technologies: String,
}

impl ShowcaseForm {
    pub fn from_showcase(showcase: &Showcase) -> Self {
        Self {
            title: showcase.title.clone(),
            description: showcase.description.clone(),
            demo_url: showcase.demo_url.clone().unwrap_or_default(),
            repository_url: showcase.repository_url.clone().unwrap_or_default(),
            technologies: showcase.technologies.join(", "),
        }
    }
}

fn optional_url(raw: &str, message: &'static str) -> Result<Option<String>, &'static str> {
    match non_blank(raw) {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => Ok(Some(url)),
        Some(_) => Err(message),
        None => Ok(None),
    }
}

pub fn validate_showcase(form: &ShowcaseForm) -> Result<ShowcaseDraft, &'static str> {
    let title = non_blank(&form.title).ok_or("Give the showcase a title.")?;
    Ok(ShowcaseDraft {
        title,
        description: form.description.trim().to_owned(),
        demo_url: optional_url(&form.demo_url, "Demo URL must start with http:// or https://.")?,
        repository_url: optional_url(&form.repository_url, "Repository URL must start with http:// or https://.")?,
        technologies: split_comma_list(&form.technologies),
    })
}

/// Replace `updated` in place, or prepend it when new.
pub fn upsert_showcase(list: &mut Vec<Showcase>, updated: Showcase) {
    match list.iter_mut().find(|s| s.id == updated.id) {
        Some(slot) => *slot = updated,
        None => list.insert(0, updated),
    }
}

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let showcases = RwSignal::<Fetched<Vec<Showcase>>>::new(None);
    let confirm = RwSignal::new(DeleteConfirm::<Id>::default());
    let form = RwSignal::new(ShowcaseForm::default());
    // `Some(id)` while editing an existing entry.
    let editing = RwSignal::new(None::<Id>);

    Effect::new(move || spawn_into(showcases, crate::net::profile::showcases()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match validate_showcase(&form.get()) {
            Ok(draft) => draft,
            Err(message) => {
                notify(toasts, ToastKind::Info, message);
                return;
            }
        };
        let target = editing.get();
        spawn_action(async move {
            let result = match target {
                Some(id) => crate::net::profile::update_showcase(id, &draft).await,
                None => crate::net::profile::create_showcase(&draft).await,
            };
            match result {
                Ok(saved) => {
                    showcases.update(|s| {
                        if let Some(Ok(list)) = s.as_mut() {
                            upsert_showcase(list, saved);
                        }
                    });
                    form.set(ShowcaseForm::default());
                    editing.set(None);
                    notify(toasts, ToastKind::Success, "Showcase saved.");
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not save showcase: {e}")),
            }
        });
    };

    let on_edit = move |showcase: &Showcase| {
        form.set(ShowcaseForm::from_showcase(showcase));
        editing.set(Some(showcase.id));
    };

    let on_delete = move |id: Id| {
        if !confirm_click(confirm, id) {
            return;
        }
        spawn_action(async move {
            match crate::net::profile::delete_showcase(id).await {
                Ok(()) => {
                    showcases.update(|s| {
                        if let Some(Ok(list)) = s.as_mut() {
                            list.retain(|showcase| showcase.id != id);
                        }
                    });
                    if editing.get_untracked() == Some(id) {
                        editing.set(None);
                        form.set(ShowcaseForm::default());
                    }
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not delete showcase: {e}")),
            }
        });
    };

    let input = move |placeholder: &'static str, get: fn(&ShowcaseForm) -> String, set: fn(&mut ShowcaseForm, String)| {
        view! {
            <input
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    form.update(|f| set(f, v));
                }
            />
        }
    };

    view! {
        <section class="showcase">
            <h1>"Your showcase"</h1>
            <form class="showcase__form" on:submit=on_submit>
                {input("Title", |f| f.title.clone(), |f, v| f.title = v)}
                <textarea
                    placeholder="Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        form.update(|f| f.description = v);
                    }
                ></textarea>
                {input("Demo URL", |f| f.demo_url.clone(), |f, v| f.demo_url = v)}
                {input("Repository URL", |f| f.repository_url.clone(), |f, v| f.repository_url = v)}
                {input("Technologies (comma separated)", |f| f.technologies.clone(), |f, v| f.technologies = v)}
                <button type="submit">{move || if editing.get().is_some() { "Save changes" } else { "Add to showcase" }}</button>
                <Show when=move || editing.get().is_some()>
                    <button
                        type="button"
                        on:click=move |_| {
                            editing.set(None);
                            form.set(ShowcaseForm::default());
                        }
                    >
                        "Cancel"
                    </button>
                </Show>
            </form>
            {move || match showcases.get() {
                None => view! { <p class="loading">"Loading showcase..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p>"Nothing in your showcase yet."</p> }.into_any(),
                Some(Ok(list)) => view! {
                    <ul class="showcase__list">
                        {list
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                let technologies = item.technologies.join(", ");
                                let for_edit = item.clone();
                                view! {
                                    <li class="showcase__item">
                                        <h3>{item.title}</h3>
                                        <p>{item.description}</p>
                                        <p class="showcase__tech">{technologies}</p>
                                        {item.demo_url.map(|url| view! { <a href=url target="_blank">"Demo"</a> })}
                                        {item.repository_url.map(|url| view! { <a href=url target="_blank">"Source"</a> })}
                                        <button type="button" on:click=move |_| on_edit(&for_edit)>"Edit"</button>
                                        <DeleteButton
                                            armed=armed_signal(confirm, id)
                                            on_click=Callback::new(move |()| on_delete(id))
                                        />
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any(),
            }}
        </section>
    }
}

//! Client projects: list, create, delete.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use inbox::DeleteConfirm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::{Id, Project, ProjectDraft};

use crate::components::delete_button::{DeleteButton, armed_signal, confirm_click};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::auth::install_unauth_redirect;
use crate::util::form::non_blank;
use crate::util::task::{Fetched, spawn_action, spawn_into};

pub fn validate_project(name: &str, description: &str) -> Result<ProjectDraft, &'static str> {
    let name = non_blank(name).ok_or("Project name is required.")?;
    Ok(ProjectDraft {
        name,
        description: non_blank(description),
    })
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let projects = RwSignal::<Fetched<Vec<Project>>>::new(None);
    let confirm = RwSignal::new(DeleteConfirm::<Id>::default());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    Effect::new(move || spawn_into(projects, crate::net::work::projects()));

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match validate_project(&name.get(), &description.get()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        spawn_action(async move {
            match crate::net::work::create_project(&draft).await {
                Ok(project) => {
                    projects.update(|p| {
                        if let Some(Ok(list)) = p.as_mut() {
                            list.insert(0, project);
                        }
                    });
                    name.set(String::new());
                    description.set(String::new());
                    notify(toasts, ToastKind::Success, "Project created.");
                }
                Err(e) => info.set(format!("Could not create project: {e}")),
            }
        });
    };

    let on_delete = move |id: Id| {
        if !confirm_click(confirm, id) {
            return;
        }
        spawn_action(async move {
            match crate::net::work::delete_project(id).await {
                Ok(()) => {
                    projects.update(|p| {
                        if let Some(Ok(list)) = p.as_mut() {
                            list.retain(|project| project.id != id);
                        }
                    });
                    notify(toasts, ToastKind::Success, "Project deleted.");
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not delete project: {e}")),
            }
        });
    };

    view! {
        <section class="projects">
            <h1>"Projects"</h1>
            <form class="projects__create" on:submit=on_create>
                <input
                    placeholder="Project name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button type="submit">"Create project"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
            {move || match projects.get() {
                None => view! { <p class="loading">"Loading projects..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p>"No projects yet."</p> }.into_any(),
                Some(Ok(list)) => {
                    view! {
                        <ul class="projects__list">
                            {list
                                .into_iter()
                                .map(|project| {
                                    let id = project.id;
                                    view! {
                                        <li class="projects__row">
                                            <span class="projects__name">{project.name}</span>
                                            <span class="projects__description">
                                                {project.description.unwrap_or_default()}
                                            </span>
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
                        .into_any()
                }
            }}
        </section>
    }
}

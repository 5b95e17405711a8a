//! Requests: list, create, detail with edit, delete, sharing, and contact.
//!
//! Clients own requests; developers see the ones shared with them and can
//! open a conversation with the owner from the detail page.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use inbox::DeleteConfirm;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use wire::{Id, NewConversation, Project, Request, RequestDraft};

use crate::components::delete_button::{DeleteButton, armed_signal, confirm_click};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::auth::install_unauth_redirect;
use crate::util::form::{non_blank, parse_id_list, parse_optional, parse_route_id};
use crate::util::markdown::render_markdown_html;
use crate::util::task::{Fetched, spawn_action, spawn_into};

/// Raw request form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub title: String,
    pub content: String,
    /// Selected project id, empty for none.
    pub project_id: String,
    pub is_public: bool,
}

impl RequestForm {
    pub fn from_request(request: &Request) -> Self {
        Self {
            title: request.title.clone(),
            content: request.content.clone(),
            project_id: request.project_id.map(|id| id.to_string()).unwrap_or_default(),
            is_public: request.is_public,
        }
    }
}

pub fn validate_request(form: &RequestForm) -> Result<RequestDraft, &'static str> {
    let title = non_blank(&form.title).ok_or("A title is required.")?;
    let content = non_blank(&form.content).ok_or("Describe what you need.")?;
    let project_id = parse_optional::<Id>(&form.project_id, "Pick a valid project.")?;
    Ok(RequestDraft {
        title,
        content,
        project_id,
        is_public: form.is_public,
    })
}

/// "Shared with ..." line for the detail page, `None` when unshared.
pub fn shared_label(request: &Request) -> Option<String> {
    if request.shared_with.is_empty() {
        return None;
    }
    let names = request
        .shared_with
        .iter()
        .map(|s| {
            if s.can_edit {
                format!("#{} (can edit)", s.user_id)
            } else {
                format!("#{}", s.user_id)
            }
        })
        .collect::<Vec<_>>();
    Some(format!("Shared with {}", names.join(", ")))
}

/// Validate the opening message for a new conversation.
pub fn validate_contact(message: &str) -> Result<String, &'static str> {
    non_blank(message).ok_or("Write a message to start the conversation.")
}

#[component]
fn RequestFields(form: RwSignal<RequestForm>, projects: Signal<Vec<Project>>) -> impl IntoView {
    view! {
        <input
            placeholder="Title"
            prop:value=move || form.with(|f| f.title.clone())
            on:input=move |ev| {
                let v = event_target_value(&ev);
                form.update(|f| f.title = v);
            }
        />
        <textarea
            placeholder="What do you need built? (Markdown)"
            prop:value=move || form.with(|f| f.content.clone())
            on:input=move |ev| {
                let v = event_target_value(&ev);
                form.update(|f| f.content = v);
            }
        ></textarea>
        <select on:change=move |ev| {
            let v = event_target_value(&ev);
            form.update(|f| f.project_id = v);
        }>
            <option value="" selected=move || form.with(|f| f.project_id.is_empty())>"No project"</option>
            {move || {
                projects
                    .get()
                    .into_iter()
                    .map(|p| {
                        let value = p.id.to_string();
                        let selected_value = value.clone();
                        view! {
                            <option value=value selected=move || form.with(|f| f.project_id == selected_value)>
                                {p.name}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
        <label>
            <input
                type="checkbox"
                prop:checked=move || form.with(|f| f.is_public)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|f| f.is_public = checked);
                }
            />
            "Public"
        </label>
    }
}

fn project_names(projects: RwSignal<Fetched<Vec<Project>>>) -> Signal<Vec<Project>> {
    Signal::derive(move || match projects.get() {
        Some(Ok(list)) => list,
        _ => Vec::new(),
    })
}

#[component]
pub fn RequestsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let requests = RwSignal::<Fetched<Vec<Request>>>::new(None);
    let projects = RwSignal::<Fetched<Vec<Project>>>::new(None);
    let confirm = RwSignal::new(DeleteConfirm::<Id>::default());
    let form = RwSignal::new(RequestForm::default());
    let info = RwSignal::new(String::new());
    let loaded_for = StoredValue::new(None::<Id>);

    let developer = move || auth.with(AuthState::is_developer);

    Effect::new(move || {
        let state = auth.get();
        let Some(user_id) = state.user_id() else {
            return;
        };
        if loaded_for.get_value() == Some(user_id) {
            return;
        }
        loaded_for.set_value(Some(user_id));
        if state.is_developer() {
            spawn_into(requests, crate::net::work::shared_requests());
        } else {
            spawn_into(requests, crate::net::work::requests());
            spawn_into(projects, crate::net::work::projects());
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match validate_request(&form.get()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        spawn_action(async move {
            match crate::net::work::create_request(&draft).await {
                Ok(request) => {
                    requests.update(|r| {
                        if let Some(Ok(list)) = r.as_mut() {
                            list.insert(0, request);
                        }
                    });
                    form.set(RequestForm::default());
                    notify(toasts, ToastKind::Success, "Request created.");
                }
                Err(e) => info.set(format!("Could not create request: {e}")),
            }
        });
    };

    let on_delete = move |id: Id| {
        if !confirm_click(confirm, id) {
            return;
        }
        spawn_action(async move {
            match crate::net::work::delete_request(id).await {
                Ok(()) => requests.update(|r| {
                    if let Some(Ok(list)) = r.as_mut() {
                        list.retain(|request| request.id != id);
                    }
                }),
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not delete request: {e}")),
            }
        });
    };

    view! {
        <section class="requests">
            <h1>{move || if developer() { "Requests shared with you" } else { "Your requests" }}</h1>
            <Show when=move || !developer()>
                <form class="requests__create" on:submit=on_create>
                    <RequestFields form projects=project_names(projects)/>
                    <button type="submit">"Create request"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
            </Show>
            {move || match requests.get() {
                None => view! { <p class="loading">"Loading requests..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p>"No requests yet."</p> }.into_any(),
                Some(Ok(list)) => {
                    let owner_view = !developer();
                    view! {
                        <ul class="requests__list">
                            {list
                                .into_iter()
                                .map(|request| {
                                    let id = request.id;
                                    let public = request.is_public;
                                    view! {
                                        <li class="requests__row">
                                            <a href=format!("/requests/{id}")>{request.title}</a>
                                            <span class="requests__time">{request.updated_at.short_label()}</span>
                                            <Show when=move || public>
                                                <span class="requests__badge">"Public"</span>
                                            </Show>
                                            <Show when=move || owner_view>
                                                <DeleteButton
                                                    armed=armed_signal(confirm, id)
                                                    on_click=Callback::new(move |()| on_delete(id))
                                                />
                                            </Show>
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

#[component]
pub fn RequestDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    // Navigation requested from async handlers.
    let go_to = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(href) = go_to.get() {
            navigate(&href, NavigateOptions::default());
        }
    });

    let params = use_params_map();
    let request = RwSignal::<Fetched<Request>>::new(None);
    let projects = RwSignal::<Fetched<Vec<Project>>>::new(None);
    let form = RwSignal::new(RequestForm::default());
    let editing = RwSignal::new(false);
    let share_ids = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let confirm = RwSignal::new(DeleteConfirm::<Id>::default());

    Effect::new(move || match params.with(|p| parse_route_id(p.get("id").as_deref())) {
        Some(id) => spawn_into(request, crate::net::work::request(id)),
        None => request.set(Some(Err("That request does not exist.".to_owned()))),
    });

    let is_owner = move || {
        let me = auth.with(AuthState::user_id);
        request.with(|r| matches!((r, me), (Some(Ok(r)), Some(me)) if r.user_id == me))
    };

    let current = move || request.with(|r| r.as_ref().and_then(|r| r.as_ref().ok()).cloned());

    let on_edit = move |_| {
        if let Some(r) = current() {
            form.set(RequestForm::from_request(&r));
            if projects.get_untracked().is_none() {
                spawn_into(projects, crate::net::work::projects());
            }
            editing.set(true);
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = current().map(|r| r.id) else {
            return;
        };
        let draft = match validate_request(&form.get()) {
            Ok(draft) => draft,
            Err(message) => {
                notify(toasts, ToastKind::Info, message);
                return;
            }
        };
        spawn_action(async move {
            match crate::net::work::update_request(id, &draft).await {
                Ok(updated) => {
                    request.set(Some(Ok(updated)));
                    editing.set(false);
                    notify(toasts, ToastKind::Success, "Request saved.");
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not save request: {e}")),
            }
        });
    };

    let on_share = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = current().map(|r| r.id) else {
            return;
        };
        let ids = match parse_id_list(&share_ids.get()) {
            Ok(ids) => ids,
            Err(message) => {
                notify(toasts, ToastKind::Info, message);
                return;
            }
        };
        spawn_action(async move {
            match crate::net::work::share_request(id, ids).await {
                Ok(updated) => {
                    request.set(Some(Ok(updated)));
                    share_ids.set(String::new());
                    notify(toasts, ToastKind::Success, "Request shared.");
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not share request: {e}")),
            }
        });
    };

    let on_contact = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(r) = current() else {
            return;
        };
        let initial_message = match validate_contact(&contact.get()) {
            Ok(message) => message,
            Err(message) => {
                notify(toasts, ToastKind::Info, message);
                return;
            }
        };
        let draft = NewConversation {
            request_id: r.id,
            recipient_user_id: r.user_id,
            initial_message,
        };
        spawn_action(async move {
            match crate::net::conversations::create(&draft).await {
                Ok(conversation) => go_to.set(Some(format!("/conversations/{}", conversation.id))),
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not start conversation: {e}")),
            }
        });
    };

    let on_delete = move |id: Id| {
        if !confirm_click(confirm, id) {
            return;
        }
        spawn_action(async move {
            match crate::net::work::delete_request(id).await {
                Ok(()) => {
                    notify(toasts, ToastKind::Success, "Request deleted.");
                    go_to.set(Some("/requests".to_owned()));
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not delete request: {e}")),
            }
        });
    };

    view! {
        <section class="request">
            <a href="/requests">"← Requests"</a>
            {move || match request.get() {
                None => view! { <p class="loading">"Loading request..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(r)) => {
                    let id = r.id;
                    let shared = shared_label(&r);
                    view! {
                        <h1>{r.title.clone()}</h1>
                        <p class="request__meta">
                            {format!("Updated {}", r.updated_at.short_label())}
                            {r.is_public.then_some(" · Public")}
                        </p>
                        <div class="request__content" inner_html=render_markdown_html(&r.content)></div>
                        {shared.map(|label| view! { <p class="request__shared">{label}</p> })}
                        <Show when=is_owner>
                            <div class="request__actions">
                                <button type="button" on:click=on_edit>"Edit"</button>
                                <DeleteButton
                                    armed=armed_signal(confirm, id)
                                    on_click=Callback::new(move |()| on_delete(id))
                                />
                            </div>
                        </Show>
                    }
                        .into_any()
                }
            }}
            <Show when=move || is_owner() && editing.get()>
                <form class="request__edit" on:submit=on_save>
                    <RequestFields form projects=project_names(projects)/>
                    <button type="submit">"Save"</button>
                    <button type="button" on:click=move |_| editing.set(false)>"Cancel"</button>
                </form>
            </Show>
            <Show when=is_owner>
                <form class="request__share" on:submit=on_share>
                    <input
                        placeholder="User ids, comma separated"
                        prop:value=move || share_ids.get()
                        on:input=move |ev| share_ids.set(event_target_value(&ev))
                    />
                    <button type="submit">"Share"</button>
                </form>
            </Show>
            <Show when=move || request.with(|r| matches!(r, Some(Ok(_)))) && !is_owner()>
                <form class="request__contact" on:submit=on_contact>
                    <textarea
                        placeholder="Introduce yourself to the client"
                        prop:value=move || contact.get()
                        on:input=move |ev| contact.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit">"Message the client"</button>
                </form>
            </Show>
        </section>
    }
}

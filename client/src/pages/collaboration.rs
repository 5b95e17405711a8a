//! Support collaboration portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from a helpdesk link of the form
//! `/collaboration/{session_id}?token={access_token}`; no DevMarket account
//! is needed. The page loads the session, its participants, and the full
//! thread, then polls every 5 seconds for messages past the highest held id
//! and for the session record. No further requests go out once the session
//! is resolved.
//!
//! ERROR HANDLING
//! ==============
//! A failed initial load replaces the page with an error. Poll failures are
//! logged and counted; after three in a row the thread shows a reconnecting
//! hint until a poll succeeds.

#[cfg(test)]
#[path = "collaboration_test.rs"]
mod collaboration_test;

use inbox::{COLLABORATION_POLL_MS, CollaborationSync, still_current};
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use wire::SessionStatus;

use crate::components::message_list::{MessageList, MessageView};
use crate::net::collaboration::{self as api, SessionKey};
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::form::parse_route_id;
use crate::util::poll::{PollControl, spawn_poll, use_subscription};
use crate::util::task::spawn_action;

/// Build the session key from the route id and `token`/`access_token`.
pub fn session_key_from_route(
    id: Option<&str>,
    token: Option<String>,
    access_token: Option<String>,
) -> Result<SessionKey, &'static str> {
    let session_id = parse_route_id(id).ok_or("This collaboration link is not valid.")?;
    let access_token = token
        .or(access_token)
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or("This collaboration link is missing its access token.")?;
    Ok(SessionKey { session_id, access_token })
}

async fn load(key: &SessionKey) -> Result<CollaborationSync, wire::ApiError> {
    let session = api::session(key).await?;
    let participants = api::participants(key).await?;
    let messages = api::messages_after(key, 0).await?;
    Ok(CollaborationSync::new(session, participants, messages))
}

#[component]
pub fn CollaborationPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let query = use_query_map();

    let key = StoredValue::new(None::<SessionKey>);
    let sync = RwSignal::new(None::<CollaborationSync>);
    let load_error = RwSignal::new(None::<String>);
    let draft = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    Effect::new(move || {
        let resolved = session_key_from_route(
            params.with(|p| p.get("id")).as_deref(),
            query.with(|q| q.get("token")),
            query.with(|q| q.get("access_token")),
        );
        let next = match resolved {
            Ok(next) => next,
            Err(message) => {
                load_error.set(Some(message.to_owned()));
                return;
            }
        };
        if key.get_value().as_ref() == Some(&next) {
            return;
        }
        key.set_value(Some(next.clone()));
        sync.set(None);
        load_error.set(None);
        spawn_action(async move {
            let result = load(&next).await;
            // A newer link may have replaced this one while it loaded.
            if !still_current(key.get_value().as_ref(), &next) {
                return;
            }
            match result {
                Ok(loaded) => sync.set(Some(loaded)),
                Err(e) => {
                    leptos::logging::warn!("collaboration session {} failed to load: {e}", next.session_id);
                    load_error.set(Some(format!("We couldn't open this ticket: {e}")));
                }
            }
        });
    });

    let subscription = use_subscription();
    let guard = subscription.clone();
    spawn_poll(subscription, COLLABORATION_POLL_MS, false, move || {
        let guard = guard.clone();
        async move {
            let (Some(polled), Some((cursor, polling))) =
                (key.get_value(), sync.with_untracked(|s| s.as_ref().map(|s| (s.cursor(), s.should_poll()))))
            else {
                return PollControl::Continue;
            };
            // A resolved session issues no more requests; the loop idles so a
            // re-keyed route can resume it.
            if !polling {
                return PollControl::Continue;
            }
            let messages = api::messages_after(&polled, cursor).await;
            let session = api::session(&polled).await;
            if !still_current(key.get_value().as_ref(), &polled) {
                return PollControl::Continue;
            }
            guard.deliver((messages, session), |(messages, session)| {
                sync.update(|s| {
                    if let Some(s) = s.as_mut() {
                        for e in s.apply_tick(messages, session) {
                            leptos::logging::warn!("collaboration poll failed: {e}");
                        }
                    }
                });
            });
            PollControl::Continue
        }
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        let Some(session_key) = key.get_value() else {
            return;
        };
        let content = match CollaborationSync::prepare_message(&draft.get()) {
            Ok(content) => content,
            Err(e) => {
                notify(toasts, ToastKind::Info, e.to_string());
                return;
            }
        };
        sending.set(true);
        spawn_action(async move {
            let result = api::send_message(&session_key, &content).await;
            if !still_current(key.get_value().as_ref(), &session_key) {
                sending.set(false);
                return;
            }
            match result {
                Ok(message) => {
                    sync.update(|s| {
                        if let Some(s) = s.as_mut() {
                            s.apply_sent(message);
                        }
                    });
                    draft.set(String::new());
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Message not sent: {e}")),
            }
            sending.set(false);
        });
    };

    let on_status = move |raw: String| {
        let (Some(session_key), Some(next)) = (key.get_value(), SessionStatus::parse(&raw)) else {
            return;
        };
        let change = sync.with_untracked(|s| s.as_ref().map(|s| s.request_status_change(next)));
        let change = match change {
            Some(Ok(change)) => change,
            Some(Err(e)) => {
                notify(toasts, ToastKind::Info, e.to_string());
                return;
            }
            None => return,
        };
        spawn_action(async move {
            let result = api::change_status(&session_key, &change).await;
            if !still_current(key.get_value().as_ref(), &session_key) {
                return;
            }
            match result {
                Ok(session) => {
                    sync.update(|s| {
                        if let Some(s) = s.as_mut() {
                            s.apply_session(session);
                        }
                    });
                    notify(toasts, ToastKind::Success, format!("Ticket marked {}.", change.status.label()));
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Status not changed: {e}")),
            }
        });
    };

    let views = Signal::derive(move || {
        sync.with(|s| {
            s.as_ref()
                .map(|s| s.messages().iter().map(|m| MessageView::from_collaboration(m, s)).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let header = move || {
        sync.with(|s| {
            s.as_ref().map(|s| {
                let session = s.session();
                (
                    session.external_ticket_id.clone(),
                    session.title.clone().unwrap_or_else(|| "Support ticket".to_owned()),
                    session.source_system.clone(),
                    s.status(),
                    s.can_manage_status(),
                    s.participants().iter().map(|p| p.name.clone()).collect::<Vec<_>>(),
                )
            })
        })
    };

    view! {
        <section class="collaboration">
            {move || {
                if let Some(message) = load_error.get() {
                    return view! {
                        <div class="collaboration__error">
                            <p class="error">{message}</p>
                            <a href="/">"Return to tickets"</a>
                        </div>
                    }
                        .into_any();
                }
                let Some((ticket, title, source, status, can_manage, people)) = header() else {
                    return view! { <p class="loading">"Opening ticket..."</p> }.into_any();
                };
                view! {
                    <header class="collaboration__header">
                        <h1>{title}</h1>
                        <p class="collaboration__ticket">
                            {format!("Ticket {ticket}")}
                            {source.map(|s| format!(" · {s}"))}
                        </p>
                        <Show
                            when=move || can_manage
                            fallback=move || {
                                view! { <span class="collaboration__status">{status.label()}</span> }
                            }
                        >
                            <select
                                class="collaboration__status-select"
                                on:change=move |ev| on_status(event_target_value(&ev))
                            >
                                {SessionStatus::ALL
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.as_str() selected={option == status}>
                                                {option.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </Show>
                        <p class="collaboration__participants">{people.join(", ")}</p>
                    </header>
                }
                    .into_any()
            }}
            <Show when=move || sync.with(|s| s.as_ref().is_some_and(CollaborationSync::connection_degraded))>
                <p class="collaboration__degraded">"Connection lost, retrying..."</p>
            </Show>
            <Show when=move || sync.with(Option::is_some)>
                <MessageList messages=views/>
                <Show
                    when=move || sync.with(|s| s.as_ref().is_some_and(CollaborationSync::should_poll))
                    fallback=|| view! { <p class="collaboration__resolved">"This ticket is resolved."</p> }
                >
                    <form class="collaboration__composer" on:submit=on_send>
                        <textarea
                            placeholder="Reply to this ticket"
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        ></textarea>
                        <button type="submit" disabled=move || sending.get()>"Send"</button>
                    </form>
                </Show>
            </Show>
        </section>
    }
}

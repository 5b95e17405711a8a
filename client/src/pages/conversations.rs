//! Conversation list and thread pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list reuses `inbox::NotificationTracker` for ordering, the unread
//! highlight, and two-click delete. The thread page polls its messages every
//! 5 seconds, merges them by id, and marks the conversation read on mount.

use inbox::thread::merge_by_id;
use inbox::{CONVERSATION_LIST_POLL_MS, CONVERSATION_THREAD_POLL_MS, ConfirmOutcome, NotificationTracker, still_current};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use wire::{ConversationMessage, Id};

use crate::components::delete_button::{DeleteButton, after_confirm_window};
use crate::components::message_list::{MessageList, MessageView};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::auth::install_unauth_redirect;
use crate::util::clock::now_ms;
use crate::util::form::parse_route_id;
use crate::util::poll::{PollControl, spawn_poll, use_subscription};
use crate::util::task::{Fetched, spawn_action};

#[component]
pub fn ConversationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let tracker = RwSignal::new(NotificationTracker::default());
    let loaded = RwSignal::new(false);

    Effect::new(move || {
        let user_id = auth.with(AuthState::user_id);
        if tracker.with_untracked(NotificationTracker::user_id) != user_id {
            tracker.update(|t| t.set_user(user_id));
        }
    });

    let subscription = use_subscription();
    let guard = subscription.clone();
    spawn_poll(subscription, CONVERSATION_LIST_POLL_MS, true, move || {
        let guard = guard.clone();
        async move {
            if tracker.with_untracked(NotificationTracker::user_id).is_none() {
                return PollControl::Continue;
            }
            let result = crate::net::conversations::list().await;
            guard.deliver(result, |result| {
                match result {
                    Ok(list) => tracker.update(|t| t.apply_refresh(list, now_ms())),
                    Err(e) => {
                        leptos::logging::warn!("conversation list refresh failed: {e}");
                        tracker.update(|t| t.record_failure(e.to_string()));
                    }
                }
                loaded.set(true);
            });
            PollControl::Continue
        }
    });

    let on_delete = move |id: Id| {
        let mut outcome = ConfirmOutcome::Armed;
        tracker.update(|t| outcome = t.delete_click(id, now_ms()));
        if outcome == ConfirmOutcome::Armed {
            after_confirm_window(move || {
                tracker.update(|t| {
                    t.expire_delete(now_ms());
                });
            });
            return;
        }
        spawn_action(async move {
            match crate::net::conversations::delete(id).await {
                Ok(()) => notify(toasts, ToastKind::Success, "Conversation deleted."),
                Err(e) => notify(toasts, ToastKind::Error, format!("Could not delete conversation: {e}")),
            }
        });
    };

    let rows = move || {
        tracker.with(|t| {
            t.conversations()
                .iter()
                .map(|c| (c.id, c.display_title(), c.updated_at.short_label(), t.is_unread(c.id)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="conversations">
            <h1>"Conversations"</h1>
            {move || tracker.with(|t| t.last_error().map(|e| view! { <p class="error">{e.to_owned()}</p> }))}
            <Show when=move || loaded.get() fallback=|| view! { <p class="loading">"Loading conversations..."</p> }>
                <Show
                    when=move || tracker.with(|t| !t.conversations().is_empty())
                    fallback=|| view! { <p class="conversations__empty">"No conversations yet."</p> }
                >
                    <ul class="conversations__list">
                        <For
                            each=rows
                            key=|row| row.clone()
                            children=move |(id, title, updated, unread)| {
                                let armed = Signal::derive(move || tracker.with(|t| t.delete_armed(id, now_ms())));
                                view! {
                                    <li class="conversations__row" class:conversations__row--unread=unread>
                                        <a href=format!("/conversations/{id}")>{title}</a>
                                        <span class="conversations__time">{updated}</span>
                                        <DeleteButton armed on_click=Callback::new(move |()| on_delete(id))/>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}

#[component]
pub fn ConversationDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let conversation_id = move || params.with(|p| parse_route_id(p.get("id").as_deref()));

    let conversation = RwSignal::<Fetched<wire::Conversation>>::new(None);
    let messages = RwSignal::new(Vec::<ConversationMessage>::new());
    let draft = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let opened = StoredValue::new(None::<Id>);

    Effect::new(move || {
        let Some(id) = conversation_id() else {
            opened.set_value(None);
            messages.set(Vec::new());
            conversation.set(Some(Err("That conversation does not exist.".to_owned())));
            return;
        };
        if opened.get_value() == Some(id) {
            return;
        }
        opened.set_value(Some(id));
        messages.set(Vec::new());
        conversation.set(None);
        spawn_action(async move {
            let result = crate::net::conversations::fetch(id).await.map_err(|e| e.to_string());
            // The route may have moved to another conversation meanwhile.
            if still_current(opened.get_value().as_ref(), &id) {
                conversation.set(Some(result));
            }
        });
        spawn_action(async move {
            if let Err(e) = crate::net::conversations::mark_read(id).await {
                leptos::logging::warn!("mark read failed for conversation {id}: {e}");
            }
        });
    });

    Effect::new(move || {
        if let Some(Ok(c)) = conversation.get() {
            if !c.messages.is_empty() {
                messages.update(|held| {
                    merge_by_id(held, c.messages);
                });
            }
        }
    });

    let subscription = use_subscription();
    let guard = subscription.clone();
    spawn_poll(subscription, CONVERSATION_THREAD_POLL_MS, true, move || {
        let guard = guard.clone();
        async move {
            let Some(id) = opened.get_value() else {
                return PollControl::Continue;
            };
            let result = crate::net::conversations::messages(id).await;
            if !still_current(opened.get_value().as_ref(), &id) {
                return PollControl::Continue;
            }
            guard.deliver(result, |result| match result {
                Ok(batch) => messages.update(|held| {
                    merge_by_id(held, batch);
                }),
                Err(e) => leptos::logging::warn!("message poll failed for conversation {id}: {e}"),
            });
            PollControl::Continue
        }
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = opened.get_value() else {
            return;
        };
        let content = draft.get().trim().to_owned();
        if content.is_empty() || sending.get() {
            return;
        }
        sending.set(true);
        spawn_action(async move {
            match crate::net::conversations::send_message(id, &content).await {
                Ok(message) => {
                    if still_current(opened.get_value().as_ref(), &id) {
                        messages.update(|held| {
                            merge_by_id(held, vec![message]);
                        });
                        draft.set(String::new());
                    }
                }
                Err(e) => notify(toasts, ToastKind::Error, format!("Message not sent: {e}")),
            }
            sending.set(false);
        });
    };

    let views = Signal::derive(move || {
        let me = auth.with(AuthState::user_id);
        messages.with(|held| held.iter().map(|m| MessageView::from_conversation(m, me)).collect::<Vec<_>>())
    });

    view! {
        <section class="conversation">
            <a class="conversation__back" href="/conversations">"← All conversations"</a>
            {move || match conversation.get() {
                None => view! { <p class="loading">"Loading conversation..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(c)) => {
                    view! {
                        <h1>{c.display_title()}</h1>
                        <p class="conversation__status">{c.status.clone()}</p>
                    }
                        .into_any()
                }
            }}
            <MessageList messages=views/>
            <form class="conversation__composer" on:submit=on_send>
                <textarea
                    class="conversation__input"
                    placeholder="Write a message"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || sending.get() || draft.get().trim().is_empty()>
                    "Send"
                </button>
            </form>
        </section>
    }
}

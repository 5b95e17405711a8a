//! Navbar badge for conversations with unseen activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns an `inbox::NotificationTracker` for the signed-in user. The list is
//! refreshed on mount and every 30 seconds through `spawn_poll`; results
//! landing after the bell unmounts are dropped by its subscription. Failed
//! refreshes are logged and leave the previous list in place.

use inbox::notifications::MarkRead;
use inbox::{CONVERSATION_LIST_POLL_MS, NotificationTracker};
use leptos::prelude::*;
use wire::Id;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::poll::{PollControl, spawn_poll, use_subscription};

#[component]
pub fn NotificationBell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let tracker = RwSignal::new(NotificationTracker::default());

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
            guard.deliver(result, |result| match result {
                Ok(list) => tracker.update(|t| t.apply_refresh(list, now_ms())),
                Err(e) => {
                    leptos::logging::warn!("conversation refresh failed: {e}");
                    tracker.update(|t| t.record_failure(e.to_string()));
                }
            });
            PollControl::Continue
        }
    });

    let mark_read = move |id: Id| {
        let mut outcome = MarkRead::Unknown;
        tracker.update(|t| outcome = t.mark_as_read(id, now_ms()));
        if outcome != MarkRead::Marked {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::conversations::mark_read(id).await {
                leptos::logging::warn!("mark read failed for conversation {id}: {e}");
            }
        });
    };

    let badge = move || tracker.with(NotificationTracker::badge_count);

    view! {
        <div class="notification-bell">
            <button
                class="notification-bell__toggle"
                type="button"
                aria-label="Notifications"
                on:click=move |_| ui.update(|u| u.notifications_open = !u.notifications_open)
            >
                "🔔"
                <Show when=move || { badge() > 0 }>
                    <span class="notification-bell__badge">{badge}</span>
                </Show>
            </button>
            <Show when=move || ui.get().notifications_open>
                <div class="notification-bell__dropdown">
                    <Show
                        when=move || { badge() > 0 }
                        fallback=|| view! { <p class="notification-bell__empty">"No new conversations."</p> }
                    >
                        <ul class="notification-bell__list">
                            <For
                                each=move || {
                                    tracker
                                        .with(|t| {
                                            t.new_conversations()
                                                .into_iter()
                                                .map(|c| (c.id, c.display_title(), c.updated_at.short_label()))
                                                .collect::<Vec<_>>()
                                        })
                                }
                                key=|(id, _, _)| *id
                                children=move |(id, title, updated)| {
                                    view! {
                                        <li class="notification-bell__item">
                                            <a href=format!("/conversations/{id}")>{title}</a>
                                            <span class="notification-bell__time">{updated}</span>
                                            <button type="button" on:click=move |_| mark_read(id)>
                                                "Mark read"
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                    <a class="notification-bell__all" href="/conversations">"All conversations"</a>
                </div>
            </Show>
        </div>
    }
}

//! Role-specific landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clients see their requests, projects, and conversations; developers see
//! requests shared with them, their showcase, and conversations. Each role
//! fetches its three lists concurrently and shows one inline error if any
//! of them fails.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::{Conversation, Id, Project, Request, Role, Showcase};

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::task::Fetched;

/// Requests listed on the client dashboard.
pub const RECENT_REQUESTS: usize = 5;

/// Counters plus the recent-request preview for one role.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub role: Role,
    /// `(label, count)` tiles in display order.
    pub tiles: Vec<(&'static str, usize)>,
    pub recent: Vec<Request>,
}

/// Most recently updated requests first.
pub fn recent_requests(requests: &[Request], limit: usize) -> Vec<Request> {
    let mut sorted = requests.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
    sorted.truncate(limit);
    sorted
}

fn unread_count(conversations: &[Conversation], user_id: Id, now_ms: i64) -> usize {
    inbox::unread::unread_ids(conversations, user_id, now_ms).len()
}

pub fn client_summary(
    requests: &[Request],
    projects: &[Project],
    conversations: &[Conversation],
    user_id: Id,
    now_ms: i64,
) -> DashboardSummary {
    DashboardSummary {
        role: Role::Client,
        tiles: vec![
            ("Requests", requests.len()),
            ("Projects", projects.len()),
            ("Conversations", conversations.len()),
            ("Unread", unread_count(conversations, user_id, now_ms)),
        ],
        recent: recent_requests(requests, RECENT_REQUESTS),
    }
}

pub fn developer_summary(
    shared: &[Request],
    showcases: &[Showcase],
    conversations: &[Conversation],
    user_id: Id,
    now_ms: i64,
) -> DashboardSummary {
    DashboardSummary {
        role: Role::Developer,
        tiles: vec![
            ("Shared requests", shared.len()),
            ("Showcase items", showcases.len()),
            ("Conversations", conversations.len()),
            ("Unread", unread_count(conversations, user_id, now_ms)),
        ],
        recent: recent_requests(shared, RECENT_REQUESTS),
    }
}

#[cfg(feature = "hydrate")]
async fn load_summary(role: Role, user_id: Id) -> Result<DashboardSummary, wire::ApiError> {
    use crate::net::{conversations, profile, work};
    let now = crate::util::clock::now_ms();
    if role == Role::Developer {
        let (shared, showcases, convs) =
            futures::join!(work::shared_requests(), profile::showcases(), conversations::list());
        Ok(developer_summary(&shared?, &showcases?, &convs?, user_id, now))
    } else {
        let (requests, projects, convs) = futures::join!(work::requests(), work::projects(), conversations::list());
        Ok(client_summary(&requests?, &projects?, &convs?, user_id, now))
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let summary = RwSignal::<Fetched<DashboardSummary>>::new(None);
    let loaded_for = StoredValue::new(None::<Id>);

    Effect::new(move || {
        let state = auth.get();
        let (Some(user_id), Some(role)) = (state.user_id(), state.role()) else {
            return;
        };
        if loaded_for.get_value() == Some(user_id) {
            return;
        }
        loaded_for.set_value(Some(user_id));
        summary.set(None);
        #[cfg(feature = "hydrate")]
        crate::util::task::spawn_into(summary, load_summary(role, user_id));
        #[cfg(not(feature = "hydrate"))]
        let _ = role;
    });

    view! {
        <section class="dashboard">
            <h1>
                {move || {
                    auth.get()
                        .user
                        .map(|u| format!("Welcome back, {}", u.display_name()))
                        .unwrap_or_else(|| "Dashboard".to_owned())
                }}
            </h1>
            {move || match summary.get() {
                None => view! { <p class="loading">"Loading your dashboard..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{format!("Could not load your dashboard: {e}")}</p> }.into_any(),
                Some(Ok(summary)) => view! { <SummaryView summary/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn SummaryView(summary: DashboardSummary) -> impl IntoView {
    let heading = if summary.role == Role::Developer { "Recently shared with you" } else { "Recent requests" };
    view! {
        <ul class="dashboard__tiles">
            {summary
                .tiles
                .into_iter()
                .map(|(label, count)| {
                    view! {
                        <li class="dashboard__tile">
                            <span class="dashboard__count">{count}</span>
                            <span class="dashboard__label">{label}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
        <h2>{heading}</h2>
        <Show when={
            let empty = summary.recent.is_empty();
            move || empty
        }>
            <p class="dashboard__empty">"Nothing here yet."</p>
        </Show>
        <ul class="dashboard__recent">
            {summary
                .recent
                .into_iter()
                .map(|r| {
                    view! {
                        <li>
                            <a href=format!("/requests/{}", r.id)>{r.title}</a>
                            <span class="dashboard__time">{r.updated_at.short_label()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

//! Top navigation bar with role-aware links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Signed-in users also get the notification bell
//! and the inactivity watchdog, both of which live as long as the navbar.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use wire::Role;

use crate::components::notification_bell::NotificationBell;
use crate::components::session_warning::SessionWarning;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::sign_out;
use crate::util::dark_mode;
use crate::util::task::redirect;
use crate::util::watchdog::install_session_watchdog;

/// Links shown for a role, as `(href, label)`.
pub fn nav_links(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("/marketplace", "Marketplace"), ("/developers", "Developers")];
    match role {
        None => {}
        Some(Role::Developer) => {
            links.insert(0, ("/dashboard", "Dashboard"));
            links.extend([
                ("/requests", "Shared requests"),
                ("/showcase", "Showcase"),
                ("/marketplace/upload", "Sell"),
                ("/profile", "Profile"),
                ("/conversations", "Conversations"),
            ]);
        }
        Some(_) => {
            links.insert(0, ("/dashboard", "Dashboard"));
            links.extend([
                ("/projects", "Projects"),
                ("/requests", "Requests"),
                ("/conversations", "Conversations"),
            ]);
        }
    }
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_session_watchdog(auth, ui);

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_logout = move |_| {
        sign_out(auth);
        redirect("/login");
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"DevMarket"</a>
            <ul class="navbar__links">
                {move || {
                    nav_links(auth.get().role())
                        .into_iter()
                        .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                        .collect_view()
                }}
            </ul>
            <div class="navbar__actions">
                <button class="navbar__theme" type="button" on:click=on_toggle_dark>
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <Show
                    when=move || auth.get().user.is_some()
                    fallback=|| {
                        view! {
                            <a class="navbar__login" href="/login">"Sign in"</a>
                            <a class="navbar__register" href="/register">"Register"</a>
                        }
                    }
                >
                    <NotificationBell/>
                    <span class="navbar__user">
                        {move || auth.get().user.map(|u| u.display_name()).unwrap_or_default()}
                    </span>
                    <button class="navbar__logout" type="button" on:click=on_logout>"Sign out"</button>
                </Show>
            </div>
        </nav>
        <SessionWarning/>
    }
}

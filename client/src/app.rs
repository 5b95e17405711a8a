//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, toast_host::ToastHost};
use crate::config::{ClientConfig, META_NAME};
use crate::pages::{
    collaboration::CollaborationPage,
    conversations::{ConversationDetailPage, ConversationsPage},
    dashboard::DashboardPage,
    developers::{DeveloperDetailPage, DevelopersPage},
    login::LoginPage,
    marketplace::{MarketplacePage, ProductDetailPage, ProductUploadPage},
    oauth_callback::OAuthCallbackPage,
    profile::ProfilePage,
    projects::ProjectsPage,
    register::RegisterPage,
    requests::{RequestDetailPage, RequestsPage},
    showcase::ShowcasePage,
};
use crate::state::{auth::AuthState, toast::ToastState, ui::UiState};
use crate::util::{auth::restore_session, dark_mode};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is embedded in a meta tag so the WASM bundle sees the same
/// runtime settings as the host.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let config_json = config.to_meta_content();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_NAME content=config_json/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::resolving());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(ClientConfig::current());

    // Effects only run after hydration, so SSR markup stays signed-out/light.
    Effect::new(move || {
        restore_session(auth);
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/devmarket.css"/>
        <Title text="DevMarket"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=OAuthCallbackPage/>
                    <Route path=StaticSegment("conversations") view=ConversationsPage/>
                    <Route path=(StaticSegment("conversations"), ParamSegment("id")) view=ConversationDetailPage/>
                    <Route path=(StaticSegment("collaboration"), ParamSegment("id")) view=CollaborationPage/>
                    <Route path=StaticSegment("marketplace") view=MarketplacePage/>
                    <Route path=(StaticSegment("marketplace"), StaticSegment("upload")) view=ProductUploadPage/>
                    <Route path=(StaticSegment("marketplace"), ParamSegment("id")) view=ProductDetailPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("requests") view=RequestsPage/>
                    <Route path=(StaticSegment("requests"), ParamSegment("id")) view=RequestDetailPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("developers") view=DevelopersPage/>
                    <Route path=(StaticSegment("developers"), ParamSegment("id")) view=DeveloperDetailPage/>
                    <Route path=StaticSegment("showcase") view=ShowcasePage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}

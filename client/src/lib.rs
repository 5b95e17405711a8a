//! # client
//!
//! Leptos SSR + hydrate frontend for the DevMarket marketplace: auth,
//! conversations and their unread badge, the external collaboration portal,
//! the product marketplace, projects and requests, developer profiles, and
//! showcases.
//!
//! The `ssr` feature builds the crate for the axum host; `hydrate` builds the
//! WASM bundle whose [`hydrate`] entry point attaches to the server markup.
//! Sync decisions live in the `inbox` crate and the wire contract in `wire`;
//! this crate wires them to signals, timers, and HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
#[path = "fixtures_test.rs"]
pub(crate) mod fixtures;

/// WASM entry point: install panic and log hooks, then hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if config::ClientConfig::current().env == config::AppEnv::Development {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("console logger was already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}

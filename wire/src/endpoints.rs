//! Endpoint paths relative to the configured API base URL.
//!
//! Keeping the path strings in one place lets the client HTTP layer stay
//! generic and lets tests pin the exact URLs the backend expects.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::models::Id;

/// Percent-encode a query value.
#[must_use]
pub fn encode_query_value(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

/// Join a base URL and a relative path with exactly one slash.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

// =============================================================================
// AUTH
// =============================================================================

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_ME: &str = "/auth/me";

/// Backend-hosted OAuth entry point for `provider` (e.g. `github`).
#[must_use]
pub fn oauth_start(provider: &str) -> String {
    format!("/auth/{}", encode_query_value(provider))
}

// =============================================================================
// CONVERSATIONS
// =============================================================================

pub const CONVERSATIONS_USER_LIST: &str = "/conversations/user/list";
pub const CONVERSATIONS: &str = "/conversations/";

#[must_use]
pub fn conversation(id: Id) -> String {
    format!("/conversations/{id}")
}

#[must_use]
pub fn conversation_read(id: Id) -> String {
    format!("/conversations/{id}/read")
}

#[must_use]
pub fn conversation_messages(id: Id) -> String {
    format!("/conversations/{id}/messages")
}

// =============================================================================
// COLLABORATION
// =============================================================================

#[must_use]
pub fn collaboration_session(session_id: Id, access_token: &str) -> String {
    format!(
        "/collaboration/sessions/{session_id}?access_token={}",
        encode_query_value(access_token)
    )
}

#[must_use]
pub fn collaboration_participants(session_id: Id, access_token: &str) -> String {
    format!(
        "/collaboration/sessions/{session_id}/participants?access_token={}",
        encode_query_value(access_token)
    )
}

/// Messages newer than `after_id`; `0` fetches the full history.
#[must_use]
pub fn collaboration_messages_after(session_id: Id, access_token: &str, after_id: Id) -> String {
    format!(
        "/collaboration/sessions/{session_id}/messages?access_token={}&after_id={after_id}",
        encode_query_value(access_token)
    )
}

#[must_use]
pub fn collaboration_post_message(session_id: Id, access_token: &str) -> String {
    format!(
        "/collaboration/sessions/{session_id}/messages?access_token={}",
        encode_query_value(access_token)
    )
}

#[must_use]
pub fn collaboration_status(session_id: Id, access_token: &str) -> String {
    format!(
        "/collaboration/sessions/{session_id}/status?access_token={}",
        encode_query_value(access_token)
    )
}

// =============================================================================
// PROJECTS & REQUESTS
// =============================================================================

pub const REQUESTS: &str = "/requests/";
pub const REQUESTS_SHARED: &str = "/requests/shared";
pub const PROJECTS: &str = "/projects/";

#[must_use]
pub fn request(id: Id) -> String {
    format!("/requests/{id}")
}

#[must_use]
pub fn request_share(id: Id) -> String {
    format!("/requests/{id}/share")
}

#[must_use]
pub fn project(id: Id) -> String {
    format!("/projects/{id}")
}

// =============================================================================
// MARKETPLACE
// =============================================================================

pub const PRODUCTS: &str = "/marketplace/products";

/// Product listing, optionally filtered by a search string.
#[must_use]
pub fn products(search: Option<&str>) -> String {
    match search.map(str::trim) {
        Some(query) if !query.is_empty() => format!("{PRODUCTS}?search={}", encode_query_value(query)),
        _ => PRODUCTS.to_owned(),
    }
}

#[must_use]
pub fn product(id: Id) -> String {
    format!("{PRODUCTS}/{id}")
}

#[must_use]
pub fn product_download(id: Id) -> String {
    format!("{PRODUCTS}/{id}/download")
}

#[must_use]
pub fn product_purchase(id: Id) -> String {
    format!("{PRODUCTS}/{id}/purchase")
}

// =============================================================================
// PROFILES & SHOWCASE
// =============================================================================

pub const PROFILE_DEVELOPER: &str = "/profile/developer";
pub const PROFILE_DEVELOPERS_PUBLIC: &str = "/profile/developers/public";
pub const SHOWCASE: &str = "/profile/showcase";

#[must_use]
pub fn developer(id: Id) -> String {
    format!("/profile/developers/{id}")
}

#[must_use]
pub fn showcase(id: Id) -> String {
    format!("{SHOWCASE}/{id}")
}

//! Bearer token persistence.
//!
//! The token is the only credential the client keeps. It is written after
//! login, registration, or an OAuth callback, and cleared on logout, on any
//! 401 from the backend, and when the inactivity watchdog expires.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::storage;

/// `localStorage` key holding the access token.
pub const TOKEN_KEY: &str = "devmarket_token";

/// Current access token, if signed in.
pub fn load_token() -> Option<String> {
    storage::load_string(TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

pub fn store_token(token: &str) {
    storage::save_string(TOKEN_KEY, token.trim());
}

pub fn clear_token() {
    storage::remove(TOKEN_KEY);
}

/// `Authorization` header value for `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

/// Pull the token out of an OAuth callback query map.
///
/// Accepts `token` or `access_token`; an `error` value wins over both.
///
/// # Errors
///
/// Returns the provider error text, or a generic message when no token
/// is present.
pub fn token_from_callback(token: Option<String>, access_token: Option<String>, error: Option<String>) -> Result<String, String> {
    if let Some(error) = error.map(|e| e.trim().to_owned()).filter(|e| !e.is_empty()) {
        return Err(format!("Sign-in was not completed: {error}"));
    }
    token
        .or(access_token)
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "Sign-in did not return a token. Please try again.".to_owned())
}

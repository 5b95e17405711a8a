//! Authentication endpoints.

use wire::endpoints;
use wire::{ApiError, AuthToken, LoginRequest, RegisterRequest, User};

use super::api;

/// # Errors
///
/// Bad credentials come back as [`ApiError::Unauthorized`] without ending
/// any session.
pub async fn login(email: &str, password: &str) -> Result<AuthToken, ApiError> {
    let body = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    api::post(endpoints::AUTH_LOGIN, &body).await
}

/// # Errors
///
/// Validation failures (duplicate email, weak password) surface the
/// backend detail.
pub async fn register(request: &RegisterRequest) -> Result<AuthToken, ApiError> {
    api::post(endpoints::AUTH_REGISTER, request).await
}

/// The user owning the stored token.
///
/// # Errors
///
/// See [`api::get`].
pub async fn me() -> Result<User, ApiError> {
    api::get(endpoints::AUTH_ME).await
}

/// Absolute URL that starts an OAuth sign-in with `provider`.
pub fn oauth_url(provider: &str) -> String {
    crate::config::ClientConfig::current().url(&endpoints::oauth_start(provider))
}

//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior, and
//! every sign-in path (password, registration, OAuth callback) finishes the
//! same way: store the token, resolve `/auth/me`, publish the user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use wire::{ApiError, User};

use crate::state::auth::AuthState;
use crate::util::session;

/// True once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Store `token`, fetch the user it belongs to, and publish it.
///
/// # Errors
///
/// Propagates the `/auth/me` failure after clearing the token.
pub async fn complete_sign_in(auth: RwSignal<AuthState>, token: &str) -> Result<User, ApiError> {
    session::store_token(token);
    match crate::net::auth::me().await {
        Ok(user) => {
            auth.set(AuthState::signed_in(user.clone()));
            Ok(user)
        }
        Err(e) => {
            session::clear_token();
            auth.set(AuthState::signed_out());
            Err(e)
        }
    }
}

/// Resolve the stored token (if any) into the current user.
///
/// Run from an effect so it only happens after hydration.
pub fn restore_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        if session::load_token().is_none() {
            auth.set(AuthState::signed_out());
            return;
        }
        auth.set(AuthState::resolving());
        leptos::task::spawn_local(async move {
            match crate::net::auth::me().await {
                Ok(user) => auth.set(AuthState::signed_in(user)),
                Err(e) => {
                    leptos::logging::warn!("session restore failed: {e}");
                    session::clear_token();
                    auth.set(AuthState::signed_out());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Clear the token and the published user.
pub fn sign_out(auth: RwSignal<AuthState>) {
    session::clear_token();
    auth.set(AuthState::signed_out());
}

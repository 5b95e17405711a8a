//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<AuthState>` by the root `App`. Route guards,
//! the navbar, the notification bell, and role-specific pages read it; the
//! login, register, and OAuth callback pages write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use wire::{Id, Role, User};

/// Current user and whether the initial `/auth/me` lookup is still running.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State while the stored token is being validated.
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<Id> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_developer(&self) -> bool {
        matches!(self.role(), Some(Role::Developer))
    }
}

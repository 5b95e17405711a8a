use super::*;
use wire::Role;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState::signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::resolving()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState::signed_in(User {
        id: 1,
        email: "a@b.com".to_owned(),
        full_name: None,
        role: Role::Client,
        avatar_url: None,
    });
    assert!(!should_redirect_unauth(&state));
}

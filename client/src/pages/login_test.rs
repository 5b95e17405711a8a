use super::*;

#[test]
fn validate_login_input_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "hunter22"),
        Ok(("user@example.com".to_owned(), "hunter22".to_owned()))
    );
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " pw "),
        Ok(("a@b.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_addresses_without_at() {
    assert_eq!(validate_login_input("nobody", "pw"), Err("Enter a valid email address."));
}

#[test]
fn expired_notice_only_for_expired_flag() {
    assert!(expired_notice(Some("1")).is_some());
    assert!(expired_notice(Some("true")).is_some());
    assert!(expired_notice(Some("0")).is_none());
    assert!(expired_notice(None).is_none());
}

#[test]
fn oauth_providers_are_github_and_google() {
    let slugs: Vec<_> = OAUTH_PROVIDERS.iter().map(|(slug, _)| *slug).collect();
    assert_eq!(slugs, ["github", "google"]);
}

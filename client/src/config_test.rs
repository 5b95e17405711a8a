use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = ClientConfig::from_lookup(lookup_from(&[]));
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert!(!config.payments_enabled());
}

#[test]
fn reads_all_keys_and_trims_trailing_slash() {
    let config = ClientConfig::from_lookup(lookup_from(&[
        ("API_URL", "https://api.devmarket.io/v1/"),
        ("STRIPE_PUBLIC_KEY", "pk_test_123"),
        ("APP_ENV", "production"),
    ]));
    assert_eq!(config.api_url, "https://api.devmarket.io/v1");
    assert_eq!(config.stripe_public_key.as_deref(), Some("pk_test_123"));
    assert_eq!(config.env, AppEnv::Production);
    assert!(config.payments_enabled());
}

#[test]
fn blank_values_count_as_unset() {
    let config = ClientConfig::from_lookup(lookup_from(&[("API_URL", "  "), ("STRIPE_PUBLIC_KEY", "")]));
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert!(config.stripe_public_key.is_none());
}

#[test]
fn app_env_parse_accepts_aliases() {
    assert_eq!(AppEnv::parse("PROD"), AppEnv::Production);
    assert_eq!(AppEnv::parse("stage"), AppEnv::Staging);
    assert_eq!(AppEnv::parse("weird"), AppEnv::Development);
    assert!(!AppEnv::Staging.is_production());
}

#[test]
fn meta_content_round_trips() {
    let config = ClientConfig::from_lookup(lookup_from(&[("API_URL", "https://api.x"), ("APP_ENV", "staging")]));
    assert_eq!(ClientConfig::from_meta_content(&config.to_meta_content()), config);
}

#[test]
fn malformed_meta_content_falls_back_to_defaults() {
    assert_eq!(ClientConfig::from_meta_content("{not json"), ClientConfig::default());
    assert_eq!(ClientConfig::from_meta_content("{}"), ClientConfig::default());
}

#[test]
fn url_joins_base_and_path() {
    let config = ClientConfig::default();
    assert_eq!(config.url("/requests/"), "http://localhost:8000/api/requests/");
}

#[test]
fn current_reads_process_environment_outside_the_browser() {
    let config = ClientConfig::current();
    assert!(!config.api_url.is_empty());
}

use super::*;
use crate::fixtures::product;

#[test]
fn validate_upload_builds_cents_and_optional_category() {
    let upload = validate_upload(" Icon pack ", " 200 icons ", "$12.5", "  ").expect("valid upload");
    assert_eq!(upload.name, "Icon pack");
    assert_eq!(upload.description, "200 icons");
    assert_eq!(upload.price_cents, 1250);
    assert_eq!(upload.category, None);
}

#[test]
fn validate_upload_requires_a_name() {
    assert_eq!(validate_upload("  ", "", "1", ""), Err("Give your product a name."));
}

#[test]
fn validate_upload_rejects_bad_prices() {
    let message = Err("Enter a price like 12.50 (no more than two decimals).");
    assert_eq!(validate_upload("Kit", "", "-1", ""), message);
    assert_eq!(validate_upload("Kit", "", "1.999", ""), message);
    assert_eq!(validate_upload("Kit", "", "abc", ""), message);
    assert_eq!(validate_upload("Kit", "", "", ""), message);
}

#[test]
fn free_uploads_are_allowed() {
    assert_eq!(validate_upload("Kit", "", "0", "").map(|u| u.price_cents), Ok(0));
}

#[test]
fn normalize_search_drops_blank_terms() {
    assert_eq!(normalize_search("  "), None);
    assert_eq!(normalize_search(" rust web "), Some("rust web".to_owned()));
}

#[test]
fn purchase_needs_payment_key_and_a_price() {
    let mut config = ClientConfig::default();
    assert!(!can_purchase(&product(1, 500), &config));
    config.stripe_public_key = Some("pk_test".to_owned());
    assert!(can_purchase(&product(1, 500), &config));
    assert!(!can_purchase(&product(2, 0), &config));
}

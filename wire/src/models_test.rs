use super::*;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn conversation_json() -> serde_json::Value {
    json!({
        "id": 1,
        "starter_user_id": 3,
        "recipient_user_id": 7,
        "created_at": "2024-05-01T10:00:00",
        "updated_at": "2024-05-01T12:00:00"
    })
}

// =============================================================
// User / Role
// =============================================================

#[test]
fn unknown_role_maps_to_other() {
    let user: User = serde_json::from_value(json!({
        "id": 1, "email": "a@b.com", "role": "moderator"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Other);
}

#[test]
fn role_accepts_user_type_alias() {
    let user: User = serde_json::from_value(json!({
        "id": 1, "email": "a@b.com", "user_type": "developer"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Developer);
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    let user: User = serde_json::from_value(json!({ "id": 1, "email": "sam@example.com", "full_name": "  " })).unwrap();
    assert_eq!(user.display_name(), "sam");
}

#[test]
fn auth_token_defaults_token_type() {
    let token: AuthToken = serde_json::from_value(json!({ "access_token": "abc" })).unwrap();
    assert_eq!(token.token_type, "bearer");
    assert!(token.user.is_none());
}

// =============================================================
// Conversation
// =============================================================

#[test]
fn conversation_list_item_decodes_without_messages() {
    let convo: Conversation = serde_json::from_value(conversation_json()).unwrap();
    assert!(convo.messages.is_empty());
    assert_eq!(convo.status, "active");
    assert!(convo.last_read_at.is_none());
}

#[test]
fn conversation_unseen_when_never_read() {
    let convo: Conversation = serde_json::from_value(conversation_json()).unwrap();
    assert!(convo.has_unseen_activity());
}

#[test]
fn conversation_seen_when_read_after_update() {
    let mut value = conversation_json();
    value["last_read_at"] = json!("2024-05-01T12:30:00");
    let convo: Conversation = serde_json::from_value(value).unwrap();
    assert!(!convo.has_unseen_activity());
}

#[test]
fn conversation_display_title_falls_back_to_id() {
    let convo: Conversation = serde_json::from_value(conversation_json()).unwrap();
    assert_eq!(convo.display_title(), "Conversation #1");
}

#[test]
fn message_kind_defaults_to_text() {
    let msg: ConversationMessage = serde_json::from_value(json!({
        "id": 4, "conversation_id": 1, "user_id": 3, "content": "hi",
        "created_at": "2024-05-01T12:00:00Z"
    }))
    .unwrap();
    assert_eq!(msg.message_type, MessageKind::Text);
}

#[test]
fn attachment_accepts_alternate_field_names() {
    let att: Attachment = serde_json::from_value(json!({ "filename": "brief.pdf", "file_url": "https://x/brief.pdf" })).unwrap();
    assert_eq!(att.file_name, "brief.pdf");
    assert_eq!(att.url, "https://x/brief.pdf");
}

// =============================================================
// SessionStatus
// =============================================================

#[test]
fn session_status_uses_snake_case_on_the_wire() {
    assert_eq!(serde_json::to_string(&SessionStatus::InProgress).unwrap(), "\"in_progress\"");
    let parsed: SessionStatus = serde_json::from_str("\"resolved\"").unwrap();
    assert_eq!(parsed, SessionStatus::Resolved);
}

#[test]
fn session_status_parse_matches_as_str() {
    for status in SessionStatus::ALL {
        assert_eq!(SessionStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(SessionStatus::parse("closed"), None);
}

#[test]
fn only_resolved_is_terminal() {
    assert!(!SessionStatus::Open.is_terminal());
    assert!(!SessionStatus::InProgress.is_terminal());
    assert!(SessionStatus::Resolved.is_terminal());
}

#[test]
fn participant_defaults_current_user_flag() {
    let p: Participant = serde_json::from_value(json!({ "id": 2, "name": "Ops", "role": "support" })).unwrap();
    assert_eq!(p.role, ParticipantRole::Support);
    assert!(!p.is_current_user);
}

// =============================================================
// Product pricing
// =============================================================

fn product_with_price(price: serde_json::Value) -> Result<Product, serde_json::Error> {
    serde_json::from_value(json!({
        "id": 9, "name": "Kit", "price": price, "developer_id": 2,
        "created_at": "2024-05-01T12:00:00Z"
    }))
}

#[test]
fn product_price_from_string_decimal() {
    assert_eq!(product_with_price(json!("12.50")).unwrap().price_cents, 1250);
}

#[test]
fn product_price_from_float() {
    assert_eq!(product_with_price(json!(12.5)).unwrap().price_cents, 1250);
}

#[test]
fn product_price_from_integer() {
    assert_eq!(product_with_price(json!(3)).unwrap().price_cents, 300);
}

#[test]
fn product_price_rejects_garbage() {
    assert!(product_with_price(json!("twelve")).is_err());
}

#[test]
fn product_price_label_and_free_flag() {
    let product = product_with_price(json!("0")).unwrap();
    assert!(product.is_free());
    assert_eq!(product.price_label(), "$0.00");
}

#[test]
fn parse_price_accepts_dollar_sign_and_one_fraction_digit() {
    assert_eq!(parse_price("$4.5"), Some(450));
    assert_eq!(parse_price(" 19 "), Some(1900));
    assert_eq!(parse_price(".99"), Some(99));
}

#[test]
fn parse_price_rejects_negative_and_precise_values() {
    assert_eq!(parse_price("-1"), None);
    assert_eq!(parse_price("1.999"), None);
    assert_eq!(parse_price(""), None);
    assert_eq!(parse_price("1.2.3"), None);
}

#[test]
fn format_price_pads_cents() {
    assert_eq!(format_price(1205), "$12.05");
}

// =============================================================
// DeveloperProfile
// =============================================================

#[test]
fn hourly_rate_accepts_string_numbers() {
    let profile: DeveloperProfile = serde_json::from_value(json!({
        "id": 1, "user_id": 2, "hourly_rate": "45.0", "skills": ["Rust"]
    }))
    .unwrap();
    assert_eq!(profile.hourly_rate, Some(45.0));
    assert!(profile.is_public);
}

#[test]
fn has_skill_is_case_insensitive_and_blank_matches_all() {
    let profile: DeveloperProfile = serde_json::from_value(json!({
        "id": 1, "user_id": 2, "skills": ["Rust", "SQL"]
    }))
    .unwrap();
    assert!(profile.has_skill("rust"));
    assert!(profile.has_skill(" "));
    assert!(!profile.has_skill("go"));
}

use super::*;
use crate::fixtures::{NOW, request};
use wire::RequestShare;

fn form(title: &str, content: &str, project_id: &str) -> RequestForm {
    RequestForm {
        title: title.to_owned(),
        content: content.to_owned(),
        project_id: project_id.to_owned(),
        is_public: true,
    }
}

#[test]
fn valid_form_becomes_draft() {
    assert_eq!(
        validate_request(&form("  Landing page ", "Need a *fast* one", "7")),
        Ok(RequestDraft {
            title: "Landing page".to_owned(),
            content: "Need a *fast* one".to_owned(),
            project_id: Some(7),
            is_public: true,
        })
    );
}

#[test]
fn blank_project_means_none() {
    let draft = validate_request(&form("Title", "Body", "")).unwrap();
    assert_eq!(draft.project_id, None);
}

#[test]
fn missing_title_or_content_is_rejected() {
    assert_eq!(validate_request(&form(" ", "Body", "")), Err("A title is required."));
    assert_eq!(validate_request(&form("Title", "\n", "")), Err("Describe what you need."));
}

#[test]
fn bad_project_id_is_rejected() {
    assert_eq!(validate_request(&form("Title", "Body", "abc")), Err("Pick a valid project."));
}

#[test]
fn form_prefills_from_request() {
    let mut existing = request(4, NOW);
    existing.project_id = Some(12);
    let prefilled = RequestForm::from_request(&existing);
    assert_eq!(prefilled.title, "Request 4");
    assert_eq!(prefilled.project_id, "12");
    assert!(!prefilled.is_public);
    assert!(validate_request(&prefilled).is_ok());
}

#[test]
fn shared_label_lists_recipients() {
    let mut shared = request(1, NOW);
    assert_eq!(shared_label(&shared), None);
    shared.shared_with = vec![
        RequestShare { user_id: 5, can_edit: false },
        RequestShare { user_id: 8, can_edit: true },
    ];
    assert_eq!(shared_label(&shared).as_deref(), Some("Shared with #5, #8 (can edit)"));
}

#[test]
fn contact_message_must_not_be_blank() {
    assert_eq!(validate_contact("  hi there "), Ok("hi there".to_owned()));
    assert!(validate_contact("   ").is_err());
}

use super::*;
use wire::{CollaborationSession, Participant, ParticipantRole, SessionStatus, Timestamp};

const NOON_MAY_FIRST: i64 = 1_714_564_800_000;

fn conversation_message(user_id: Id, kind: MessageKind, content: &str) -> ConversationMessage {
    ConversationMessage {
        id: 1,
        conversation_id: 9,
        user_id,
        content: content.to_owned(),
        message_type: kind,
        created_at: Timestamp(NOON_MAY_FIRST),
        attachments: Vec::new(),
    }
}

fn sync_with_viewer(viewer: Id) -> CollaborationSync {
    let session = CollaborationSession {
        id: 3,
        external_ticket_id: "T-3".to_owned(),
        status: SessionStatus::Open,
        source_system: None,
        title: None,
        created_at: Timestamp(NOON_MAY_FIRST),
        updated_at: Timestamp(NOON_MAY_FIRST),
        last_read_at: None,
        participants: Vec::new(),
    };
    let people = vec![
        Participant {
            id: viewer,
            session_id: Some(3),
            name: "Sam Support".to_owned(),
            email: None,
            role: ParticipantRole::Support,
            is_current_user: true,
        },
        Participant {
            id: viewer + 1,
            session_id: Some(3),
            name: "Casey Customer".to_owned(),
            email: None,
            role: ParticipantRole::Customer,
            is_current_user: false,
        },
    ];
    CollaborationSync::new(session, people, Vec::new())
}

#[test]
fn conversation_rows_mark_own_messages() {
    let mine = MessageView::from_conversation(&conversation_message(7, MessageKind::Text, "hi"), Some(7));
    assert!(mine.own);
    assert_eq!(mine.author, "You");
    assert_eq!(mine.sent_label, "2024-05-01 12:00");

    let theirs = MessageView::from_conversation(&conversation_message(8, MessageKind::Text, "yo"), Some(7));
    assert!(!theirs.own);
    assert_eq!(theirs.author, "Them");
}

#[test]
fn collaboration_rows_resolve_sender_names() {
    let sync = sync_with_viewer(1);
    let message = CollaborationMessage {
        id: 5,
        session_id: 3,
        participant_id: Some(2),
        sender_name: None,
        content: "still broken".to_owned(),
        message_type: MessageKind::Text,
        created_at: Timestamp(NOON_MAY_FIRST),
        attachments: Vec::new(),
    };
    let row = MessageView::from_collaboration(&message, &sync);
    assert_eq!(row.author, "Casey Customer");
    assert!(!row.own);
}

#[test]
fn link_target_requires_link_kind_and_http_scheme() {
    let link = MessageView::from_conversation(&conversation_message(1, MessageKind::Link, " https://x.io/a "), None);
    assert_eq!(link.link_target(), Some("https://x.io/a"));

    let script = MessageView::from_conversation(&conversation_message(1, MessageKind::Link, "javascript:alert(1)"), None);
    assert_eq!(script.link_target(), None);

    let text = MessageView::from_conversation(&conversation_message(1, MessageKind::Text, "https://x.io"), None);
    assert_eq!(text.link_target(), None);
}

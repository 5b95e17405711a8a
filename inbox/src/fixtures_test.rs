//! Shared builders for unit tests.

use wire::{
    CollaborationMessage, CollaborationSession, Conversation, Id, MessageKind, Participant, ParticipantRole,
    SessionStatus, Timestamp,
};

pub const NOW: i64 = 1_714_564_800_000;
pub const MINUTE: i64 = 60_000;
pub const HOUR: i64 = 60 * MINUTE;

pub fn conversation(id: Id, recipient: Id, updated_at: i64, last_read_at: Option<i64>) -> Conversation {
    Conversation {
        id,
        request_id: None,
        starter_user_id: recipient + 100,
        recipient_user_id: recipient,
        title: None,
        status: "active".to_owned(),
        created_at: Timestamp(updated_at - HOUR),
        updated_at: Timestamp(updated_at),
        last_read_at: last_read_at.map(Timestamp),
        messages: Vec::new(),
    }
}

pub fn session(status: SessionStatus) -> CollaborationSession {
    CollaborationSession {
        id: 10,
        external_ticket_id: "ZD-1001".to_owned(),
        status,
        source_system: Some("zendesk".to_owned()),
        title: Some("Checkout broken".to_owned()),
        created_at: Timestamp(NOW - HOUR),
        updated_at: Timestamp(NOW),
        last_read_at: None,
        participants: Vec::new(),
    }
}

pub fn participant(id: Id, role: ParticipantRole, is_current_user: bool) -> Participant {
    Participant {
        id,
        session_id: Some(10),
        name: format!("p{id}"),
        email: None,
        role,
        is_current_user,
    }
}

pub fn collab_message(id: Id) -> CollaborationMessage {
    CollaborationMessage {
        id,
        session_id: 10,
        participant_id: Some(1),
        sender_name: None,
        content: format!("message {id}"),
        message_type: MessageKind::Text,
        created_at: Timestamp(NOW + id),
        attachments: Vec::new(),
    }
}

use super::*;
use crate::fixtures::{collab_message, participant, session};

fn sync_as(role: ParticipantRole, status: SessionStatus) -> CollaborationSync {
    CollaborationSync::new(
        session(status),
        vec![participant(1, role, true), participant(2, ParticipantRole::Customer, false)],
        Vec::new(),
    )
}

// =============================================================
// cursor / polling
// =============================================================

#[test]
fn cursor_defaults_to_zero() {
    let sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    assert_eq!(sync.cursor(), 0);
}

#[test]
fn cursor_is_max_held_id() {
    let mut sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    sync.apply_poll(vec![collab_message(3), collab_message(8), collab_message(5)]);
    assert_eq!(sync.cursor(), 8);
}

#[test]
fn poll_never_duplicates_held_messages() {
    let mut sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    sync.apply_poll(vec![collab_message(1), collab_message(2)]);
    let added = sync.apply_poll(vec![collab_message(2), collab_message(3)]);
    assert_eq!(added, 1);
    let ids = sync.messages().iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn sent_message_echo_is_appended_once() {
    let mut sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    sync.apply_sent(collab_message(4));
    sync.apply_poll(vec![collab_message(4)]);
    assert_eq!(sync.messages().len(), 1);
    assert_eq!(sync.cursor(), 4);
}

#[test]
fn initial_messages_are_sorted() {
    let sync = CollaborationSync::new(
        session(SessionStatus::Open),
        Vec::new(),
        vec![collab_message(2), collab_message(1)],
    );
    assert_eq!(sync.messages()[0].id, 1);
}

#[test]
fn polling_stops_once_resolved() {
    let mut sync = sync_as(ParticipantRole::Support, SessionStatus::InProgress);
    assert!(sync.should_poll());
    sync.apply_status(SessionStatus::Resolved);
    assert!(!sync.should_poll());
}

#[test]
fn poll_failures_degrade_then_recover() {
    let mut sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    sync.record_poll_failure();
    sync.record_poll_failure();
    assert!(!sync.connection_degraded());
    sync.record_poll_failure();
    assert!(sync.connection_degraded());
    sync.apply_poll(Vec::new());
    assert_eq!(sync.consecutive_failures(), 0);
}

#[test]
fn tick_keeps_messages_when_session_refetch_fails() {
    let mut sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    let errors = sync.apply_tick(Ok(vec![collab_message(6)]), Err("session down"));
    assert_eq!(errors, vec!["session down"]);
    assert_eq!(sync.cursor(), 6);
    assert_eq!(sync.consecutive_failures(), 1);
}

#[test]
fn tick_keeps_session_when_message_fetch_fails() {
    let mut sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    let errors = sync.apply_tick(Err("messages down"), Ok(session(SessionStatus::Resolved)));
    assert_eq!(errors.len(), 1);
    assert_eq!(sync.status(), SessionStatus::Resolved);
    assert!(!sync.should_poll());
    assert_eq!(sync.cursor(), 0);
}

#[test]
fn tick_counts_one_failure_per_tick_and_resets_on_full_success() {
    let mut sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    sync.apply_tick::<&str>(Err("a"), Err("b"));
    assert_eq!(sync.consecutive_failures(), 1);
    sync.apply_tick::<&str>(Err("a"), Ok(session(SessionStatus::Open)));
    sync.apply_tick::<&str>(Ok(Vec::new()), Err("b"));
    assert!(sync.connection_degraded());
    let errors = sync.apply_tick::<&str>(Ok(vec![collab_message(1)]), Ok(session(SessionStatus::Open)));
    assert!(errors.is_empty());
    assert_eq!(sync.consecutive_failures(), 0);
}

// =============================================================
// participants
// =============================================================

#[test]
fn current_participant_uses_server_flag() {
    let sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    assert_eq!(sync.current_participant().map(|p| p.id), Some(1));
}

#[test]
fn participants_fall_back_to_session_embedded_list() {
    let mut s = session(SessionStatus::Open);
    s.participants = vec![participant(4, ParticipantRole::Support, true)];
    let sync = CollaborationSync::new(s, Vec::new(), Vec::new());
    assert_eq!(sync.current_participant().map(|p| p.id), Some(4));
}

#[test]
fn sender_name_prefers_message_then_participant() {
    let sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    let mut msg = collab_message(1);
    msg.participant_id = Some(2);
    assert_eq!(sync.sender_name(&msg), "p2");
    msg.sender_name = Some("Dana".to_owned());
    assert_eq!(sync.sender_name(&msg), "Dana");
    msg.sender_name = None;
    msg.participant_id = Some(77);
    assert_eq!(sync.sender_name(&msg), "Unknown");
}

#[test]
fn is_own_matches_current_participant() {
    let sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    let mut msg = collab_message(1);
    msg.participant_id = Some(1);
    assert!(sync.is_own(&msg));
    msg.participant_id = Some(2);
    assert!(!sync.is_own(&msg));
}

// =============================================================
// status control
// =============================================================

#[test]
fn support_can_move_forward() {
    let sync = sync_as(ParticipantRole::Support, SessionStatus::Open);
    assert!(sync.can_manage_status());
    assert_eq!(
        sync.request_status_change(SessionStatus::InProgress),
        Ok(StatusChange {
            status: SessionStatus::InProgress
        })
    );
}

#[test]
fn customer_cannot_change_status() {
    let sync = sync_as(ParticipantRole::Customer, SessionStatus::Open);
    assert!(!sync.can_manage_status());
    assert_eq!(
        sync.request_status_change(SessionStatus::Resolved),
        Err(StatusChangeError::NotPermitted)
    );
}

#[test]
fn resolved_session_rejects_every_change() {
    let sync = sync_as(ParticipantRole::Support, SessionStatus::Resolved);
    assert!(!sync.can_manage_status());
    for next in SessionStatus::ALL {
        assert_eq!(sync.request_status_change(next), Err(StatusChangeError::Resolved));
    }
}

#[test]
fn unchanged_status_is_rejected() {
    let sync = sync_as(ParticipantRole::Support, SessionStatus::InProgress);
    assert_eq!(
        sync.request_status_change(SessionStatus::InProgress),
        Err(StatusChangeError::Unchanged(SessionStatus::InProgress))
    );
    assert_eq!(
        StatusChangeError::Unchanged(SessionStatus::InProgress).to_string(),
        "the session is already In progress"
    );
}

#[test]
fn apply_session_replaces_status_and_participants() {
    let mut sync = sync_as(ParticipantRole::Support, SessionStatus::Open);
    let mut updated = session(SessionStatus::Resolved);
    updated.participants = vec![participant(9, ParticipantRole::Support, true)];
    sync.apply_session(updated);
    assert_eq!(sync.status(), SessionStatus::Resolved);
    assert_eq!(sync.participants().len(), 1);
    assert!(!sync.should_poll());
}

#[test]
fn apply_session_without_participants_keeps_existing() {
    let mut sync = sync_as(ParticipantRole::Support, SessionStatus::Open);
    sync.apply_session(session(SessionStatus::InProgress));
    assert_eq!(sync.participants().len(), 2);
}

// =============================================================
// outgoing messages
// =============================================================

#[test]
fn prepare_message_trims_and_rejects_blank() {
    assert_eq!(CollaborationSync::prepare_message("  hi  "), Ok("hi".to_owned()));
    assert_eq!(CollaborationSync::prepare_message(" \n "), Err(SendError::Empty));
}

use super::*;
use crate::fixtures::{HOUR, MINUTE, NOW, conversation};

fn tracker_with(list: Vec<Conversation>) -> NotificationTracker {
    let mut tracker = NotificationTracker::new(7);
    tracker.apply_refresh(list, NOW);
    tracker
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_derives_unread_set() {
    let tracker = tracker_with(vec![conversation(1, 7, NOW, None)]);
    assert_eq!(tracker.unread().iter().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(tracker.badge_count(), 1);
}

#[test]
fn refresh_sorts_most_recent_first() {
    let tracker = tracker_with(vec![
        conversation(1, 7, NOW - HOUR, None),
        conversation(2, 7, NOW, None),
    ]);
    let ids = tracker.conversations().iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn failure_keeps_previous_state() {
    let mut tracker = tracker_with(vec![conversation(1, 7, NOW, None)]);
    tracker.record_failure("network error: offline");
    assert_eq!(tracker.badge_count(), 1);
    assert_eq!(tracker.conversations().len(), 1);
    assert_eq!(tracker.last_error(), Some("network error: offline"));
}

#[test]
fn successful_refresh_clears_error() {
    let mut tracker = tracker_with(Vec::new());
    tracker.record_failure("boom");
    tracker.apply_refresh(Vec::new(), NOW);
    assert!(tracker.last_error().is_none());
}

#[test]
fn recompute_ages_out_old_activity() {
    let mut tracker = tracker_with(vec![conversation(1, 7, NOW, None)]);
    tracker.recompute(NOW + 25 * HOUR);
    assert_eq!(tracker.badge_count(), 0);
}

#[test]
fn tracker_without_user_has_no_unread() {
    let mut tracker = NotificationTracker::default();
    tracker.apply_refresh(vec![conversation(1, 7, NOW, None)], NOW);
    assert_eq!(tracker.badge_count(), 0);
}

#[test]
fn switching_user_clears_held_data() {
    let mut tracker = tracker_with(vec![conversation(1, 7, NOW, None)]);
    tracker.set_user(Some(7));
    assert_eq!(tracker.conversations().len(), 1);
    tracker.set_user(Some(8));
    assert!(tracker.conversations().is_empty());
    assert_eq!(tracker.user_id(), Some(8));
}

// =============================================================
// mark_as_read
// =============================================================

#[test]
fn mark_as_read_scenario_from_single_conversation() {
    let mut tracker = tracker_with(vec![conversation(1, 7, NOW, None)]);
    assert_eq!(tracker.mark_as_read(1, NOW), MarkRead::Marked);
    assert!(tracker.unread().is_empty());
}

#[test]
fn mark_as_read_is_idempotent() {
    let mut tracker = tracker_with(vec![
        conversation(1, 7, NOW, None),
        conversation(2, 7, NOW - MINUTE, None),
    ]);
    tracker.mark_as_read(1, NOW);
    let after_first = tracker.unread().clone();
    assert_eq!(tracker.mark_as_read(1, NOW + 10), MarkRead::AlreadyRead);
    assert_eq!(tracker.unread(), &after_first);
    assert!(tracker.is_unread(2));
}

#[test]
fn mark_as_read_survives_recompute() {
    let mut tracker = tracker_with(vec![conversation(1, 7, NOW, None)]);
    tracker.mark_as_read(1, NOW);
    tracker.recompute(NOW + MINUTE);
    assert!(!tracker.is_unread(1));
}

#[test]
fn mark_as_read_marker_never_precedes_update() {
    let mut tracker = tracker_with(vec![conversation(1, 7, NOW + MINUTE, None)]);
    tracker.mark_as_read(1, NOW);
    tracker.recompute(NOW);
    assert!(!tracker.is_unread(1));
}

#[test]
fn mark_unknown_conversation() {
    let mut tracker = tracker_with(Vec::new());
    assert_eq!(tracker.mark_as_read(99, NOW), MarkRead::Unknown);
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_needs_two_clicks_within_window() {
    let mut tracker = tracker_with(vec![conversation(1, 7, NOW, None)]);
    assert_eq!(tracker.delete_click(1, NOW), ConfirmOutcome::Armed);
    assert_eq!(tracker.conversations().len(), 1);
    assert!(tracker.delete_armed(1, NOW + 1_000));
    assert_eq!(tracker.delete_click(1, NOW + 1_000), ConfirmOutcome::Confirmed);
    assert!(tracker.conversations().is_empty());
    assert_eq!(tracker.badge_count(), 0);
}

#[test]
fn delete_click_after_pause_does_not_delete() {
    let mut tracker = tracker_with(vec![conversation(1, 7, NOW, None)]);
    tracker.delete_click(1, NOW);
    assert!(tracker.expire_delete(NOW + 3_500));
    assert!(!tracker.delete_armed(1, NOW + 3_500));
    assert_eq!(tracker.delete_click(1, NOW + 3_600), ConfirmOutcome::Armed);
    assert_eq!(tracker.conversations().len(), 1);
}

#[test]
fn new_conversations_lists_only_unread() {
    let tracker = tracker_with(vec![
        conversation(1, 7, NOW, None),
        conversation(2, 7, NOW - 2 * MINUTE, Some(NOW - MINUTE)),
    ]);
    let ids = tracker.new_conversations().iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1]);
}

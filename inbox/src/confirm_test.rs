use super::*;

const T0: i64 = 1_000_000;

#[test]
fn first_click_arms() {
    let mut confirm = DeleteConfirm::<i64>::default();
    assert_eq!(confirm.click(&1, T0), ConfirmOutcome::Armed);
    assert!(confirm.is_armed(&1, T0));
}

#[test]
fn second_click_inside_window_confirms() {
    let mut confirm = DeleteConfirm::<i64>::default();
    confirm.click(&1, T0);
    assert_eq!(confirm.click(&1, T0 + 2_999), ConfirmOutcome::Confirmed);
    assert!(confirm.armed(T0 + 2_999).is_none());
}

#[test]
fn click_after_window_rearms_instead_of_deleting() {
    let mut confirm = DeleteConfirm::<i64>::default();
    confirm.click(&1, T0);
    assert!(!confirm.is_armed(&1, T0 + 3_001));
    assert_eq!(confirm.click(&1, T0 + 3_001), ConfirmOutcome::Armed);
    assert_eq!(confirm.click(&1, T0 + 4_000), ConfirmOutcome::Confirmed);
}

#[test]
fn lapsed_arming_resets_on_expire() {
    let mut confirm = DeleteConfirm::<i64>::default();
    confirm.click(&1, T0);
    assert!(!confirm.expire(T0 + 1_000));
    assert!(confirm.expire(T0 + 3_500));
    assert!(confirm.armed(T0 + 3_500).is_none());
}

#[test]
fn clicking_another_item_moves_the_arming() {
    let mut confirm = DeleteConfirm::<i64>::default();
    confirm.click(&1, T0);
    assert_eq!(confirm.click(&2, T0 + 100), ConfirmOutcome::Armed);
    assert!(!confirm.is_armed(&1, T0 + 200));
    assert_eq!(confirm.click(&1, T0 + 300), ConfirmOutcome::Armed);
}

#[test]
fn exactly_two_clicks_are_needed() {
    let mut confirm = DeleteConfirm::<i64>::default();
    let outcomes = [confirm.click(&5, T0), confirm.click(&5, T0 + 10), confirm.click(&5, T0 + 20)];
    assert_eq!(
        outcomes,
        [ConfirmOutcome::Armed, ConfirmOutcome::Confirmed, ConfirmOutcome::Armed]
    );
}

#[test]
fn reset_disarms() {
    let mut confirm = DeleteConfirm::<String>::new(500);
    confirm.click(&"a".to_owned(), T0);
    confirm.reset();
    assert_eq!(confirm.armed(T0), None);
    assert_eq!(confirm.window_ms(), 500);
}

#[test]
fn window_closes_exactly_at_its_length() {
    let mut confirm = DeleteConfirm::<i64>::default();
    confirm.click(&1, T0);
    assert!(confirm.is_armed(&1, T0 + CONFIRM_WINDOW_MS - 1));
    assert!(!confirm.is_armed(&1, T0 + CONFIRM_WINDOW_MS));
    assert!(confirm.armed(T0 + CONFIRM_WINDOW_MS).is_none());
    assert_eq!(confirm.click(&1, T0 + CONFIRM_WINDOW_MS), ConfirmOutcome::Armed);
}

#[test]
fn expire_drops_arming_at_window_boundary() {
    let mut confirm = DeleteConfirm::<i64>::default();
    confirm.click(&1, T0);
    assert!(!confirm.expire(T0 + CONFIRM_WINDOW_MS - 1));
    assert!(confirm.expire(T0 + CONFIRM_WINDOW_MS));
}

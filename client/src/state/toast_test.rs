use super::*;

#[test]
fn push_appends_newest_last() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "first", 0);
    state.push(ToastKind::Success, "second", 10);
    let messages: Vec<_> = state.toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn push_caps_visible_toasts_dropping_oldest() {
    let mut state = ToastState::default();
    for i in 0..7 {
        state.push(ToastKind::Info, format!("t{i}"), i);
    }
    assert_eq!(state.toasts.len(), MAX_VISIBLE);
    assert_eq!(state.toasts[0].message, "t2");
    assert_eq!(state.toasts[MAX_VISIBLE - 1].message, "t6");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Error, "a", 0);
    state.push(ToastKind::Error, "b", 0);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "b");
}

#[test]
fn expire_drops_toasts_after_ttl() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "old", 0);
    state.push(ToastKind::Info, "fresh", 3_000);
    assert_eq!(state.expire(TOAST_TTL_MS - 1), 0);
    assert_eq!(state.expire(TOAST_TTL_MS), 1);
    assert_eq!(state.toasts[0].message, "fresh");
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
    assert!(ToastKind::Info.css_class().starts_with("toast "));
}

use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationState::default();
    let a = state.push(ToastKind::Success, "Login successful!");
    let b = state.push(ToastKind::Error, "Invalid credentials");
    assert!(b > a);
    assert_eq!(state.latest().map(|t| t.message.as_str()), Some("Invalid credentials"));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = NotificationState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Error, "two");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn queue_is_capped_dropping_oldest() {
    let mut state = NotificationState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Success, format!("toast {i}"));
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].message, "toast 2");
}

#[test]
fn kinds_map_to_distinct_css_modifiers() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
}

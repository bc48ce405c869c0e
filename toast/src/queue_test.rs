use super::*;

// =============================================================
// Single (replace) policy
// =============================================================

#[test]
fn single_policy_starts_empty() {
    let queue = ToastQueue::new(Stacking::Single);
    assert!(queue.is_empty());
}

#[test]
fn single_policy_holds_one_toast() {
    let mut queue = ToastQueue::new(Stacking::Single);
    queue.push("saved", ToastKind::Success);
    assert_eq!(queue.len(), 1);
}

#[test]
fn single_policy_replaces_existing_toast() {
    let mut queue = ToastQueue::new(Stacking::Single);
    queue.push("first", ToastKind::Info);
    queue.push("second", ToastKind::Error);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.toasts()[0].message, "second");
    assert_eq!(queue.toasts()[0].kind, ToastKind::Error);
}

#[test]
fn stale_dismiss_does_not_remove_replacement() {
    let mut queue = ToastQueue::new(Stacking::Single);
    let first = queue.push("first", ToastKind::Info);
    queue.push("second", ToastKind::Info);
    // The replaced toast's auto-dismiss fires late.
    queue.dismiss(first);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.toasts()[0].message, "second");
}

// =============================================================
// Stacked policy
// =============================================================

#[test]
fn stacked_policy_accumulates_in_order() {
    let mut queue = ToastQueue::new(Stacking::Stacked);
    queue.push("one", ToastKind::Info);
    queue.push("two", ToastKind::Success);
    queue.push("three", ToastKind::Error);
    let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["one", "two", "three"]);
}

#[test]
fn stacked_dismiss_removes_only_the_target() {
    let mut queue = ToastQueue::new(Stacking::Stacked);
    let _one = queue.push("one", ToastKind::Info);
    let two = queue.push("two", ToastKind::Info);
    let _three = queue.push("three", ToastKind::Info);
    queue.dismiss(two);
    let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["one", "three"]);
}

// =============================================================
// Dismissal edge cases
// =============================================================

#[test]
fn dismissing_unknown_id_is_a_no_op() {
    let mut queue = ToastQueue::new(Stacking::Stacked);
    queue.push("one", ToastKind::Info);
    queue.dismiss(Uuid::new_v4());
    assert_eq!(queue.len(), 1);
}

#[test]
fn push_returns_distinct_ids() {
    let mut queue = ToastQueue::new(Stacking::Stacked);
    let a = queue.push("a", ToastKind::Info);
    let b = queue.push("b", ToastKind::Info);
    assert_ne!(a, b);
}

#[test]
fn kind_css_modifiers() {
    assert_eq!(ToastKind::Info.as_str(), "info");
    assert_eq!(ToastKind::Success.as_str(), "success");
    assert_eq!(ToastKind::Error.as_str(), "error");
}

#![allow(clippy::float_cmp)]

use super::*;

fn three_tasks() -> TasksState {
    TasksState {
        tasks: vec![
            Task { id: 0, label: "Write report".to_owned(), done: false },
            Task { id: 1, label: "Review budget".to_owned(), done: false },
            Task { id: 2, label: "Email review panel".to_owned(), done: false },
        ],
        filter: String::new(),
    }
}

// =============================================================
// Toggling and progress
// =============================================================

#[test]
fn default_checklist_is_nonempty() {
    let tasks = TasksState::with_defaults();
    assert!(!tasks.tasks.is_empty());
    assert!(tasks.done_count() > 0);
}

#[test]
fn toggle_flips_one_task() {
    let mut tasks = three_tasks();
    tasks.toggle(1);
    assert!(tasks.is_done(1));
    assert!(!tasks.is_done(0));
    tasks.toggle(1);
    assert!(!tasks.is_done(1));
}

#[test]
fn toggle_unknown_id_is_a_no_op() {
    let mut tasks = three_tasks();
    tasks.toggle(99);
    assert_eq!(tasks.done_count(), 0);
}

#[test]
fn progress_is_the_checked_ratio() {
    let mut tasks = three_tasks();
    assert_eq!(tasks.progress_percent(), 0.0);
    tasks.toggle(0);
    assert!((tasks.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
    tasks.toggle(1);
    tasks.toggle(2);
    assert_eq!(tasks.progress_percent(), 100.0);
}

#[test]
fn empty_list_has_zero_progress() {
    assert_eq!(TasksState::default().progress_percent(), 0.0);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn empty_query_matches_everything() {
    let tasks = three_tasks();
    for t in &tasks.tasks {
        assert!(tasks.is_visible(t.id));
    }
}

#[test]
fn query_matching_is_case_insensitive() {
    assert!(matches("REVIEW", "Review budget"));
    assert!(matches("review", "Email REVIEW panel"));
}

#[test]
fn filter_hides_non_matching_tasks() {
    let mut tasks = three_tasks();
    tasks.set_filter("review");
    assert!(!tasks.is_visible(0));
    assert!(tasks.is_visible(1));
    assert!(tasks.is_visible(2));
}

#[test]
fn query_matching_nothing_hides_all() {
    let mut tasks = three_tasks();
    tasks.set_filter("zebra");
    assert!(tasks.tasks.iter().all(|t| !tasks.is_visible(t.id)));
}

#[test]
fn clearing_the_query_shows_all_again() {
    let mut tasks = three_tasks();
    tasks.set_filter("zebra");
    tasks.set_filter("");
    assert!(tasks.tasks.iter().all(|t| tasks.is_visible(t.id)));
}

#[test]
fn whitespace_query_counts_as_empty() {
    assert!(matches("   ", "anything"));
}

#![allow(clippy::float_cmp)]

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Widget {
    Clock,
    Weather,
    Price,
}

// =============================================================
// Registration
// =============================================================

#[test]
fn new_scheduler_is_empty() {
    let scheduler: Scheduler<Widget> = Scheduler::new();
    assert!(scheduler.is_empty());
    assert_eq!(scheduler.len(), 0);
}

#[test]
fn insert_registers_with_first_due_after_one_period() {
    let mut scheduler = Scheduler::new();
    scheduler.insert(Widget::Clock, 1000.0, 0.0);
    assert_eq!(scheduler.len(), 1);
    assert_eq!(scheduler.next_due(Widget::Clock), Some(1000.0));
    assert_eq!(scheduler.next_due(Widget::Weather), None);
}

// =============================================================
// Firing
// =============================================================

#[test]
fn nothing_fires_before_first_period() {
    let mut scheduler = Scheduler::new();
    scheduler.insert(Widget::Clock, 1000.0, 0.0);
    assert!(scheduler.due(999.0).is_empty());
}

#[test]
fn entry_fires_at_its_period() {
    let mut scheduler = Scheduler::new();
    scheduler.insert(Widget::Clock, 1000.0, 0.0);
    assert_eq!(scheduler.due(1000.0), vec![Widget::Clock]);
}

#[test]
fn fired_entry_reschedules_one_period_out() {
    let mut scheduler = Scheduler::new();
    scheduler.insert(Widget::Clock, 1000.0, 0.0);
    let _ = scheduler.due(1000.0);
    assert_eq!(scheduler.next_due(Widget::Clock), Some(2000.0));
    assert!(scheduler.due(1999.0).is_empty());
    assert_eq!(scheduler.due(2000.0), vec![Widget::Clock]);
}

#[test]
fn entries_fire_independently_at_their_own_cadence() {
    let mut scheduler = Scheduler::new();
    scheduler.insert(Widget::Clock, 1000.0, 0.0);
    scheduler.insert(Widget::Weather, 5000.0, 0.0);
    scheduler.insert(Widget::Price, 4000.0, 0.0);

    assert_eq!(scheduler.due(1000.0), vec![Widget::Clock]);
    assert_eq!(scheduler.due(2000.0), vec![Widget::Clock]);
    assert_eq!(scheduler.due(4000.0), vec![Widget::Clock, Widget::Price]);
    assert_eq!(scheduler.due(5000.0), vec![Widget::Clock, Widget::Weather]);
}

#[test]
fn due_returns_registration_order() {
    let mut scheduler = Scheduler::new();
    scheduler.insert(Widget::Weather, 100.0, 0.0);
    scheduler.insert(Widget::Clock, 100.0, 0.0);
    assert_eq!(scheduler.due(100.0), vec![Widget::Weather, Widget::Clock]);
}

// =============================================================
// Throttled host (virtual clock jumps)
// =============================================================

#[test]
fn long_gap_produces_a_single_tick_not_a_burst() {
    let mut scheduler = Scheduler::new();
    scheduler.insert(Widget::Clock, 1000.0, 0.0);

    // Host was asleep for a minute: one tick, then back on cadence.
    assert_eq!(scheduler.due(60_000.0), vec![Widget::Clock]);
    assert!(scheduler.due(60_500.0).is_empty());
    assert_eq!(scheduler.next_due(Widget::Clock), Some(61_000.0));
}

#[test]
fn default_is_empty() {
    let scheduler: Scheduler<u8> = Scheduler::default();
    assert!(scheduler.is_empty());
}

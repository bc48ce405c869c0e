#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::NaiveDateTime;

/// Update cadence of the clock widget.
pub const PERIOD_MS: f64 = 1_000.0;

/// Formatted clock strings for one instant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockState {
    pub time: String,
    pub date: String,
}

/// Format `now` for display. The runtime feeds local wall time; tests feed
/// fixed instants.
#[must_use]
pub fn render(now: NaiveDateTime) -> ClockState {
    ClockState {
        time: now.format("%H:%M:%S").to_string(),
        date: now.format("%A, %B %-d, %Y").to_string(),
    }
}

#[cfg(test)]
#[path = "sentiment_test.rs"]
mod sentiment_test;

use rand::Rng;
use simkit::walk::BoundedWalk;

/// Update cadence of the sentiment gauge.
pub const PERIOD_MS: f64 = 3_000.0;

pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 100.0;

const GAUGE_START: f64 = 58.0;
const GAUGE_STEP: f64 = 7.0;

/// Simulated sentiment gauge on a 0–100 scale.
#[derive(Clone, Copy, Debug)]
pub struct SentimentState {
    gauge: BoundedWalk,
}

impl Default for SentimentState {
    fn default() -> Self {
        Self { gauge: BoundedWalk::new(GAUGE_START, GAUGE_MIN, GAUGE_MAX, GAUGE_STEP) }
    }
}

impl SentimentState {
    /// One simulation tick. Returns the new gauge value.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.gauge.step(rng)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.gauge.value()
    }
}

/// Bucket a gauge value into its display label.
#[must_use]
pub fn label(value: f64) -> &'static str {
    if value < 35.0 {
        "Negative"
    } else if value < 65.0 {
        "Neutral"
    } else {
        "Positive"
    }
}

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

use rand::Rng;
use simkit::history::History;
use simkit::walk::BoundedWalk;

/// Update cadence of the price widget.
pub const PERIOD_MS: f64 = 4_000.0;

/// Samples kept for the sparkline.
pub const HISTORY_CAP: usize = 60;

const PRICE_START: f64 = 67_400.0;
const PRICE_MIN: f64 = 48_000.0;
const PRICE_MAX: f64 = 92_000.0;

/// Per-tick move as a fraction of the current price.
const STEP_FRACTION: f64 = 0.012;

/// Simulated asset price: a bounds-proportional random walk plus a capped
/// FIFO history for the sparkline.
#[derive(Clone, Debug)]
pub struct PriceState {
    walk: BoundedWalk,
    history: History,
    previous: f64,
}

impl Default for PriceState {
    fn default() -> Self {
        let walk = BoundedWalk::new(PRICE_START, PRICE_MIN, PRICE_MAX, 0.0);
        let mut history = History::new(HISTORY_CAP);
        history.push(walk.value());
        Self { walk, history, previous: walk.value() }
    }
}

impl PriceState {
    /// One simulation tick. Returns the new price.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.previous = self.walk.value();
        let price = self.walk.step_proportional(rng, STEP_FRACTION);
        self.history.push(price);
        price
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.walk.value()
    }

    /// Change vs. the previous sample, in percent.
    #[must_use]
    pub fn percent_change(&self) -> f64 {
        if self.previous == 0.0 {
            0.0
        } else {
            (self.price() - self.previous) / self.previous * 100.0
        }
    }

    /// Oldest-first history copy for the sparkline.
    #[must_use]
    pub fn history(&self) -> Vec<f64> {
        self.history.snapshot()
    }
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod walk_test;

use rand::Rng;

/// One random-walk step: `clamp(current + delta, min, max)`.
#[must_use]
pub fn step_clamped(current: f64, delta: f64, min: f64, max: f64) -> f64 {
    (current + delta).clamp(min, max)
}

/// A scalar random walk confined to `[min, max]`.
///
/// Deltas are drawn uniformly from `[-max_step, max_step]`. All randomness
/// goes through the injected [`Rng`], so a seeded generator yields a fully
/// deterministic walk.
#[derive(Debug, Clone, Copy)]
pub struct BoundedWalk {
    value: f64,
    min: f64,
    max: f64,
    max_step: f64,
}

impl BoundedWalk {
    /// Start a walk at `value`, clamped into `[min, max]`.
    #[must_use]
    pub fn new(value: f64, min: f64, max: f64, max_step: f64) -> Self {
        Self { value: value.clamp(min, max), min, max, max_step }
    }

    /// Advance one tick with a fixed uniform delta range.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let delta = rng.random_range(-self.max_step..=self.max_step);
        self.value = step_clamped(self.value, delta, self.min, self.max);
        self.value
    }

    /// Advance one tick with a delta range proportional to the current value.
    ///
    /// Used by the price walk, where a plausible move scales with the price
    /// itself rather than with the bounds.
    pub fn step_proportional<R: Rng + ?Sized>(&mut self, rng: &mut R, fraction: f64) -> f64 {
        let span = self.value.abs() * fraction;
        let delta = rng.random_range(-span..=span);
        self.value = step_clamped(self.value, delta, self.min, self.max);
        self.value
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
}

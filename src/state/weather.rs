#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use rand::Rng;
use simkit::walk::BoundedWalk;

/// Update cadence of the weather widget.
pub const PERIOD_MS: f64 = 5_000.0;

/// Condition catalog: label and icon glyph.
pub const CONDITIONS: [(&str, &str); 5] = [
    ("Sunny", "\u{2600}"),
    ("Partly Cloudy", "\u{26c5}"),
    ("Cloudy", "\u{2601}"),
    ("Rain", "\u{1f327}"),
    ("Thunderstorm", "\u{26c8}"),
];

/// City catalog the widget rotates through.
pub const CITIES: [&str; 4] = ["San Francisco", "Oslo", "Nairobi", "Kyoto"];

const TEMP_START: f64 = 21.0;
const TEMP_MIN: f64 = 8.0;
const TEMP_MAX: f64 = 35.0;
const TEMP_STEP: f64 = 1.5;

/// Probability per tick that the condition changes.
const CONDITION_CHANGE: f64 = 0.25;
/// Probability per tick that the reported city changes.
const CITY_CHANGE: f64 = 0.05;

/// Simulated weather: a bounded temperature walk plus indices into the
/// condition and city catalogs.
#[derive(Clone, Copy, Debug)]
pub struct WeatherState {
    temp: BoundedWalk,
    pub condition: usize,
    pub city: usize,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self {
            temp: BoundedWalk::new(TEMP_START, TEMP_MIN, TEMP_MAX, TEMP_STEP),
            condition: 0,
            city: 0,
        }
    }
}

impl WeatherState {
    /// One simulation tick: walk the temperature, occasionally pick a new
    /// condition, rarely a new city.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.temp.step(rng);
        if rng.random_bool(CONDITION_CHANGE) {
            self.condition = rng.random_range(0..CONDITIONS.len());
        }
        if rng.random_bool(CITY_CHANGE) {
            self.city = rng.random_range(0..CITIES.len());
        }
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temp.value()
    }

    #[must_use]
    pub fn condition_label(&self) -> &'static str {
        CONDITIONS[self.condition % CONDITIONS.len()].0
    }

    #[must_use]
    pub fn condition_icon(&self) -> &'static str {
        CONDITIONS[self.condition % CONDITIONS.len()].1
    }

    #[must_use]
    pub fn city_name(&self) -> &'static str {
        CITIES[self.city % CITIES.len()]
    }
}

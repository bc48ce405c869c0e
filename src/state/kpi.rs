#[cfg(test)]
#[path = "kpi_test.rs"]
mod kpi_test;

use rand::Rng;
use serde::Deserialize;
use simkit::walk::BoundedWalk;

/// Each KPI ticks at its own period drawn uniformly from this range.
pub const PERIOD_RANGE_MS: (f64, f64) = (2_500.0, 4_500.0);

/// Embedded KPI definitions. Parsed at startup; a parse failure surfaces
/// as an init error for this widget only.
pub const KPI_SPECS_JSON: &str = r#"[
    { "id": "active-users", "label": "Active Users",
      "min": 800, "max": 2400, "start": 1460, "max_step": 90, "format": "count" },
    { "id": "conversion", "label": "Conversion Rate",
      "min": 1.5, "max": 6.5, "start": 3.2, "max_step": 0.35, "format": "percent" },
    { "id": "server-load", "label": "Server Load",
      "min": 10, "max": 95, "start": 42, "max_step": 6, "format": "percent" },
    { "id": "revenue", "label": "Monthly Revenue",
      "min": 12000, "max": 48000, "start": 28400, "max_step": 1500, "format": "currency" }
]"#;

/// How a KPI value renders.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KpiFormat {
    Count,
    Percent,
    Currency,
}

/// One KPI widget as declared in the embedded config.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct KpiSpec {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub start: f64,
    pub max_step: f64,
    pub format: KpiFormat,
}

/// Parse KPI definitions from embedded JSON.
///
/// # Errors
///
/// Returns the underlying JSON error for malformed input.
pub fn parse_specs(json: &str) -> Result<Vec<KpiSpec>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Live state of one KPI: its declaration plus a bounded walk.
#[derive(Clone, Debug)]
pub struct KpiState {
    pub spec: KpiSpec,
    walk: BoundedWalk,
}

impl KpiState {
    #[must_use]
    pub fn new(spec: KpiSpec) -> Self {
        let walk = BoundedWalk::new(spec.start, spec.min, spec.max, spec.max_step);
        Self { spec, walk }
    }

    /// One simulation tick. Returns the new value.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.walk.step(rng)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.walk.value()
    }

    /// Render `value` according to the declared format.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self.spec.format {
            KpiFormat::Count => group_thousands(value),
            KpiFormat::Percent => format!("{value:.1}%"),
            KpiFormat::Currency => format!("${}", group_thousands(value)),
        }
    }
}

/// Round to a whole number and group digits with commas.
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 { format!("-{grouped}") } else { grouped }
}

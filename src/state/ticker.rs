#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use serde::Deserialize;

/// Update cadence of the news ticker.
pub const PERIOD_MS: f64 = 4_000.0;

/// Embedded ticker items. Parsed at startup; a parse failure surfaces as
/// an init error for this widget only.
pub const NEWS_ITEMS_JSON: &str = r#"[
    { "headline": "Markets steady as quarterly reports land", "source": "Wire" },
    { "headline": "Open-source dashboard tooling sees record adoption", "source": "DevDaily" },
    { "headline": "Cloud region outage resolved after 40 minutes", "source": "StatusWatch" },
    { "headline": "Survey: dark mode now default for 6 in 10 developers", "source": "UX Weekly" },
    { "headline": "Rust climbs again in language popularity index", "source": "Stack Report" }
]"#;

/// One rotating headline.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub headline: String,
    pub source: String,
}

/// Parse a ticker item list from embedded JSON.
///
/// # Errors
///
/// Returns the underlying JSON error for malformed input.
pub fn parse_items(json: &str) -> Result<Vec<NewsItem>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Round-robin rotation over a fixed item list.
#[derive(Clone, Debug, Default)]
pub struct TickerState {
    items: Vec<NewsItem>,
    pub active: usize,
}

impl TickerState {
    #[must_use]
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items, active: 0 }
    }

    /// Advance to the next item, wrapping at the end.
    pub fn advance(&mut self) {
        if !self.items.is_empty() {
            self.active = (self.active + 1) % self.items.len();
        }
    }

    /// The currently visible item, if the list is non-empty.
    #[must_use]
    pub fn current(&self) -> Option<&NewsItem> {
        self.items.get(self.active)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! Widget runtime: one repeating interval drives every simulator at its
//! own cadence through a shared scheduler.
//!
//! Each widget owns disjoint state; a tick updates one widget's model and
//! pushes the new numbers through the tween layer. Initialization
//! failures are aggregated — a widget that cannot start is skipped and
//! reported while its siblings run.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use simkit::schedule::Scheduler;

use crate::error::InitError;
use crate::state::{clock, kpi, price, sentiment, tasks, ticker, weather};
use crate::util::animate::{AnimatedValue, DEFAULT_DURATION_MS};

/// Scheduler resolution. Fine enough for the 1 s clock and the randomized
/// KPI periods.
const TICK_MS: u32 = 250;

/// Scheduler key for each independently ticking widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKey {
    Clock,
    Weather,
    Price,
    Sentiment,
    Ticker,
    Kpi(usize),
}

/// One KPI's reactive handles.
#[derive(Clone, Copy)]
pub struct KpiHandle {
    pub state: RwSignal<kpi::KpiState>,
    pub value: AnimatedValue,
}

/// Everything the dashboard renders from.
///
/// Signals are `Copy` and the rest is `Rc`-backed, so cloning is cheap
/// and the runtime moves freely into the interval closure and into
/// component context.
#[derive(Clone)]
pub struct Runtime {
    pub clock: RwSignal<clock::ClockState>,
    pub weather: RwSignal<weather::WeatherState>,
    pub weather_temp: AnimatedValue,
    pub price: RwSignal<price::PriceState>,
    pub price_value: AnimatedValue,
    pub price_change: AnimatedValue,
    pub sentiment: RwSignal<sentiment::SentimentState>,
    pub sentiment_value: AnimatedValue,
    pub ticker: RwSignal<ticker::TickerState>,
    pub kpis: Vec<KpiHandle>,
    pub tasks: RwSignal<tasks::TasksState>,
    pub tasks_progress: AnimatedValue,
}

impl Runtime {
    /// Advance one widget. Called only from the scheduler tick.
    fn tick<R: Rng + ?Sized>(&self, key: WidgetKey, rng: &mut R) {
        match key {
            WidgetKey::Clock => {
                self.clock.set(clock::render(Local::now().naive_local()));
            }
            WidgetKey::Weather => {
                let mut temp = 0.0;
                self.weather.update(|w| {
                    w.tick(rng);
                    temp = w.temperature();
                });
                self.weather_temp.animate_to(temp, DEFAULT_DURATION_MS);
            }
            WidgetKey::Price => {
                let mut value = 0.0;
                let mut change = 0.0;
                self.price.update(|p| {
                    value = p.tick(rng);
                    change = p.percent_change();
                });
                self.price_value.animate_to(value, DEFAULT_DURATION_MS);
                self.price_change.animate_to(change, DEFAULT_DURATION_MS);
            }
            WidgetKey::Sentiment => {
                let mut value = 0.0;
                self.sentiment.update(|s| value = s.tick(rng));
                self.sentiment_value.animate_to(value, DEFAULT_DURATION_MS);
            }
            WidgetKey::Ticker => {
                self.ticker.update(ticker::TickerState::advance);
            }
            WidgetKey::Kpi(index) => {
                if let Some(handle) = self.kpis.get(index) {
                    let mut value = 0.0;
                    handle.state.update(|k| value = k.tick(rng));
                    handle.value.animate_to(value, DEFAULT_DURATION_MS);
                }
            }
        }
    }
}

/// Build every widget, register cadences, and start the driving interval.
///
/// Returns the runtime plus the initialization failures that were skipped
/// over. The interval is cancelled when the calling scope is cleaned up.
pub fn start() -> (Runtime, Vec<InitError>) {
    let seed = js_sys::Date::now().to_bits();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut failures = Vec::new();

    // Fallible per-widget init: embedded configs. A failure empties that
    // widget and is reported; everything else proceeds.
    let kpi_specs = match kpi::parse_specs(kpi::KPI_SPECS_JSON) {
        Ok(specs) => specs,
        Err(source) => {
            failures.push(InitError::Config { widget: "kpis", source });
            Vec::new()
        }
    };
    let news_items = match ticker::parse_items(ticker::NEWS_ITEMS_JSON) {
        Ok(items) => items,
        Err(source) => {
            failures.push(InitError::Config { widget: "news ticker", source });
            Vec::new()
        }
    };

    let kpis: Vec<KpiHandle> = kpi_specs
        .into_iter()
        .map(|spec| {
            let start = spec.start;
            KpiHandle {
                state: RwSignal::new(kpi::KpiState::new(spec)),
                value: AnimatedValue::new(start),
            }
        })
        .collect();

    let weather_state = weather::WeatherState::default();
    let price_state = price::PriceState::default();
    let sentiment_state = sentiment::SentimentState::default();
    let tasks_state = tasks::TasksState::with_defaults();
    let initial_progress = tasks_state.progress_percent();

    let runtime = Runtime {
        clock: RwSignal::new(clock::render(Local::now().naive_local())),
        weather_temp: AnimatedValue::new(weather_state.temperature()),
        weather: RwSignal::new(weather_state),
        price_value: AnimatedValue::new(price_state.price()),
        price_change: AnimatedValue::new(0.0),
        price: RwSignal::new(price_state),
        sentiment_value: AnimatedValue::new(sentiment_state.value()),
        sentiment: RwSignal::new(sentiment_state),
        ticker: RwSignal::new(ticker::TickerState::new(news_items)),
        kpis,
        tasks: RwSignal::new(tasks_state),
        tasks_progress: AnimatedValue::new(initial_progress),
    };

    // One scheduler entry per timed widget. Tasks are user-driven and not
    // registered.
    let now = js_sys::Date::now();
    let mut scheduler = Scheduler::new();
    scheduler.insert(WidgetKey::Clock, clock::PERIOD_MS, now);
    scheduler.insert(WidgetKey::Weather, weather::PERIOD_MS, now);
    scheduler.insert(WidgetKey::Price, price::PERIOD_MS, now);
    scheduler.insert(WidgetKey::Sentiment, sentiment::PERIOD_MS, now);
    scheduler.insert(WidgetKey::Ticker, ticker::PERIOD_MS, now);
    for index in 0..runtime.kpis.len() {
        let (lo, hi) = kpi::PERIOD_RANGE_MS;
        scheduler.insert(WidgetKey::Kpi(index), rng.random_range(lo..=hi), now);
    }

    let tick_runtime = runtime.clone();
    let rng = Rc::new(RefCell::new(rng));
    let scheduler = Rc::new(RefCell::new(scheduler));
    let interval = Interval::new(TICK_MS, move || {
        let now = js_sys::Date::now();
        let due = scheduler.borrow_mut().due(now);
        let mut rng = rng.borrow_mut();
        for key in due {
            tick_runtime.tick(key, &mut *rng);
        }
    });

    // Park the handle in the reactive arena: when the owning scope is
    // cleaned up the handle drops and the timer is cleared.
    let _teardown: StoredValue<Interval, LocalStorage> = StoredValue::new_local(interval);

    (runtime, failures)
}

//! # pulse
//!
//! A "live dashboard" demo: seven independent widgets (clock, simulated
//! weather, simulated price, sentiment gauge, news ticker, KPI set, task
//! checklist) animated from seeded random walks. There is no data source
//! and no server — a single scheduler perturbs widget state on fixed
//! cadences and every numeric display change is tweened into place.
//!
//! The simulation primitives live in the `simkit` crate, sparkline
//! rendering in `spark`, notifications in `toast`; this crate wires them
//! to the page.

pub mod app;
pub mod components;
pub mod error;
pub mod runtime;
pub mod state;
pub mod util;

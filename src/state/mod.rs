//! Widget state models.
//!
//! DESIGN
//! ======
//! One module per widget, each a plain struct with a `tick` (or
//! user-event) update rule. No signals, no timers, no browser types:
//! the runtime owns scheduling and rendering, models own their bounds
//! and their randomness (through an injected `Rng`). That split is what
//! lets every invariant here be asserted in ordinary unit tests.

pub mod clock;
pub mod kpi;
pub mod price;
pub mod sentiment;
pub mod tasks;
pub mod ticker;
pub mod weather;

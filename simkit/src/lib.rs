//! # simkit
//!
//! Pure simulation and animation primitives for the dashboard front-end:
//! no browser types, no timers, no global clock. Hosts own the wall clock
//! and the RNG; everything here is deterministic given those inputs, which
//! is what makes the widget behavior unit-testable.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`tween`] | Cubic ease-out interpolation between two values |
//! | [`walk`] | Bounded random walk (`clamp(current + delta, min, max)`) |
//! | [`history`] | Fixed-capacity FIFO sample buffer |
//! | [`schedule`] | Multi-cadence scheduler over an injected clock |

pub mod history;
pub mod schedule;
pub mod tween;
pub mod walk;

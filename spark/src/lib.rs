//! Minimal sparkline renderer for the dashboard widgets.
//!
//! A sparkline plots a capped history buffer as a small inline line chart.
//! The crate is split so the interesting part stays testable off-browser:
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Scales a sample series onto a drawing surface (pure) |
//! | [`render`] | Strokes the scaled polyline onto a 2D canvas context |
//!
//! [`render`] is the only module that touches
//! [`web_sys::CanvasRenderingContext2d`]; every fallible canvas call
//! propagates through `Result<(), JsValue>` to the host component.

pub mod geometry;
pub mod render;

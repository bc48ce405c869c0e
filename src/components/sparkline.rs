//! Bridge component between reactive history series and the imperative
//! `spark` renderer.
//!
//! Owns a `<canvas>` element and re-draws from an effect whenever the
//! series changes. Sizing accounts for the device pixel ratio so lines
//! stay crisp on high-density displays.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Canvas host plotting an oldest-first series as a sparkline.
#[component]
pub fn Sparkline(
    /// Series to plot; re-drawn on every change.
    #[prop(into)]
    values: Signal<Vec<f64>>,
    #[prop(default = 220.0)] width: f64,
    #[prop(default = 48.0)] height: f64,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let series = values.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        canvas.set_width(to_device_px(width, dpr));
        canvas.set_height(to_device_px(height, dpr));

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok());
        let Some(ctx) = ctx else {
            return;
        };

        let style = spark::render::Style::default();
        if let Err(err) = spark::render::draw(&ctx, &series, width, height, dpr, &style) {
            log::warn!("sparkline draw failed: {err:?}");
        }
    });

    view! {
        <canvas
            class="sparkline"
            node_ref=canvas_ref
            style=format!("width: {width}px; height: {height}px;")
        ></canvas>
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_device_px(css_px: f64, dpr: f64) -> u32 {
    (css_px * dpr).round() as u32
}

//! Strokes a scaled sample series onto a 2D canvas context.
//!
//! This is the only module that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only sample
//! slice and produces pixels — it mutates no application state. Fallible
//! canvas calls propagate as `Result<(), JsValue>` to the host component.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Clear pixels kept between the polyline and every surface edge.
const PAD_PX: f64 = 2.0;

/// Stroke and optional area-fill colors for one sparkline.
#[derive(Debug, Clone, Copy)]
pub struct Style<'a> {
    pub stroke: &'a str,
    pub fill: Option<&'a str>,
    pub line_width: f64,
}

impl Default for Style<'_> {
    fn default() -> Self {
        Self { stroke: "#4f7cac", fill: None, line_width: 1.5 }
    }
}

/// Draw `values` (oldest first) as a sparkline covering the whole surface.
///
/// `width` and `height` are in CSS pixels; `dpr` is the device pixel ratio
/// the host sized the backing store with. Fewer than two samples clears the
/// surface and draws nothing — a line needs two endpoints.
///
/// # Errors
///
/// Returns `Err` if a `Canvas2D` call fails (e.g. an invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    values: &[f64],
    width: f64,
    height: f64,
    dpr: f64,
    style: &Style<'_>,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);

    let points = crate::geometry::polyline(values, width, height, PAD_PX);
    if points.len() < 2 {
        return Ok(());
    }

    // Optional area fill under the line, closed along the bottom edge.
    if let Some(fill) = style.fill {
        ctx.begin_path();
        ctx.move_to(points[0].x, height - PAD_PX);
        for p in &points {
            ctx.line_to(p.x, p.y);
        }
        if let Some(last) = points.last() {
            ctx.line_to(last.x, height - PAD_PX);
        }
        ctx.close_path();
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }

    // The line itself.
    ctx.begin_path();
    ctx.move_to(points[0].x, points[0].y);
    for p in points.iter().skip(1) {
        ctx.line_to(p.x, p.y);
    }
    ctx.set_line_width(style.line_width);
    ctx.set_line_join("round");
    ctx.set_line_cap("round");
    ctx.set_stroke_style_str(style.stroke);
    ctx.stroke();

    Ok(())
}

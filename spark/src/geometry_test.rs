#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Degenerate series
// =============================================================

#[test]
fn empty_series_yields_no_points() {
    assert!(polyline(&[], 100.0, 40.0, 2.0).is_empty());
}

#[test]
fn single_sample_sits_centered() {
    let pts = polyline(&[42.0], 100.0, 40.0, 2.0);
    assert_eq!(pts, vec![PlotPoint::new(50.0, 20.0)]);
}

#[test]
fn flat_series_draws_along_the_midline() {
    let pts = polyline(&[5.0, 5.0, 5.0, 5.0], 100.0, 40.0, 0.0);
    for p in &pts {
        assert!(approx_eq(p.y, 20.0));
    }
}

// =============================================================
// Scaling
// =============================================================

#[test]
fn samples_spread_evenly_left_to_right() {
    let pts = polyline(&[0.0, 1.0, 2.0], 100.0, 40.0, 0.0);
    assert!(approx_eq(pts[0].x, 0.0));
    assert!(approx_eq(pts[1].x, 50.0));
    assert!(approx_eq(pts[2].x, 100.0));
}

#[test]
fn padding_insets_both_axes() {
    let pts = polyline(&[0.0, 10.0], 100.0, 40.0, 4.0);
    assert!(approx_eq(pts[0].x, 4.0));
    assert!(approx_eq(pts[1].x, 96.0));
    // min maps to the bottom inset, max to the top inset.
    assert!(approx_eq(pts[0].y, 36.0));
    assert!(approx_eq(pts[1].y, 4.0));
}

#[test]
fn larger_values_map_upward() {
    let pts = polyline(&[1.0, 2.0, 3.0], 90.0, 30.0, 0.0);
    assert!(pts[0].y > pts[1].y);
    assert!(pts[1].y > pts[2].y);
}

#[test]
fn min_and_max_span_the_full_inner_height() {
    let pts = polyline(&[10.0, -10.0], 100.0, 50.0, 5.0);
    assert!(approx_eq(pts[0].y, 5.0));
    assert!(approx_eq(pts[1].y, 45.0));
}

#[test]
fn every_point_stays_inside_the_surface() {
    let values: Vec<f64> = (0..60).map(|i| f64::from(i % 17) * 3.5 - 20.0).collect();
    let pts = polyline(&values, 120.0, 36.0, 2.0);
    assert_eq!(pts.len(), 60);
    for p in &pts {
        assert!((0.0..=120.0).contains(&p.x));
        assert!((0.0..=36.0).contains(&p.y));
    }
}

#[test]
fn negative_values_normalize_like_any_other_range() {
    let pts = polyline(&[-30.0, -10.0, -20.0], 60.0, 20.0, 0.0);
    assert!(approx_eq(pts[0].y, 20.0));
    assert!(approx_eq(pts[1].y, 0.0));
    assert!(approx_eq(pts[2].y, 10.0));
}

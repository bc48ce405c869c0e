#![allow(clippy::float_cmp)]

use super::*;

use rand::SeedableRng;
use rand::rngs::SmallRng;

// =============================================================
// step_clamped
// =============================================================

#[test]
fn step_within_bounds_is_plain_addition() {
    assert_eq!(step_clamped(10.0, 2.5, 0.0, 100.0), 12.5);
}

#[test]
fn step_clamps_at_upper_bound() {
    assert_eq!(step_clamped(99.0, 5.0, 0.0, 100.0), 100.0);
}

#[test]
fn step_clamps_at_lower_bound() {
    assert_eq!(step_clamped(1.0, -5.0, 0.0, 100.0), 0.0);
}

// =============================================================
// BoundedWalk
// =============================================================

#[test]
fn new_clamps_initial_value_into_bounds() {
    let walk = BoundedWalk::new(500.0, 0.0, 100.0, 1.0);
    assert_eq!(walk.value(), 100.0);

    let walk = BoundedWalk::new(-3.0, 0.0, 100.0, 1.0);
    assert_eq!(walk.value(), 0.0);
}

#[test]
fn value_never_leaves_bounds_over_many_ticks() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut walk = BoundedWalk::new(50.0, 0.0, 100.0, 30.0);
    for _ in 0..10_000 {
        let v = walk.step(&mut rng);
        assert!((0.0..=100.0).contains(&v), "escaped bounds: {v}");
    }
}

#[test]
fn proportional_step_never_leaves_bounds() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut walk = BoundedWalk::new(60_000.0, 40_000.0, 90_000.0, 0.0);
    for _ in 0..10_000 {
        let v = walk.step_proportional(&mut rng, 0.02);
        assert!((40_000.0..=90_000.0).contains(&v), "escaped bounds: {v}");
    }
}

#[test]
fn same_seed_gives_identical_sequences() {
    let mut a = BoundedWalk::new(50.0, 0.0, 100.0, 5.0);
    let mut b = BoundedWalk::new(50.0, 0.0, 100.0, 5.0);
    let mut rng_a = SmallRng::seed_from_u64(1234);
    let mut rng_b = SmallRng::seed_from_u64(1234);
    for _ in 0..100 {
        assert_eq!(a.step(&mut rng_a), b.step(&mut rng_b));
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = BoundedWalk::new(50.0, 0.0, 100.0, 5.0);
    let mut b = BoundedWalk::new(50.0, 0.0, 100.0, 5.0);
    let mut rng_a = SmallRng::seed_from_u64(1);
    let mut rng_b = SmallRng::seed_from_u64(2);
    let seq_a: Vec<f64> = (0..20).map(|_| a.step(&mut rng_a)).collect();
    let seq_b: Vec<f64> = (0..20).map(|_| b.step(&mut rng_b)).collect();
    assert_ne!(seq_a, seq_b);
}

#[test]
fn step_moves_at_most_max_step() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut walk = BoundedWalk::new(50.0, 0.0, 100.0, 2.0);
    let mut prev = walk.value();
    for _ in 0..1000 {
        let v = walk.step(&mut rng);
        assert!((v - prev).abs() <= 2.0 + 1e-9);
        prev = v;
    }
}

#[test]
fn zero_value_proportional_step_holds_still() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut walk = BoundedWalk::new(0.0, -10.0, 10.0, 0.0);
    assert_eq!(walk.step_proportional(&mut rng, 0.05), 0.0);
}

#[test]
fn bounds_accessors() {
    let walk = BoundedWalk::new(5.0, 1.0, 9.0, 0.5);
    assert_eq!(walk.min(), 1.0);
    assert_eq!(walk.max(), 9.0);
}

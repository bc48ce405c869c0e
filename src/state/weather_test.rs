use super::*;

use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn default_starts_within_bounds() {
    let weather = WeatherState::default();
    assert!((8.0..=35.0).contains(&weather.temperature()));
    assert_eq!(weather.condition_label(), "Sunny");
    assert_eq!(weather.city_name(), "San Francisco");
}

#[test]
fn temperature_stays_in_bounds_over_many_ticks() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut weather = WeatherState::default();
    for _ in 0..5_000 {
        weather.tick(&mut rng);
        let t = weather.temperature();
        assert!((8.0..=35.0).contains(&t), "temperature escaped: {t}");
    }
}

#[test]
fn condition_and_city_indices_stay_valid() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut weather = WeatherState::default();
    for _ in 0..5_000 {
        weather.tick(&mut rng);
        assert!(weather.condition < CONDITIONS.len());
        assert!(weather.city < CITIES.len());
    }
}

#[test]
fn condition_eventually_changes() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut weather = WeatherState::default();
    let initial = weather.condition_label();
    let changed = (0..200).any(|_| {
        weather.tick(&mut rng);
        weather.condition_label() != initial
    });
    assert!(changed, "condition never moved in 200 ticks");
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut a = WeatherState::default();
    let mut b = WeatherState::default();
    let mut rng_a = SmallRng::seed_from_u64(77);
    let mut rng_b = SmallRng::seed_from_u64(77);
    for _ in 0..100 {
        a.tick(&mut rng_a);
        b.tick(&mut rng_b);
        assert_eq!(a.temperature(), b.temperature());
        assert_eq!(a.condition, b.condition);
        assert_eq!(a.city, b.city);
    }
}

mod common;

use common::{approx, FakeShape};
use fx_core::constants::DEFAULT_SHAPE_SPEED;
use fx_core::{drift_offset, parse_speed, AmbientLayer};
use glam::Vec2;

#[test]
fn single_shape_at_time_zero_has_cosine_baseline() {
    let shape = FakeShape::new(Some("1"), Vec2::new(50.0, 50.0));
    let applied = shape.applied.clone();
    let mut layer = AmbientLayer::initialize(vec![shape]);
    layer.tick(0.0);
    let s = &layer.shapes()[0];
    assert!(approx(s.offset().x, 0.0));
    assert!(approx(s.offset().y, 15.0));
    assert_eq!(s.base(), Vec2::new(50.0, 50.0));
    assert_eq!(applied.get(), Some(s.offset()));
}

#[test]
fn tick_is_idempotent_for_the_same_time() {
    let mut layer = AmbientLayer::initialize(vec![
        FakeShape::new(Some("0.3"), Vec2::ZERO),
        FakeShape::new(Some("1.7"), Vec2::new(10.0, 90.0)),
    ]);
    let t = 1_700_000_123.456;
    layer.tick(t);
    let first: Vec<Vec2> = layer.shapes().iter().map(|s| s.offset()).collect();
    layer.tick(t + 3.0);
    layer.tick(t);
    let second: Vec<Vec2> = layer.shapes().iter().map(|s| s.offset()).collect();
    assert_eq!(first, second);
}

#[test]
fn offsets_follow_the_drift_formula_and_base_never_moves() {
    let mut layer = AmbientLayer::initialize(vec![FakeShape::new(Some("2"), Vec2::new(5.0, 6.0))]);
    for t in [0.25, 1.0, 4.5, 100.0] {
        layer.tick(t);
        let s = &layer.shapes()[0];
        let expected_x = (t * 2.0_f64).sin() * 20.0;
        let expected_y = (t * 2.0 * 0.7_f64).cos() * 15.0;
        assert!(approx(s.offset().x, expected_x as f32), "x at t={}", t);
        assert!(approx(s.offset().y, expected_y as f32), "y at t={}", t);
        assert_eq!(s.base(), Vec2::new(5.0, 6.0));
    }
}

#[test]
fn drift_amplitude_is_bounded() {
    for i in 0..200 {
        let o = drift_offset(i as f64 * 0.37, 0.9);
        assert!(o.x.abs() <= 20.0 + 1e-4);
        assert!(o.y.abs() <= 15.0 + 1e-4);
    }
}

#[test]
fn missing_or_bad_speed_defaults() {
    let layer = AmbientLayer::initialize(vec![
        FakeShape::new(None, Vec2::ZERO),
        FakeShape::new(Some("fast"), Vec2::ZERO),
        FakeShape::new(Some("0"), Vec2::ZERO),
        FakeShape::new(Some("1.25"), Vec2::ZERO),
    ]);
    let speeds: Vec<f32> = layer.shapes().iter().map(|s| s.speed()).collect();
    assert_eq!(
        speeds,
        vec![DEFAULT_SHAPE_SPEED, DEFAULT_SHAPE_SPEED, DEFAULT_SHAPE_SPEED, 1.25]
    );
    assert_eq!(parse_speed(Some("0.8x")), 0.8);
}

#[test]
fn empty_layer_ticks_quietly() {
    let mut layer: AmbientLayer<FakeShape> = AmbientLayer::initialize(Vec::new());
    layer.tick(12.0);
    assert!(layer.is_empty());
}

mod common;

use common::{approx, CountingHost, DrawOp, FakeShape, RecordingSurface};
use fx_core::{Engine, EngineConfig};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

type TestEngine = Engine<RecordingSurface, FakeShape, CountingHost>;

fn engine_with(config: EngineConfig, shapes: Vec<FakeShape>) -> (TestEngine, CountingHost) {
    let host = CountingHost::default();
    let engine = Engine::new(
        config,
        Some(RecordingSurface::sized(1024, 768)),
        shapes,
        host.clone(),
        StdRng::seed_from_u64(42),
    );
    (engine, host)
}

fn engine() -> (TestEngine, CountingHost) {
    engine_with(EngineConfig::default(), Vec::new())
}

#[test]
fn pointer_down_spawns_a_burst_that_drains() {
    let (mut e, _host) = engine();
    e.start();
    e.pointer_down(Vec2::new(100.0, 100.0));
    assert_eq!(e.particles().len(), 5);
    assert!(e.input().is_pressed());
    e.pointer_up();
    assert_eq!(e.particles().len(), 5);
    // slowest decay is 0.01/frame, so 100 frames (plus slack) drain everything
    for i in 0..110 {
        assert!(e.frame(i as f64 * 16.0));
    }
    assert!(e.particles().is_empty());
}

#[test]
fn drag_spawns_only_while_pressed() {
    let (mut e, _host) = engine();
    e.pointer_move(Vec2::new(5.0, 5.0), 0.0);
    assert_eq!(e.particles().len(), 0);
    e.pointer_down(Vec2::new(5.0, 5.0));
    // drag spawning is not throttled, unlike the glow
    e.pointer_move(Vec2::new(6.0, 5.0), 1.0);
    e.pointer_move(Vec2::new(7.0, 5.0), 2.0);
    e.pointer_move(Vec2::new(8.0, 5.0), 3.0);
    assert_eq!(e.particles().len(), 5 + 3 * 2);
    e.pointer_up();
    e.pointer_move(Vec2::new(9.0, 5.0), 40.0);
    assert_eq!(e.particles().len(), 11);
}

#[test]
fn pointer_move_returns_throttled_glow_placement() {
    let (mut e, _host) = engine();
    assert!(e.pointer_move(Vec2::new(150.0, 150.0), 0.0).is_some());
    assert!(e.pointer_move(Vec2::new(151.0, 150.0), 8.0).is_none());
    let p = e.pointer_move(Vec2::new(200.0, 160.0), 16.0).unwrap();
    assert_eq!((p.left, p.top), (50.0, 10.0));
    assert!(!e.pointer_leave().visible);
}

#[test]
fn resize_keeps_particles_and_arms_settle() {
    let (mut e, _host) = engine();
    e.pointer_down(Vec2::new(900.0, 700.0));
    let deadline = e.resize(640, 480, 1000.0);
    assert_eq!(deadline, 1250.0);
    assert_eq!(e.particles().len(), 5);
    let s = e.particles().surface().unwrap();
    assert_eq!((s.width, s.height), (640, 480));

    assert!(!e.resize_settled(640, 480, 1100.0));
    assert!(e.resize_settled(640, 480, 1250.0));
    // in sync: no second resize
    let resizes = e
        .particles()
        .surface()
        .unwrap()
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Resize(..)))
        .count();
    assert_eq!(resizes, 1);
}

#[test]
fn early_settle_check_stays_pending_with_time_left() {
    let (mut e, _host) = engine();
    e.resize(640, 480, 1000.0);
    // timer callback landing just before the deadline
    assert!(!e.resize_settled(640, 480, 1249.0));
    assert_eq!(e.settle_remaining_ms(1249.0), Some(1.0));
    assert!(e.resize_settled(640, 480, 1250.0));
    assert_eq!(e.settle_remaining_ms(1250.0), None);
}

#[test]
fn settle_resyncs_a_drifted_surface() {
    let (mut e, _host) = engine();
    e.resize(640, 480, 0.0);
    assert!(e.resize_settled(800, 600, 300.0));
    let s = e.particles().surface().unwrap();
    assert_eq!((s.width, s.height), (800, 600));
}

#[test]
fn frame_updates_before_render_and_ticks_shapes() {
    let shape = FakeShape::new(Some("1"), Vec2::new(50.0, 50.0));
    let applied = shape.applied.clone();
    let (mut e, _host) = engine_with(EngineConfig::default(), vec![shape]);
    e.start();
    e.pointer_down(Vec2::new(1.0, 1.0));
    assert!(e.frame(0.0));
    let ops = &e.particles().surface().unwrap().ops;
    assert_eq!(ops[0], DrawOp::Clear);
    // rendered alpha is the post-tick life
    for (op, p) in ops[1..].iter().zip(e.particles().particles()) {
        match op {
            DrawOp::Circle { alpha, .. } => assert_eq!(*alpha, p.life()),
            other => panic!("unexpected op {:?}", other),
        }
        assert!(p.life() < 1.0);
    }
    let offset = applied.get().unwrap();
    assert!(approx(offset.x, 0.0));
    assert!(approx(offset.y, 15.0));
}

#[test]
fn hidden_page_stops_frames_and_visible_resumes() {
    let (mut e, host) = engine();
    e.start();
    e.start();
    assert_eq!(host.log.borrow().requested.len(), 1);
    e.set_visible(false);
    assert!(!e.is_running());
    assert_eq!(host.log.borrow().cancelled, vec![1]);
    // a callback that already fired does nothing once stopped
    assert!(!e.frame(0.0));
    assert_eq!(host.log.borrow().requested.len(), 1);
    e.set_visible(true);
    assert!(e.is_running());
    assert!(e.frame(16.0));
    assert_eq!(host.log.borrow().requested.len(), 3);
}

#[test]
fn stopped_engine_keeps_particles_frozen() {
    let (mut e, _host) = engine();
    e.pointer_down(Vec2::ZERO);
    assert!(!e.frame(0.0));
    assert!(e.particles().particles().iter().all(|p| p.life() == 1.0));
}

#[test]
fn configured_cap_bounds_growth() {
    let (mut e, _host) = engine_with(EngineConfig::default().with_max_particles(8), Vec::new());
    e.pointer_down(Vec2::ZERO);
    for i in 0..20 {
        e.pointer_move(Vec2::new(i as f32, 0.0), i as f64);
    }
    assert_eq!(e.particles().len(), 8);
}

#[test]
fn teardown_stops_and_clears() {
    let (mut e, host) = engine();
    e.start();
    e.pointer_down(Vec2::ZERO);
    e.teardown();
    assert!(!e.is_running());
    assert!(e.particles().is_empty());
    assert_eq!(host.log.borrow().cancelled.len(), 1);
}

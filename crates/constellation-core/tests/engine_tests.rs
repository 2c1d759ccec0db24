// Host-side tests for the constellation engine, driven through the recording surface.

use constellation_core::*;
use glam::Vec2;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn running(dot_count: usize) -> (Constellation<Recorder>, Recorder) {
    let rec = Recorder::new(800, 600);
    let cfg = ConstellationConfig::default()
        .with_seed(42)
        .with_dot_count(dot_count);
    let mut engine = Constellation::new(rec.clone(), cfg).expect("valid config");
    engine.initialize().expect("recorder provides a context");
    (engine, rec)
}

fn still(x: f32, y: f32) -> Dot {
    Dot::new(Vec2::new(x, y), Vec2::ZERO, 3.0)
}

#[test]
fn initial_seed_fills_the_surface() {
    let (engine, rec) = running(30);
    assert_eq!(engine.state(), LifecycleState::Running);
    assert_eq!(engine.dots().len(), 30);
    for d in engine.dots() {
        assert!(d.pos.x >= 0.0 && d.pos.x <= 800.0, "x out of bounds: {}", d.pos.x);
        assert!(d.pos.y >= 0.0 && d.pos.y <= 600.0, "y out of bounds: {}", d.pos.y);
        assert!(d.vel.x >= -0.5 && d.vel.x < 0.5);
        assert!(d.vel.y >= 1.0 && d.vel.y < 2.0);
        assert_eq!(d.size, 3.0);
    }
    // the first frame is drawn straight away
    assert_eq!(rec.circles().len(), 30);
    assert_eq!(rec.size(), (800, 600));
}

#[test]
fn unsupported_surface_never_starts() {
    let rec = Recorder::unsupported(800, 600);
    let mut engine =
        Constellation::new(rec.clone(), ConstellationConfig::default().with_seed(1)).unwrap();
    assert_eq!(engine.initialize(), Err(EngineError::UnsupportedSurface));
    assert_eq!(engine.state(), LifecycleState::Stopped);
    assert_eq!(engine.tick(0.0), None);
    assert!(engine.dots().is_empty());
    assert!(rec.commands().is_empty());
}

#[test]
fn second_initialize_is_rejected() {
    let (mut engine, _rec) = running(5);
    assert_eq!(engine.initialize(), Err(EngineError::AlreadyInitialized));
    assert_eq!(engine.dots().len(), 5);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut cfg = ConstellationConfig::default();
    cfg.target_fps = -1.0;
    let err = Constellation::new(Recorder::new(10, 10), cfg).err();
    assert_eq!(err, Some(EngineError::Config(ConfigError::InvalidFps(-1.0))));
}

#[test]
fn pointer_grows_nearby_dot_then_releases_it() {
    let (mut engine, _rec) = running(0);
    engine.dots_mut().push(still(400.0, 300.0));

    engine.on_pointer_move(400.0, 300.0, 0.0);
    engine.tick(0.0);
    assert_eq!(engine.dots()[0].size, 10.0);

    // exactly 100px away: 10 - 100/10 = 0, floored at the base radius
    engine.on_pointer_move(500.0, 300.0, 0.0);
    engine.tick(FRAME_MS);
    assert_eq!(engine.dots()[0].size, 3.0);
}

#[test]
fn pointer_position_includes_scroll_offset() {
    let (mut engine, _rec) = running(0);
    engine.on_pointer_move(120.0, 80.0, 400.0);
    assert_eq!(engine.pointer(), Some(Vec2::new(120.0, 480.0)));
}

#[test]
fn unset_pointer_keeps_base_radius() {
    let (mut engine, _rec) = running(30);
    for i in 0..10 {
        engine.tick(i as f64 * FRAME_MS);
    }
    assert!(engine.dots().iter().all(|d| d.size == 3.0));
}

#[test]
fn pointer_leave_resets_every_size() {
    let (mut engine, _rec) = running(0);
    for x in [390.0, 400.0, 410.0, 460.0] {
        engine.dots_mut().push(still(x, 300.0));
    }
    engine.on_pointer_move(400.0, 300.0, 0.0);
    engine.tick(0.0);
    assert!(engine.dots().iter().any(|d| d.size > 3.0));

    engine.on_pointer_leave();
    assert!(engine.dots().iter().all(|d| d.size == 3.0));
    // the pointer itself is still tracked
    assert_eq!(engine.pointer(), Some(Vec2::new(400.0, 300.0)));
}

#[test]
fn dot_past_left_edge_is_culled_with_one_respawn() {
    let (mut engine, _rec) = running(0);
    engine
        .dots_mut()
        .push(Dot::new(Vec2::new(-15.0, 100.0), Vec2::new(0.4, 1.2), 3.0));

    let stats = engine.tick(0.0).unwrap();
    assert_eq!(stats.culled, 1);
    assert_eq!(stats.dots, 0);
    assert_eq!(engine.pending_respawns(), 1);
}

#[test]
fn population_recovers_after_max_respawn_delay() {
    let (mut engine, _rec) = running(0);
    engine.dots_mut().extend([
        still(400.0, 300.0),
        Dot::new(Vec2::new(-15.0, 100.0), Vec2::new(0.0, 1.0), 3.0),
        Dot::new(Vec2::new(300.0, 615.0), Vec2::new(0.0, 1.0), 3.0),
    ]);

    engine.tick(0.0);
    assert_eq!(engine.dots().len(), 1);
    assert_eq!(engine.pending_respawns(), 2);

    // nothing can be due before the minimum delay
    let early = engine.tick(999.0).unwrap();
    assert_eq!(early.respawned, 0);

    let late = engine.tick(3000.0).unwrap();
    assert_eq!(late.respawned, 2);
    assert_eq!(engine.dots().len(), 3);
    assert_eq!(engine.pending_respawns(), 0);
}

#[test]
fn long_run_keeps_invariants() {
    let (mut engine, _rec) = running(30);
    let pointers = [(0.0, 0.0), (400.0, 300.0), (799.0, 10.0), (250.0, 590.0)];
    for i in 0..3000 {
        if i % 250 == 0 {
            let (x, y) = pointers[(i / 250) % pointers.len()];
            engine.on_pointer_move(x, y, 0.0);
        }
        engine.tick(i as f64 * FRAME_MS).unwrap();
        for d in engine.dots() {
            assert!(d.pos.x >= -10.0 && d.pos.x <= 810.0, "x escaped: {}", d.pos.x);
            assert!(d.pos.y <= 610.0, "y escaped: {}", d.pos.y);
            assert!(d.size >= 3.0 && d.size <= 10.0);
        }
        // every cull is matched by exactly one pending respawn
        assert_eq!(engine.dots().len() + engine.pending_respawns(), 30);
    }
}

#[test]
fn tick_draws_in_order() {
    let (mut engine, rec) = running(0);
    engine.dots_mut().extend([still(100.0, 100.0), still(140.0, 100.0)]);
    rec.clear();
    engine.tick(0.0);

    let cmds = rec.commands();
    assert!(matches!(cmds[0], DrawCommand::ClearRect { w, h, .. } if w == 800.0 && h == 600.0));
    assert!(matches!(cmds[1], DrawCommand::FillGradient(_)));
    let first_arc = cmds.iter().position(|c| matches!(c, DrawCommand::Arc { .. }));
    let first_line = cmds.iter().position(|c| matches!(c, DrawCommand::MoveTo { .. }));
    assert!(first_arc.unwrap() < first_line.unwrap());

    let circles = rec.circles();
    assert_eq!(circles.len(), 2);
    assert_eq!(circles[0].color, Rgba::from_array([200, 200, 200], 0.9));
}

#[test]
fn nearby_pair_is_linked_with_falloff_alpha() {
    let (mut engine, rec) = running(0);
    engine.dots_mut().extend([still(0.0, 0.0), still(50.0, 0.0)]);
    rec.clear();
    let stats = engine.tick(0.0).unwrap();
    assert_eq!(stats.connections, 1);

    let lines = rec.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].from, (0.0, 0.0));
    assert_eq!(lines[0].to, (50.0, 0.0));
    assert!((lines[0].color.a - 0.714_285_7).abs() < 1e-4);
    assert_eq!((lines[0].color.r, lines[0].color.g, lines[0].color.b), (200, 200, 200));
}

#[test]
fn close_pair_clamps_to_full_opacity_and_far_pair_is_skipped() {
    let (mut engine, rec) = running(0);
    engine
        .dots_mut()
        .extend([still(0.0, 0.0), still(10.0, 0.0), still(300.0, 300.0)]);
    rec.clear();
    engine.tick(0.0);
    let lines = rec.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].color.a, 1.0);
}

#[test]
fn pair_at_link_distance_draws_no_line() {
    let (mut engine, rec) = running(0);
    engine.dots_mut().extend([still(0.0, 200.0), still(100.0, 200.0)]);
    rec.clear();
    let stats = engine.tick(0.0).unwrap();
    assert_eq!(stats.connections, 0);
    assert!(rec.lines().is_empty());
}

#[test]
fn resize_rebuilds_the_gradient() {
    let (mut engine, rec) = running(10);
    assert_eq!(rec.gradients().len(), 1);
    assert_eq!(rec.gradients()[0].to, (0.0, 600.0));

    rec.set_viewport(1024.0, 768.0);
    engine.on_resize();

    let gradients = rec.gradients();
    assert_eq!(gradients.len(), 2);
    assert_eq!(gradients[1].to, (0.0, 768.0));
    assert_eq!(gradients[1].stops.len(), 3);
    assert_eq!(rec.size(), (1024, 768));
    let scene = engine.scene().unwrap();
    assert_eq!((scene.width, scene.height), (1024, 768));

    rec.clear();
    engine.tick(0.0);
    assert_eq!(
        rec.commands()[1],
        DrawCommand::FillGradient(gradients[1].id)
    );
}

#[test]
fn zero_size_surface_is_a_valid_state() {
    let rec = Recorder::new(0, 0);
    let mut engine =
        Constellation::new(rec.clone(), ConstellationConfig::default().with_seed(3)).unwrap();
    engine.initialize().unwrap();
    assert!(engine.dots().iter().all(|d| d.pos == Vec2::ZERO));
    for i in 0..20 {
        engine.tick(i as f64 * FRAME_MS).unwrap();
    }
}

#[test]
fn destroy_cancels_respawns_and_starves_later_ticks() {
    let (mut engine, rec) = running(0);
    engine
        .dots_mut()
        .push(Dot::new(Vec2::new(-15.0, 100.0), Vec2::ZERO, 3.0));
    engine.tick(0.0);
    assert_eq!(engine.pending_respawns(), 1);

    assert!(engine.destroy());
    assert_eq!(engine.state(), LifecycleState::Destroyed);
    assert_eq!(engine.pending_respawns(), 0);
    assert!(engine.scene().is_none());
    assert!(engine.surface().is_none());

    rec.clear();
    // a stray tick after teardown is a no-op
    assert_eq!(engine.tick(5000.0), None);
    engine.on_resize();
    engine.on_pointer_move(1.0, 1.0, 0.0);
    assert!(rec.commands().is_empty());
    assert!(engine.dots().is_empty());
    assert_eq!(engine.pointer(), None);

    assert!(!engine.destroy());
    assert_eq!(engine.initialize(), Err(EngineError::Destroyed));
}

#[test]
fn same_seed_same_frames() {
    let (mut a, rec_a) = running(30);
    let (mut b, rec_b) = running(30);
    for i in 0..200 {
        a.tick(i as f64 * FRAME_MS);
        b.tick(i as f64 * FRAME_MS);
    }
    assert_eq!(rec_a.commands(), rec_b.commands());
}

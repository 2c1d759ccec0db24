// Host-side tests for the connection search strategies.

use constellation_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scatter(n: usize, extent: f32, seed: u64) -> Vec<Dot> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x = rng.gen_range(-50.0..extent);
            let y = rng.gen_range(-50.0..extent);
            Dot::new(Vec2::new(x, y), Vec2::ZERO, 3.0)
        })
        .collect()
}

#[test]
fn grid_matches_pairwise_on_random_fields() {
    let mut grid = SpatialGrid::new(100.0);
    for seed in 0..20 {
        let dots = scatter(150, 1000.0, seed);
        let expected = pairwise(&dots, 30.0, 100.0);
        let actual = grid.connections(&dots, 30.0, 100.0);
        assert_eq!(expected, actual, "strategies disagree for seed {seed}");
    }
}

#[test]
fn grid_widens_undersized_cells() {
    // cells smaller than the link distance would miss pairs two cells apart
    let dots = [
        Dot::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 3.0),
        Dot::new(Vec2::new(95.0, 0.0), Vec2::ZERO, 3.0),
    ];
    let mut grid = SpatialGrid::new(20.0);
    assert_eq!(grid.connections(&dots, 30.0, 100.0).len(), 1);
}

#[test]
fn every_alpha_is_within_unit_range() {
    let dots = scatter(80, 300.0, 9);
    for c in pairwise(&dots, 30.0, 100.0) {
        assert!(c.a < c.b);
        assert!(c.distance <= 100.0);
        assert!((0.0..=1.0).contains(&c.alpha), "alpha {} at {}", c.alpha, c.distance);
        if c.distance <= 30.0 {
            assert_eq!(c.alpha, 1.0);
        }
    }
}

#[test]
fn empty_and_single_dot_fields_have_no_links() {
    let mut grid = SpatialGrid::new(100.0);
    assert!(pairwise(&[], 30.0, 100.0).is_empty());
    assert!(grid.connections(&[], 30.0, 100.0).is_empty());
    let one = [Dot::new(Vec2::new(5.0, 5.0), Vec2::ZERO, 3.0)];
    assert!(pairwise(&one, 30.0, 100.0).is_empty());
}

#[test]
fn engines_with_either_strategy_draw_identical_frames() {
    let run = |strategy: ConnectionStrategy| {
        let rec = Recorder::new(800, 600);
        let cfg = ConstellationConfig::default()
            .with_seed(11)
            .with_dot_count(60)
            .with_strategy(strategy);
        let mut engine = Constellation::new(rec.clone(), cfg).unwrap();
        engine.initialize().unwrap();
        for i in 0..300 {
            engine.tick(i as f64 * 16.0);
        }
        rec.commands()
    };
    assert_eq!(run(ConnectionStrategy::Pairwise), run(ConnectionStrategy::Grid));
}

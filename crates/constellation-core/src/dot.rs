//! Dot state and the per-frame physics applied to it.

use crate::config::ConstellationConfig;
use crate::constants::{SEED_X_SPEED_MAX, SEED_X_SPEED_MIN, Y_SPEED_MAX, Y_SPEED_MIN};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub pos: Vec2,
    /// Pixels per frame. `vel.y` is positive for every spawned dot.
    pub vel: Vec2,
    pub size: f32,
}

impl Dot {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }
}

/// Initial population, scattered over the whole surface.
pub fn seed_dots<R: Rng>(
    rng: &mut R,
    cfg: &ConstellationConfig,
    width: f32,
    height: f32,
) -> Vec<Dot> {
    (0..cfg.dot_count)
        .map(|_| {
            let x = (rng.gen::<f32>() * width).floor();
            let y = (rng.gen::<f32>() * height).floor();
            let vx = rng.gen_range(SEED_X_SPEED_MIN..SEED_X_SPEED_MAX);
            Dot::new(Vec2::new(x, y), Vec2::new(vx, fall_speed(rng)), cfg.base_radius)
        })
        .collect()
}

/// A replacement dot entering just above the top edge, drifting toward the centre.
pub fn spawn_offscreen<R: Rng>(rng: &mut R, cfg: &ConstellationConfig, width: f32) -> Dot {
    let left = rng.gen_bool(0.5);
    let half = width / 2.0;
    let (x, vx) = if left {
        (rng.gen::<f32>() * half - cfg.spawn_inset, rng.gen::<f32>())
    } else {
        (
            rng.gen::<f32>() * half + half + cfg.spawn_inset,
            rng.gen::<f32>() - 1.0,
        )
    };
    Dot::new(
        Vec2::new(x, cfg.spawn_y),
        Vec2::new(vx, fall_speed(rng)),
        cfg.base_radius,
    )
}

#[inline]
fn fall_speed<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(Y_SPEED_MIN..Y_SPEED_MAX)
}

/// Radius of a dot `distance` pixels away from the pointer.
///
/// Grows linearly from `base` at `hover` pixels to `max` under the pointer.
#[inline]
pub fn proximity_radius(distance: f32, base: f32, max: f32, hover: f32) -> f32 {
    if !distance.is_finite() {
        return base;
    }
    (max - distance / (hover / max)).min(max).max(base)
}

/// Resize every dot by its distance to `pointer`. An unset pointer is treated
/// as infinitely far away.
pub fn resize_dots(dots: &mut [Dot], pointer: Option<Vec2>, cfg: &ConstellationConfig) {
    for dot in dots {
        let distance = pointer.map_or(f32::INFINITY, |p| p.distance(dot.pos));
        dot.size = proximity_radius(distance, cfg.base_radius, cfg.max_radius, cfg.hover_distance);
    }
}

pub fn reset_sizes(dots: &mut [Dot], base_radius: f32) {
    for dot in dots {
        dot.size = base_radius;
    }
}

/// True once a dot has left through either side or the bottom.
#[inline]
pub fn is_outside(pos: Vec2, width: f32, height: f32, margin: f32) -> bool {
    pos.x < -margin || pos.x > width + margin || pos.y > height + margin
}

/// Move every dot by its velocity and drop the ones that left the surface.
/// Returns how many were dropped.
pub fn advance_and_cull(dots: &mut Vec<Dot>, width: f32, height: f32, margin: f32) -> usize {
    let before = dots.len();
    dots.retain_mut(|dot| {
        dot.pos += dot.vel;
        !is_outside(dot.pos, width, height, margin)
    });
    before - dots.len()
}

//! Proximity links between dots.

use crate::config::{ConnectionStrategy, ConstellationConfig};
use crate::constants::GRID_BUCKET_INLINE;
use crate::dot::Dot;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

/// A line to draw between dots `a` and `b` (indices into the dot slice, `a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Stroke alpha for a pair `distance` apart, or `None` when too far to link.
///
/// Fully opaque up to `full`, fading linearly towards zero at `link`. Pairs
/// `link` or more apart are not joined.
#[inline]
pub fn connection_alpha(distance: f32, full: f32, link: f32) -> Option<f32> {
    if distance.is_nan() || distance >= link {
        return None;
    }
    Some((1.0 - (distance - full) / (link - full)).clamp(0.0, 1.0))
}

/// Every linked pair, compared exhaustively. O(n²).
pub fn pairwise(dots: &[Dot], full: f32, link: f32) -> Vec<Connection> {
    let mut out = Vec::new();
    for (i, a) in dots.iter().enumerate() {
        for (j, b) in dots.iter().enumerate().skip(i + 1) {
            let distance = a.pos.distance(b.pos);
            if let Some(alpha) = connection_alpha(distance, full, link) {
                out.push(Connection {
                    a: i,
                    b: j,
                    distance,
                    alpha,
                });
            }
        }
    }
    out
}

type Bucket = SmallVec<[usize; GRID_BUCKET_INLINE]>;

/// Uniform grid over dot positions. Cells are `cell_size` wide, so with
/// `cell_size >= link` every linked pair shares a cell or touches one.
#[derive(Debug, Default)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: FnvHashMap<(i32, i32), Bucket>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FnvHashMap::default(),
        }
    }

    #[inline]
    fn cell_of(&self, pos: Vec2) -> (i32, i32) {
        (
            (pos.x / self.cell_size).floor() as i32,
            (pos.y / self.cell_size).floor() as i32,
        )
    }

    pub fn rebuild(&mut self, dots: &[Dot]) {
        self.cells.clear();
        for (i, dot) in dots.iter().enumerate() {
            let cell = self.cell_of(dot.pos);
            self.cells.entry(cell).or_default().push(i);
        }
    }

    /// Linked pairs found through neighbouring cells, sorted by `(a, b)` so the
    /// result matches [`pairwise`].
    pub fn connections(&mut self, dots: &[Dot], full: f32, link: f32) -> Vec<Connection> {
        if self.cell_size < link {
            self.cell_size = link;
        }
        self.rebuild(dots);
        let mut out = Vec::new();
        for (i, a) in dots.iter().enumerate() {
            let (cx, cy) = self.cell_of(a.pos);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) else {
                        continue;
                    };
                    for &j in bucket.iter().filter(|&&j| j > i) {
                        let distance = a.pos.distance(dots[j].pos);
                        if let Some(alpha) = connection_alpha(distance, full, link) {
                            out.push(Connection {
                                a: i,
                                b: j,
                                distance,
                                alpha,
                            });
                        }
                    }
                }
            }
        }
        out.sort_unstable_by_key(|c| (c.a, c.b));
        out
    }
}

/// Linked pairs for this frame using the configured strategy.
pub fn find_connections(
    dots: &[Dot],
    cfg: &ConstellationConfig,
    grid: &mut SpatialGrid,
) -> Vec<Connection> {
    let (full, link) = (cfg.full_opacity_distance, cfg.link_distance);
    match cfg.connection_strategy {
        ConnectionStrategy::Pairwise => pairwise(dots, full, link),
        ConnectionStrategy::Grid => grid.connections(dots, full, link),
    }
}

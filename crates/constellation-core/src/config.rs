use crate::color::Rgba;
use crate::constants::*;
use crate::surface::GradientStop;
use std::ops::RangeInclusive;
use thiserror::Error;

/// How connection lines are searched for each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStrategy {
    /// Compare every unordered pair of dots.
    #[default]
    Pairwise,
    /// Bucket dots into a grid of `link_distance` cells and compare neighbours only.
    Grid,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("radius must be positive and finite (base {base}, max {max})")]
    InvalidRadius { base: f32, max: f32 },
    #[error("base radius {base} exceeds max radius {max}")]
    BaseAboveMax { base: f32, max: f32 },
    #[error("hover distance must be positive, got {0}")]
    InvalidHoverDistance(f32),
    #[error("full-opacity distance {full} must be below link distance {link}")]
    InvalidLinkRange { full: f32, link: f32 },
    #[error("target fps must be positive, got {0}")]
    InvalidFps(f64),
    #[error("respawn delay range {min}..={max} ms is empty or negative")]
    InvalidRespawnDelay { min: f64, max: f64 },
    #[error("gradient stops must be ascending within [0, 1]")]
    InvalidGradient,
}

#[derive(Clone, Debug)]
pub struct ConstellationConfig {
    pub dot_count: usize,
    pub base_radius: f32,
    pub max_radius: f32,
    pub hover_distance: f32,
    pub link_distance: f32,
    pub full_opacity_distance: f32,
    pub exit_margin: f32,
    pub spawn_inset: f32,
    pub spawn_y: f32,
    pub respawn_delay_ms: RangeInclusive<f64>,
    pub target_fps: f64,
    pub gradient: Vec<GradientStop>,
    pub star_color: Rgba,
    pub line_width: f64,
    pub connection_strategy: ConnectionStrategy,
    /// Fixed RNG seed for reproducible runs; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        let top = Rgba::parse_hex(GRADIENT_TOP).unwrap_or(Rgba::rgb(0x12, 0x34, 0x56));
        let bottom = Rgba::parse_hex(GRADIENT_BOTTOM).unwrap_or(Rgba::rgb(0x64, 0x72, 0x8e));
        Self {
            dot_count: DOT_COUNT,
            base_radius: BASE_RADIUS,
            max_radius: MAX_RADIUS,
            hover_distance: HOVER_DISTANCE,
            link_distance: LINK_DISTANCE,
            full_opacity_distance: FULL_OPACITY_DISTANCE,
            exit_margin: EXIT_MARGIN,
            spawn_inset: SPAWN_INSET,
            spawn_y: SPAWN_Y,
            respawn_delay_ms: RESPAWN_DELAY_MIN_MS..=RESPAWN_DELAY_MAX_MS,
            target_fps: TARGET_FPS,
            gradient: vec![
                GradientStop::new(0.0, top),
                GradientStop::new(GRADIENT_MID_OFFSET, top),
                GradientStop::new(1.0, bottom),
            ],
            star_color: Rgba::from_array(STAR_RGB, STAR_ALPHA),
            line_width: LINE_WIDTH,
            connection_strategy: ConnectionStrategy::default(),
            seed: None,
        }
    }
}

impl ConstellationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_dot_count(mut self, dot_count: usize) -> Self {
        self.dot_count = dot_count;
        self
    }

    pub fn with_strategy(mut self, strategy: ConnectionStrategy) -> Self {
        self.connection_strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (base, max) = (self.base_radius, self.max_radius);
        if !(base.is_finite() && max.is_finite() && base > 0.0 && max > 0.0) {
            return Err(ConfigError::InvalidRadius { base, max });
        }
        if base > max {
            return Err(ConfigError::BaseAboveMax { base, max });
        }
        if !(self.hover_distance.is_finite() && self.hover_distance > 0.0) {
            return Err(ConfigError::InvalidHoverDistance(self.hover_distance));
        }
        let (full, link) = (self.full_opacity_distance, self.link_distance);
        if !(full.is_finite() && link.is_finite() && full >= 0.0 && full < link) {
            return Err(ConfigError::InvalidLinkRange { full, link });
        }
        if !(self.target_fps.is_finite() && self.target_fps > 0.0) {
            return Err(ConfigError::InvalidFps(self.target_fps));
        }
        let (min, max) = (*self.respawn_delay_ms.start(), *self.respawn_delay_ms.end());
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(ConfigError::InvalidRespawnDelay { min, max });
        }
        let ascending = self
            .gradient
            .windows(2)
            .all(|w| w[0].offset <= w[1].offset);
        let in_range = self
            .gradient
            .iter()
            .all(|s| (0.0..=1.0).contains(&s.offset));
        if self.gradient.is_empty() || !ascending || !in_range {
            return Err(ConfigError::InvalidGradient);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ConstellationConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.dot_count, 30);
        assert_eq!(cfg.gradient.len(), 3);
        assert_eq!(cfg.gradient[1].offset, 0.4);
        assert_eq!(cfg.gradient[0].color, cfg.gradient[1].color);
    }

    #[test]
    fn rejects_inverted_radii_and_link_range() {
        let mut cfg = ConstellationConfig::default();
        cfg.base_radius = 12.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::BaseAboveMax { .. })));

        let mut cfg = ConstellationConfig::default();
        cfg.full_opacity_distance = 100.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidLinkRange { .. })));
    }

    #[test]
    fn rejects_bad_timing_and_gradient() {
        let mut cfg = ConstellationConfig::default();
        cfg.target_fps = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidFps(0.0)));

        let mut cfg = ConstellationConfig::default();
        cfg.respawn_delay_ms = 3000.0..=1000.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidRespawnDelay { .. })));

        let mut cfg = ConstellationConfig::default();
        cfg.gradient.reverse();
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidGradient));
    }
}

//! Resize-derived scene parameters.

use crate::color::Rgba;
use crate::config::ConstellationConfig;
use crate::surface::DrawContext;

/// Rendering parameters cached for one surface size. Rebuilt on every resize,
/// never patched in place.
#[derive(Debug)]
pub struct Scene<G> {
    pub width: u32,
    pub height: u32,
    /// `None` if the context refused to build the gradient; the background
    /// then falls back to the first stop's flat colour.
    pub gradient: Option<G>,
    pub fallback_fill: Rgba,
    pub star_color: Rgba,
    pub line_width: f64,
}

impl<G> Scene<G> {
    pub fn build<C>(ctx: &mut C, width: u32, height: u32, cfg: &ConstellationConfig) -> Self
    where
        C: DrawContext<Gradient = G>,
    {
        let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, height as f64, &cfg.gradient);
        if gradient.is_none() {
            log::warn!("[scene] gradient rejected for {}x{}", width, height);
        }
        Self {
            width,
            height,
            gradient,
            fallback_fill: cfg
                .gradient
                .first()
                .map_or(Rgba::rgb(0, 0, 0), |s| s.color),
            star_color: cfg.star_color,
            line_width: cfg.line_width,
        }
    }

    #[inline]
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    /// Clear the surface and paint the backdrop.
    pub fn draw_background<C>(&self, ctx: &mut C)
    where
        C: DrawContext<Gradient = G>,
    {
        let (w, h) = (self.width as f64, self.height as f64);
        ctx.clear_rect(0.0, 0.0, w, h);
        match &self.gradient {
            Some(g) => ctx.set_fill_gradient(g),
            None => ctx.set_fill_color(&self.fallback_fill),
        }
        ctx.begin_path();
        ctx.fill_rect(0.0, 0.0, w, h);
    }
}

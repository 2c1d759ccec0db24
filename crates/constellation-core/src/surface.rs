//! Drawing-surface contract.
//!
//! The engine never talks to a platform API directly. A front-end provides a
//! [`Surface`] (the sized drawing target) and its [`DrawContext`] (the 2D
//! drawing primitives). The web front-end backs these with an
//! `HtmlCanvasElement`; tests use [`crate::Recorder`].

use crate::color::Rgba;

/// One colour stop of a linear gradient. `offset` is in \[0, 1\].
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// The 2D primitives the engine draws with.
pub trait DrawContext {
    /// Platform gradient handle, cached by the engine between frames.
    type Gradient;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Build a linear gradient from (x0, y0) to (x1, y1). `None` when the
    /// platform rejects the geometry or a stop.
    fn create_linear_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: &[GradientStop],
    ) -> Option<Self::Gradient>;

    fn set_fill_gradient(&mut self, gradient: &Self::Gradient);
    fn set_fill_color(&mut self, color: &Rgba);
    fn set_stroke_color(&mut self, color: &Rgba);
    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

/// A sized drawing target.
pub trait Surface {
    type Context: DrawContext;

    /// Size of the hosting viewport (the window's inner size on the web).
    fn viewport(&self) -> (f64, f64);
    /// Current backing size of the surface in pixels.
    fn size(&self) -> (u32, u32);
    fn set_size(&mut self, width: u32, height: u32);
    /// The 2D drawing context, or `None` if the platform cannot provide one.
    fn context(&mut self) -> Option<Self::Context>;
}

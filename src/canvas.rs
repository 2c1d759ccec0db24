use constellation_core::{DrawContext, GradientStop, Rgba, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `HtmlCanvasElement` sized to the window's inner size.
pub struct WebSurface {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
}

impl WebSurface {
    pub fn new(window: web::Window, canvas: web::HtmlCanvasElement) -> Self {
        Self { window, canvas }
    }
}

#[inline]
fn js_f64(v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl Surface for WebSurface {
    type Context = WebContext;

    fn viewport(&self) -> (f64, f64) {
        (
            js_f64(self.window.inner_width()),
            js_f64(self.window.inner_height()),
        )
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn context(&mut self) -> Option<WebContext> {
        match self.canvas.get_context("2d") {
            Ok(Some(obj)) => obj
                .dyn_into::<web::CanvasRenderingContext2d>()
                .ok()
                .map(|ctx| WebContext { ctx }),
            Ok(None) => None,
            Err(e) => {
                log::error!("getContext('2d') failed: {:?}", e);
                None
            }
        }
    }
}

pub struct WebContext {
    ctx: web::CanvasRenderingContext2d,
}

impl DrawContext for WebContext {
    type Gradient = web::CanvasGradient;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn create_linear_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: &[GradientStop],
    ) -> Option<web::CanvasGradient> {
        let gradient = self.ctx.create_linear_gradient(x0, y0, x1, y1);
        for stop in stops {
            if let Err(e) = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css()) {
                log::warn!("addColorStop({}) rejected: {:?}", stop.offset, e);
                return None;
            }
        }
        Some(gradient)
    }

    fn set_fill_gradient(&mut self, gradient: &web::CanvasGradient) {
        self.ctx.set_fill_style_canvas_gradient(gradient);
    }

    fn set_fill_color(&mut self, color: &Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_stroke_color(&mut self, color: &Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        // negative radii throw; sizes are floored at the base radius anyway
        _ = self.ctx.arc(x, y, radius.max(0.0), start_angle, end_angle);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

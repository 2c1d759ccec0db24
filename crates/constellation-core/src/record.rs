//! Headless surface that records draw calls instead of rasterizing them.

use crate::color::Rgba;
use crate::surface::{DrawContext, GradientStop, Surface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Gradient handle produced by [`RecordingContext`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedGradient {
    pub id: usize,
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    CreateGradient(RecordedGradient),
    FillGradient(usize),
    FillColor(Rgba),
    StrokeColor(Rgba),
    LineWidth(f64),
    BeginPath,
    ClosePath,
    Arc { x: f64, y: f64, radius: f64 },
    Fill,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
}

/// A stroked segment reconstructed from the command log.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Rgba,
}

/// A filled circle reconstructed from the command log.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCircle {
    pub center: (f64, f64),
    pub radius: f64,
    pub color: Rgba,
}

type Log = Rc<RefCell<Vec<DrawCommand>>>;

/// In-memory [`Surface`]. Clones share the command log, viewport and size,
/// so a test can keep one clone while the engine owns another.
#[derive(Clone, Debug)]
pub struct Recorder {
    viewport: Rc<Cell<(f64, f64)>>,
    size: Rc<Cell<(u32, u32)>>,
    supported: bool,
    log: Log,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Rc::new(Cell::new((width as f64, height as f64))),
            size: Rc::default(),
            supported: true,
            log: Rc::default(),
        }
    }

    /// A surface whose context is never available.
    pub fn unsupported(width: u32, height: u32) -> Self {
        Self {
            supported: false,
            ..Self::new(width, height)
        }
    }

    /// Change the viewport, as a window resize would.
    pub fn set_viewport(&self, width: f64, height: f64) {
        self.viewport.set((width, height));
    }

    pub fn commands(&self) -> Vec<DrawCommand> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn gradients(&self) -> Vec<RecordedGradient> {
        self.log
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::CreateGradient(g) => Some(g.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<RecordedLine> {
        let mut out = Vec::new();
        let mut stroke = Rgba::rgb(0, 0, 0);
        let mut from = None;
        let mut to = None;
        for c in self.log.borrow().iter() {
            match c {
                DrawCommand::StrokeColor(col) => stroke = *col,
                DrawCommand::BeginPath => {
                    from = None;
                    to = None;
                }
                DrawCommand::MoveTo { x, y } => from = Some((*x, *y)),
                DrawCommand::LineTo { x, y } => to = Some((*x, *y)),
                DrawCommand::Stroke => {
                    if let (Some(f), Some(t)) = (from, to) {
                        out.push(RecordedLine {
                            from: f,
                            to: t,
                            color: stroke,
                        });
                    }
                }
                _ => {}
            }
        }
        out
    }

    pub fn circles(&self) -> Vec<RecordedCircle> {
        let mut out = Vec::new();
        let mut fill = Rgba::rgb(0, 0, 0);
        let mut arc = None;
        for c in self.log.borrow().iter() {
            match c {
                DrawCommand::FillColor(col) => fill = *col,
                DrawCommand::BeginPath => arc = None,
                DrawCommand::Arc { x, y, radius } => arc = Some(((*x, *y), *radius)),
                DrawCommand::Fill => {
                    if let Some((center, radius)) = arc {
                        out.push(RecordedCircle {
                            center,
                            radius,
                            color: fill,
                        });
                    }
                }
                _ => {}
            }
        }
        out
    }

    fn push(&self, cmd: DrawCommand) {
        self.log.borrow_mut().push(cmd);
    }
}

impl Surface for Recorder {
    type Context = RecordingContext;

    fn viewport(&self) -> (f64, f64) {
        self.viewport.get()
    }

    fn size(&self) -> (u32, u32) {
        self.size.get()
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size.set((width, height));
    }

    fn context(&mut self) -> Option<RecordingContext> {
        self.supported.then(|| RecordingContext {
            target: self.clone(),
            next_gradient: 0,
        })
    }
}

/// Draw context handed out by [`Recorder`].
#[derive(Debug)]
pub struct RecordingContext {
    target: Recorder,
    next_gradient: usize,
}

impl DrawContext for RecordingContext {
    type Gradient = RecordedGradient;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.target.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.target.push(DrawCommand::FillRect { x, y, w, h });
    }

    fn create_linear_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: &[GradientStop],
    ) -> Option<RecordedGradient> {
        let gradient = RecordedGradient {
            id: self.next_gradient,
            from: (x0, y0),
            to: (x1, y1),
            stops: stops.to_vec(),
        };
        self.next_gradient += 1;
        self.target.push(DrawCommand::CreateGradient(gradient.clone()));
        Some(gradient)
    }

    fn set_fill_gradient(&mut self, gradient: &RecordedGradient) {
        self.target.push(DrawCommand::FillGradient(gradient.id));
    }

    fn set_fill_color(&mut self, color: &Rgba) {
        self.target.push(DrawCommand::FillColor(*color));
    }

    fn set_stroke_color(&mut self, color: &Rgba) {
        self.target.push(DrawCommand::StrokeColor(*color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.target.push(DrawCommand::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.target.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.target.push(DrawCommand::ClosePath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, _start_angle: f64, _end_angle: f64) {
        self.target.push(DrawCommand::Arc { x, y, radius });
    }

    fn fill(&mut self) {
        self.target.push(DrawCommand::Fill);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.target.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.target.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.target.push(DrawCommand::Stroke);
    }
}

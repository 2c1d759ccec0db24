use crate::canvas::WebSurface;
use crate::dom;
use crate::events::DomListeners;
use crate::frame::FrameLoop;
use crate::Engine;
use constellation_core::{Bindings, Constellation, ConstellationConfig, EngineError, LifecycleState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The engine plus everything the page attaches to it: the frame loop and
/// the DOM listeners.
pub struct ConstellationView {
    engine: Rc<RefCell<Engine>>,
    bindings: Bindings<DomListeners>,
    frame_loop: Option<FrameLoop>,
}

impl ConstellationView {
    /// Start animating `canvas`. On an unsupported canvas the user gets an
    /// alert and nothing is started.
    pub fn initialize(
        canvas: web::HtmlCanvasElement,
        cfg: ConstellationConfig,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let mut engine = Constellation::new(WebSurface::new(window.clone(), canvas.clone()), cfg)?;
        if let Err(e) = engine.initialize() {
            if e == EngineError::UnsupportedSurface {
                dom::alert(&window, &e.to_string());
            }
            return Err(e.into());
        }

        let interval_ms = engine.frame_interval_ms();
        let engine = Rc::new(RefCell::new(engine));
        let frame_loop = FrameLoop::start(engine.clone(), interval_ms);
        let mut view = Self {
            bindings: Bindings::new(DomListeners::new(window, canvas, engine.clone())),
            engine,
            frame_loop: Some(frame_loop),
        };
        view.enable()?;
        Ok(view)
    }

    /// Attach the DOM listeners. `Ok(false)` if already enabled or destroyed.
    pub fn enable(&mut self) -> anyhow::Result<bool> {
        if self.engine.borrow().state() == LifecycleState::Destroyed {
            log::warn!("[view] enable after destroy ignored");
            return Ok(false);
        }
        self.bindings.enable()
    }

    /// Detach the DOM listeners. The animation keeps running.
    pub fn disable(&mut self) -> bool {
        self.bindings.disable()
    }

    pub fn is_enabled(&self) -> bool {
        self.bindings.is_enabled()
    }

    /// Disable, stop the frame loop and release the engine's state.
    pub fn destroy(&mut self) {
        self.disable();
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        self.engine.borrow_mut().destroy();
    }
}

impl Drop for ConstellationView {
    fn drop(&mut self) {
        self.destroy();
    }
}

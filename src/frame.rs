use crate::Engine;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
struct PendingIds {
    timeout: Option<i32>,
    frame: Option<i32>,
}

struct Shared {
    engine: Rc<RefCell<Engine>>,
    interval_ms: i32,
    pending: RefCell<PendingIds>,
    on_timeout: RefCell<Option<Closure<dyn FnMut()>>>,
    on_frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Shared {
    fn arm_timeout(&self) {
        let Some(w) = web::window() else { return };
        let cb = self.on_timeout.borrow();
        let Some(cb) = cb.as_ref() else { return };
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref::<js_sys::Function>(),
            self.interval_ms,
        ) {
            Ok(id) => self.pending.borrow_mut().timeout = Some(id),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    }

    fn request_frame(&self) {
        let Some(w) = web::window() else { return };
        let cb = self.on_frame.borrow();
        let Some(cb) = cb.as_ref() else { return };
        match w.request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>()) {
            Ok(id) => self.pending.borrow_mut().frame = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn run_frame(&self) {
        let now = instant::now();
        let stats = self.engine.borrow_mut().tick(now);
        match stats {
            Some(s) => log::trace!(
                "[frame] dots={} links={} culled={} respawned={}",
                s.dots,
                s.connections,
                s.culled,
                s.respawned
            ),
            // engine is no longer running; stop re-arming
            None => return,
        }
        let pacer = self.engine.borrow().pacer().clone();
        if pacer.frames() % 600 == 0 {
            log::debug!("[frame] {:.1} fps measured", pacer.measured_fps());
        }
        self.arm_timeout();
    }
}

/// Self-rescheduling render loop: a `setTimeout` of one frame interval whose
/// callback requests an animation frame that runs the engine tick.
///
/// The loop keeps the ids of whatever is pending so [`FrameLoop::cancel`]
/// can clear them before the closures are dropped.
pub struct FrameLoop {
    shared: Rc<Shared>,
}

impl FrameLoop {
    pub fn start(engine: Rc<RefCell<Engine>>, interval_ms: f64) -> Self {
        let shared = Rc::new(Shared {
            engine,
            interval_ms: interval_ms.round().max(0.0) as i32,
            pending: RefCell::new(PendingIds::default()),
            on_timeout: RefCell::new(None),
            on_frame: RefCell::new(None),
        });

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        *shared.on_timeout.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(s) = weak.upgrade() {
                s.pending.borrow_mut().timeout = None;
                s.request_frame();
            }
        }) as Box<dyn FnMut()>));

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        *shared.on_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(s) = weak.upgrade() {
                s.pending.borrow_mut().frame = None;
                s.run_frame();
            }
        }) as Box<dyn FnMut()>));

        shared.arm_timeout();
        log::info!("[frame] loop started ({} ms interval)", shared.interval_ms);
        Self { shared }
    }

    /// Clear any pending timeout or animation frame and release the callbacks.
    pub fn cancel(&self) {
        let pending = std::mem::take(&mut *self.shared.pending.borrow_mut());
        if let Some(w) = web::window() {
            if let Some(id) = pending.timeout {
                w.clear_timeout_with_handle(id);
            }
            if let Some(id) = pending.frame {
                _ = w.cancel_animation_frame(id);
            }
        }
        let had_callbacks = self.shared.on_timeout.borrow_mut().take().is_some();
        self.shared.on_frame.borrow_mut().take();
        if had_callbacks {
            log::info!("[frame] loop cancelled");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

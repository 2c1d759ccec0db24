use crate::Engine;
use constellation_core::ListenerHost;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window `resize` plus canvas `mousemove` / `mouseleave`, forwarded to the engine.
pub struct DomListeners {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    engine: Rc<RefCell<Engine>>,
}

/// The closures one `attach` installed. Detaching removes exactly these.
pub struct DomRegistration {
    resize: Closure<dyn FnMut()>,
    mouse_move: Closure<dyn FnMut(web::MouseEvent)>,
    mouse_leave: Closure<dyn FnMut()>,
}

impl DomListeners {
    pub fn new(
        window: web::Window,
        canvas: web::HtmlCanvasElement,
        engine: Rc<RefCell<Engine>>,
    ) -> Self {
        Self {
            window,
            canvas,
            engine,
        }
    }

    fn install(&self, reg: &DomRegistration) -> anyhow::Result<()> {
        self.window
            .add_event_listener_with_callback("resize", reg.resize.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("resize listener: {:?}", e))?;
        self.canvas
            .add_event_listener_with_callback("mousemove", reg.mouse_move.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("mousemove listener: {:?}", e))?;
        self.canvas
            .add_event_listener_with_callback(
                "mouseleave",
                reg.mouse_leave.as_ref().unchecked_ref(),
            )
            .map_err(|e| anyhow::anyhow!("mouseleave listener: {:?}", e))?;
        Ok(())
    }

    fn remove(&self, reg: &DomRegistration) {
        let results = [
            self.window
                .remove_event_listener_with_callback("resize", reg.resize.as_ref().unchecked_ref()),
            self.canvas.remove_event_listener_with_callback(
                "mousemove",
                reg.mouse_move.as_ref().unchecked_ref(),
            ),
            self.canvas.remove_event_listener_with_callback(
                "mouseleave",
                reg.mouse_leave.as_ref().unchecked_ref(),
            ),
        ];
        for r in results {
            if let Err(e) = r {
                log::warn!("removeEventListener failed: {:?}", e);
            }
        }
    }
}

impl ListenerHost for DomListeners {
    type Registration = DomRegistration;
    type Error = anyhow::Error;

    fn attach(&mut self) -> anyhow::Result<DomRegistration> {
        let engine = self.engine.clone();
        let resize = Closure::wrap(Box::new(move || {
            engine.borrow_mut().on_resize();
        }) as Box<dyn FnMut()>);

        let engine = self.engine.clone();
        let window = self.window.clone();
        let mouse_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            engine
                .borrow_mut()
                .on_pointer_move(ev.client_x() as f64, ev.client_y() as f64, scroll_y);
        }) as Box<dyn FnMut(_)>);

        let engine = self.engine.clone();
        let mouse_leave = Closure::wrap(Box::new(move || {
            engine.borrow_mut().on_pointer_leave();
        }) as Box<dyn FnMut()>);

        let reg = DomRegistration {
            resize,
            mouse_move,
            mouse_leave,
        };
        if let Err(e) = self.install(&reg) {
            // undo the listeners that did get added before the closures drop
            self.remove(&reg);
            return Err(e);
        }
        log::debug!("[events] listeners attached");
        Ok(reg)
    }

    fn detach(&mut self, reg: DomRegistration) {
        self.remove(&reg);
        log::debug!("[events] listeners detached");
    }
}

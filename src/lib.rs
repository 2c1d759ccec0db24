#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod canvas;
mod dom;
mod events;
mod frame;
mod overrides;
mod view;

pub(crate) type Engine = constellation_core::Constellation<canvas::WebSurface>;

use view::ConstellationView;

thread_local! {
    // lives for the page unless JS calls `destroy`
    static VIEW: RefCell<Option<ConstellationView>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("constellation-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, dom::CANVAS_ID)?;
    let cfg = dom::config_for(&canvas);
    let view = ConstellationView::initialize(canvas, cfg)?;
    VIEW.with(|v| *v.borrow_mut() = Some(view));
    Ok(())
}

/// JavaScript handle on the running constellation.
#[wasm_bindgen]
pub struct ConstellationHandle {
    _private: (),
}

#[wasm_bindgen]
impl ConstellationHandle {
    /// Re-attach the resize and pointer listeners.
    pub fn enable(&self) -> Result<bool, JsValue> {
        VIEW.with(|v| match v.borrow_mut().as_mut() {
            Some(view) => view
                .enable()
                .map_err(|e| JsValue::from_str(&format!("{:?}", e))),
            None => Ok(false),
        })
    }

    /// Detach the listeners; the animation keeps drawing.
    pub fn disable(&self) -> bool {
        VIEW.with(|v| v.borrow_mut().as_mut().map_or(false, |view| view.disable()))
    }

    #[wasm_bindgen(js_name = isEnabled)]
    pub fn is_enabled(&self) -> bool {
        VIEW.with(|v| v.borrow().as_ref().map_or(false, |view| view.is_enabled()))
    }

    /// Tear the constellation down for good.
    pub fn destroy(&self) {
        let view = VIEW.with(|v| v.borrow_mut().take());
        if let Some(mut view) = view {
            view.destroy();
        }
    }
}

#[wasm_bindgen]
pub fn constellation() -> ConstellationHandle {
    ConstellationHandle { _private: () }
}

use crate::overrides::{self, Overrides};
use constellation_core::ConstellationConfig;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "constellation";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Blocking notice for the user.
#[inline]
pub fn alert(window: &web::Window, message: &str) {
    if let Err(e) = window.alert_with_message(message) {
        log::error!("alert failed: {:?}", e);
    }
}

/// Stock configuration adjusted by the canvas's `data-*` attributes.
pub fn config_for(canvas: &web::HtmlCanvasElement) -> ConstellationConfig {
    let dots = canvas.get_attribute(overrides::DOTS_ATTR);
    let seed = canvas.get_attribute(overrides::SEED_ATTR);
    let strategy = canvas.get_attribute(overrides::STRATEGY_ATTR);
    overrides::apply_overrides(
        ConstellationConfig::default(),
        &Overrides {
            dots: dots.as_deref(),
            seed: seed.as_deref(),
            strategy: strategy.as_deref(),
        },
    )
}

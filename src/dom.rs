use crate::constants::*;
use crate::style;
use fx_core::{EngineConfig, CONFIG_KEYS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS px.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Append the full-viewport particle canvas to `body`.
pub fn create_particle_canvas(
    document: &web::Document,
    body: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(PARTICLE_CANVAS_ID);
    let css = canvas.style();
    for (name, value) in PARTICLE_CANVAS_STYLE {
        _ = css.set_property(name, value);
    }
    _ = css.set_property("z-index", &PARTICLE_CANVAS_Z_INDEX.to_string());
    body.append_child(&canvas).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Engine config from `<body data-fx-*>` overrides; defaults on any error.
pub fn read_config(body: &web::HtmlElement) -> EngineConfig {
    let pairs: Vec<(&str, String)> = CONFIG_KEYS
        .iter()
        .filter_map(|key| {
            body.get_attribute(&style::config_attr(CONFIG_ATTR_PREFIX, key))
                .map(|v| (*key, v))
        })
        .collect();
    match EngineConfig::from_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str()))) {
        Ok(cfg) => {
            if !pairs.is_empty() {
                log::info!("[config] {} override(s) applied: {:?}", pairs.len(), cfg);
            }
            cfg
        }
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            EngineConfig::default()
        }
    }
}

/// Run `f` once the DOM is parsed (immediately if it already is).
pub fn on_dom_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let closure = Closure::once(f);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

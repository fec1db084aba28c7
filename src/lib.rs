#![cfg(target_arch = "wasm32")]
use fx_core::{Engine, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod glow;
mod shapes;
mod style;
mod surface;

/// Particle surface, or `None` when canvas/2D context cannot be had; the
/// engine then simulates without drawing.
fn build_surface(
    window: &web::Window,
    document: &web::Document,
    body: &web::HtmlElement,
) -> Option<surface::CanvasSurface> {
    let acquired = dom::create_particle_canvas(document, body)
        .and_then(surface::CanvasSurface::acquire);
    match acquired {
        Ok(mut s) => {
            let (w, h) = dom::viewport_size(window);
            s.resize(w, h);
            log::info!("[particles] surface {}x{}", w, h);
            Some(s)
        }
        Err(e) => {
            log::warn!("[particles] rendering disabled: {:?}", e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-fx starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    dom::on_dom_ready(&document, || {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    // the page may signal readiness more than once
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let config = dom::read_config(&body);
    let shapes = shapes::collect(&document);
    let glow_el = glow::find(&document);
    let surface = build_surface(&window, &document, &body);

    let callback = frame::FrameCallback::default();
    let host = frame::RafHost::new(window.clone(), callback.clone());
    let engine: Rc<RefCell<frame::WebEngine>> = Rc::new(RefCell::new(Engine::new(
        config,
        surface,
        shapes,
        host,
        StdRng::from_entropy(),
    )));
    frame::install_loop(engine.clone(), &callback);

    events::wire_pointer_handlers(events::PointerWiring {
        document: document.clone(),
        engine: engine.clone(),
        glow: glow_el,
    });
    events::wire_viewport_resize(&window, engine.clone());
    events::wire_visibility(&document, engine.clone());

    if document.hidden() {
        log::info!("[engine] page hidden at startup; waiting for visibility");
    } else {
        engine.borrow_mut().start();
    }
    log::info!("ambient-fx ready");
    Ok(())
}

use crate::constants::STATS_INTERVAL_SEC;
use crate::shapes::DomShape;
use crate::surface::CanvasSurface;
use fx_core::{Engine, FrameHost};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebEngine = Engine<CanvasSurface, DomShape, RafHost>;

/// Slot for the frame callback; filled by [`install_loop`] once the engine
/// exists.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` host.
pub struct RafHost {
    window: web::Window,
    callback: FrameCallback,
}

impl RafHost {
    pub fn new(window: web::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameHost for RafHost {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

struct FrameStats {
    since: Instant,
    frames: u32,
}

impl FrameStats {
    fn record(&mut self, engine: &WebEngine) {
        self.frames += 1;
        let elapsed = self.since.elapsed().as_secs_f32();
        if elapsed >= STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, particles={}",
                self.frames as f32 / elapsed,
                engine.particles().len()
            );
            self.since = Instant::now();
            self.frames = 0;
        }
    }
}

/// Install the frame callback. The chain itself starts with
/// `engine.start()`.
pub fn install_loop(engine: Rc<RefCell<WebEngine>>, callback: &FrameCallback) {
    let mut stats = FrameStats {
        since: Instant::now(),
        frames: 0,
    };
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        // shapes drift on the wall clock, not the rAF timestamp
        let now_ms = js_sys::Date::now();
        let mut e = engine.borrow_mut();
        if e.frame(now_ms) {
            stats.record(&e);
        }
    }) as Box<dyn FnMut(f64)>));
}

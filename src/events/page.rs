use crate::constants::SETTLE_TIMER_SLACK_MS;
use crate::dom;
use crate::frame::WebEngine;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot settle timer whose callback can re-arm itself.
#[derive(Clone)]
struct SettleTimer {
    window: web::Window,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl SettleTimer {
    /// Replace any armed timeout with one firing after `delay_ms`.
    fn arm(&self, delay_ms: f64) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        let slot = self.callback.borrow();
        let Some(cb) = slot.as_ref() else {
            return;
        };
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms.ceil() as i32 + SETTLE_TIMER_SLACK_MS,
            ) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => log::warn!("[resize] settle timer error: {:?}", e),
        }
    }
}

/// Resize the particle surface on every `resize`, then re-check once the
/// viewport has settled (trailing debounce).
pub fn wire_viewport_resize(window: &web::Window, engine: Rc<RefCell<WebEngine>>) {
    let wait_ms = engine.borrow().config().resize_debounce_ms;
    let timer = SettleTimer {
        window: window.clone(),
        callback: Rc::new(RefCell::new(None)),
        handle: Rc::new(Cell::new(None)),
    };

    {
        let engine = engine.clone();
        let timer_inner = timer.clone();
        *timer.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            timer_inner.handle.set(None);
            let (w, h) = dom::viewport_size(&timer_inner.window);
            let now = js_sys::Date::now();
            let (settled, remaining) = {
                let mut e = engine.borrow_mut();
                let settled = e.resize_settled(w, h, now);
                (settled, e.settle_remaining_ms(now))
            };
            if settled {
                log::info!("[resize] viewport settled at {}x{}", w, h);
            } else if let Some(remaining) = remaining {
                // fired ahead of the debounce deadline
                timer_inner.arm(remaining);
            }
        }) as Box<dyn FnMut()>));
    }

    let window_for_resize = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let (w, h) = dom::viewport_size(&window_for_resize);
        engine.borrow_mut().resize(w, h, js_sys::Date::now());
        timer.arm(wait_ms);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

/// Hidden pages stop the frame chain; visible pages restart it.
pub fn wire_visibility(document: &web::Document, engine: Rc<RefCell<WebEngine>>) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        engine.borrow_mut().set_visible(!doc.hidden());
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

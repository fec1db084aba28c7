use crate::constants::PRESS_END_EVENTS;
use crate::frame::WebEngine;
use crate::glow;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub engine: Rc<RefCell<WebEngine>>,
    pub glow: Option<web::HtmlElement>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_press_end(&w);
    wire_pointerleave(&w);
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn listen(target: &web::EventTarget, kind: &str, handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let engine = w.engine.clone();
    listen(&w.document, "pointerdown", move |ev| {
        engine.borrow_mut().pointer_down(client_pos(&ev));
    });
}

fn wire_pointermove(w: &PointerWiring) {
    let engine = w.engine.clone();
    let glow_el = w.glow.clone();
    listen(&w.document, "pointermove", move |ev| {
        let placement = engine
            .borrow_mut()
            .pointer_move(client_pos(&ev), js_sys::Date::now());
        if let (Some(el), Some(p)) = (&glow_el, placement) {
            glow::apply(el, p);
        }
    });
}

fn wire_press_end(w: &PointerWiring) {
    for kind in PRESS_END_EVENTS {
        let engine = w.engine.clone();
        listen(&w.document, kind, move |_ev| {
            engine.borrow_mut().pointer_up();
        });
    }
}

// `document` itself never fires leave events; its root element does.
fn wire_pointerleave(w: &PointerWiring) {
    let Some(root) = w.document.document_element() else {
        return;
    };
    let engine = w.engine.clone();
    let glow_el = w.glow.clone();
    listen(&root, "pointerleave", move |_ev| {
        let placement = engine.borrow_mut().pointer_leave();
        if let Some(el) = &glow_el {
            glow::apply(el, placement);
        }
    });
}

use crate::constants::GLOW_ELEMENT_ID;
use crate::style;
use fx_core::GlowPlacement;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn find(document: &web::Document) -> Option<web::HtmlElement> {
    let el = document
        .get_element_by_id(GLOW_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if el.is_none() {
        log::warn!("[glow] #{} missing; glow disabled", GLOW_ELEMENT_ID);
    }
    el
}

/// Leaving only toggles opacity; the last position is kept.
pub fn apply(el: &web::HtmlElement, placement: GlowPlacement) {
    let css = el.style();
    if placement.visible {
        _ = css.set_property("left", &style::px(placement.left));
        _ = css.set_property("top", &style::px(placement.top));
    }
    _ = css.set_property("opacity", style::opacity(placement.visible));
}

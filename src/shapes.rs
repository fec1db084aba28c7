use crate::constants::SHAPE_SELECTOR;
use crate::style;
use fx_core::{parse_css_number, ShapeElement};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `.shape` element; base position comes from its inline `left`/`top`.
pub struct DomShape(web::HtmlElement);

impl ShapeElement for DomShape {
    fn speed_attr(&self) -> Option<String> {
        self.0.dataset().get("speed")
    }

    fn base_position(&self) -> Vec2 {
        let css = self.0.style();
        let coord = |prop: &str| {
            css.get_property_value(prop)
                .ok()
                .and_then(|v| parse_css_number(&v))
                .unwrap_or(0.0)
        };
        Vec2::new(coord("left"), coord("top"))
    }

    fn apply_offset(&self, offset: Vec2) {
        _ = self
            .0
            .style()
            .set_property("transform", &style::translate(offset));
    }
}

/// All decorative shapes currently in the document, in document order.
pub fn collect(document: &web::Document) -> Vec<DomShape> {
    let list = match document.query_selector_all(SHAPE_SELECTOR) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("[shapes] query failed: {:?}", e);
            return Vec::new();
        }
    };
    let shapes: Vec<DomShape> = (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .map(DomShape)
        .collect();
    if shapes.is_empty() {
        log::warn!("[shapes] no {} elements; ambient layer is inert", SHAPE_SELECTOR);
    }
    shapes
}

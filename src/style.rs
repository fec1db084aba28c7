use glam::Vec2;

/// CSS `transform` value for an ambient shape offset.
#[inline]
pub fn translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}

#[inline]
pub fn opacity(visible: bool) -> &'static str {
    if visible {
        "1"
    } else {
        "0"
    }
}

/// Name of the body attribute carrying a config override.
#[inline]
pub fn config_attr(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key)
}

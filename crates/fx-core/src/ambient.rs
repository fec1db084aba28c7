use crate::config::parse_css_number;
use crate::constants::*;
use glam::Vec2;

/// A decorative element the ambient layer drifts around.
pub trait ShapeElement {
    /// Raw `speed` attribute, if the element carries one.
    fn speed_attr(&self) -> Option<String>;
    /// Authored layout position in px.
    fn base_position(&self) -> Vec2;
    /// Apply a translate on top of the element's own position.
    fn apply_offset(&self, offset: Vec2);
}

#[derive(Clone, Debug)]
pub struct AmbientShape<E> {
    element: E,
    base: Vec2,
    speed: f32,
    offset: Vec2,
}

impl<E> AmbientShape<E> {
    pub fn base(&self) -> Vec2 {
        self.base
    }
    pub fn speed(&self) -> f32 {
        self.speed
    }
    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}

/// Parse a shape speed, falling back to [`DEFAULT_SHAPE_SPEED`].
pub fn parse_speed(raw: Option<&str>) -> f32 {
    raw.and_then(parse_css_number).unwrap_or(DEFAULT_SHAPE_SPEED)
}

/// Drift offset of a shape at `now_sec` (wall-clock seconds).
#[inline]
pub fn drift_offset(now_sec: f64, speed: f32) -> Vec2 {
    let phase = now_sec * speed as f64;
    Vec2::new(
        (phase.sin() * SHAPE_AMPLITUDE_X as f64) as f32,
        ((phase * SHAPE_Y_FREQUENCY_RATIO as f64).cos() * SHAPE_AMPLITUDE_Y as f64) as f32,
    )
}

/// Background shapes whose offsets are a pure function of the wall clock.
pub struct AmbientLayer<E: ShapeElement> {
    shapes: Vec<AmbientShape<E>>,
}

impl<E: ShapeElement> AmbientLayer<E> {
    pub fn initialize<I: IntoIterator<Item = E>>(elements: I) -> Self {
        let shapes = elements
            .into_iter()
            .map(|element| {
                let speed = parse_speed(element.speed_attr().as_deref());
                let base = element.base_position();
                AmbientShape {
                    element,
                    base,
                    speed,
                    offset: Vec2::ZERO,
                }
            })
            .collect();
        Self { shapes }
    }

    /// Recompute and apply every shape's offset for `now_sec`.
    pub fn tick(&mut self, now_sec: f64) {
        for shape in &mut self.shapes {
            shape.offset = drift_offset(now_sec, shape.speed);
            shape.element.apply_offset(shape.offset);
        }
    }

    pub fn shapes(&self) -> &[AmbientShape<E>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

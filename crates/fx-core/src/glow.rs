use crate::throttle::LeadingThrottle;
use glam::Vec2;

/// Where to put the glow element: top-left corner in px plus visibility.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPlacement {
    pub left: f32,
    pub top: f32,
    pub visible: bool,
}

/// Pointer-following glow state. Moves are leading-edge throttled; leaving
/// is applied immediately.
#[derive(Clone, Debug)]
pub struct PointerGlow {
    position: Vec2,
    visible: bool,
    diameter: f32,
    throttle: LeadingThrottle,
}

impl PointerGlow {
    pub fn new(diameter: f32, throttle_ms: f64) -> Self {
        Self {
            position: Vec2::ZERO,
            visible: false,
            diameter,
            throttle: LeadingThrottle::new(throttle_ms),
        }
    }

    /// Track a pointer move at `now_ms`. Returns the placement to apply, or
    /// `None` if the move was throttled away.
    pub fn on_pointer_move(&mut self, pos: Vec2, now_ms: f64) -> Option<GlowPlacement> {
        if !self.throttle.try_fire(now_ms) {
            return None;
        }
        self.position = pos;
        self.visible = true;
        Some(self.placement())
    }

    pub fn on_pointer_leave(&mut self) -> GlowPlacement {
        self.visible = false;
        self.placement()
    }

    /// Top-left so the glow's center sits on the pointer.
    pub fn placement(&self) -> GlowPlacement {
        let half = self.diameter * 0.5;
        GlowPlacement {
            left: self.position.x - half,
            top: self.position.y - half,
            visible: self.visible,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

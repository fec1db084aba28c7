use crate::particles::ParticleLayer;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// Turns pointer press/move/release and viewport resizes into particle-layer
/// calls.
#[derive(Clone, Debug)]
pub struct InputDispatcher {
    pressed: bool,
    burst_count: usize,
    drag_count: usize,
}

impl InputDispatcher {
    pub fn new(burst_count: usize, drag_count: usize) -> Self {
        Self {
            pressed: false,
            burst_count,
            drag_count,
        }
    }

    pub fn pointer_down<S: Surface, R: Rng + ?Sized>(
        &mut self,
        pos: Vec2,
        layer: &mut ParticleLayer<S>,
        rng: &mut R,
    ) {
        self.pressed = true;
        layer.spawn(rng, pos, self.burst_count);
    }

    /// Spawns on every move while pressed. Not rate-limited: spawning
    /// follows the native move-event cadence.
    pub fn pointer_move<S: Surface, R: Rng + ?Sized>(
        &mut self,
        pos: Vec2,
        layer: &mut ParticleLayer<S>,
        rng: &mut R,
    ) {
        if self.pressed {
            layer.spawn(rng, pos, self.drag_count);
        }
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    pub fn resize<S: Surface>(&mut self, width: u32, height: u32, layer: &mut ParticleLayer<S>) {
        layer.resize(width, height);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

//! The owned animation context tying every layer to one scheduler.

use crate::ambient::{AmbientLayer, ShapeElement};
use crate::config::EngineConfig;
use crate::glow::{GlowPlacement, PointerGlow};
use crate::input::InputDispatcher;
use crate::particles::ParticleLayer;
use crate::scheduler::{FrameHost, FrameScheduler};
use crate::surface::Surface;
use crate::throttle::Debounce;
use glam::Vec2;
use rand::rngs::StdRng;

/// Particles, ambient shapes, pointer glow, input and the frame scheduler.
///
/// All timestamps are wall-clock milliseconds (`Date.now()` in the browser).
pub struct Engine<S: Surface, E: ShapeElement, H: FrameHost> {
    config: EngineConfig,
    particles: ParticleLayer<S>,
    ambient: AmbientLayer<E>,
    glow: PointerGlow,
    input: InputDispatcher,
    scheduler: FrameScheduler<H>,
    resize_settle: Debounce,
    rng: StdRng,
}

impl<S: Surface, E: ShapeElement, H: FrameHost> Engine<S, E, H> {
    pub fn new<I>(
        config: EngineConfig,
        surface: Option<S>,
        shapes: I,
        host: H,
        rng: StdRng,
    ) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let ambient = AmbientLayer::initialize(shapes);
        let glow = PointerGlow::new(config.glow_diameter, config.glow_throttle_ms);
        let input = InputDispatcher::new(config.burst_count, config.drag_count);
        let particles = ParticleLayer::new(surface, config.max_particles);
        log::info!(
            "[engine] shapes={} surface={} max_particles={:?}",
            ambient.len(),
            particles.has_surface(),
            config.max_particles
        );
        Self {
            resize_settle: Debounce::new(config.resize_debounce_ms),
            config,
            particles,
            ambient,
            glow,
            input,
            scheduler: FrameScheduler::new(host),
            rng,
        }
    }

    pub fn start(&mut self) {
        self.scheduler.start();
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Page visibility changed: hidden stops the frame chain, visible
    /// restarts it.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            log::info!("[engine] page visible; resuming");
            self.start();
        } else {
            log::info!("[engine] page hidden; pausing");
            self.stop();
        }
    }

    /// Frame callback. Runs particle update, particle render, then the
    /// ambient tick, and reschedules. Returns whether a pass ran.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.scheduler.begin_frame() {
            return false;
        }
        self.particles.tick();
        self.particles.render();
        self.ambient.tick(now_ms * 0.001);
        self.scheduler.end_frame();
        true
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.input.pointer_down(pos, &mut self.particles, &mut self.rng);
    }

    /// Pointer moved: drag-spawns when pressed and returns a glow placement
    /// when the throttle lets the move through.
    pub fn pointer_move(&mut self, pos: Vec2, now_ms: f64) -> Option<GlowPlacement> {
        self.input.pointer_move(pos, &mut self.particles, &mut self.rng);
        self.glow.on_pointer_move(pos, now_ms)
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_up();
    }

    pub fn pointer_leave(&mut self) -> GlowPlacement {
        self.glow.on_pointer_leave()
    }

    /// Viewport resized: the surface follows immediately and the settle
    /// debounce is re-armed. Returns the settle deadline in ms.
    pub fn resize(&mut self, width: u32, height: u32, now_ms: f64) -> f64 {
        self.input.resize(width, height, &mut self.particles);
        self.resize_settle.call(now_ms)
    }

    /// Settle check after resizing stopped. When due, re-syncs the surface to
    /// `width`x`height` if it drifted and returns `true`.
    pub fn resize_settled(&mut self, width: u32, height: u32, now_ms: f64) -> bool {
        if !self.resize_settle.poll(now_ms) {
            return false;
        }
        let drifted = self
            .particles
            .surface()
            .is_some_and(|s| s.width() != width || s.height() != height);
        if drifted {
            self.particles.resize(width, height);
        }
        log::debug!(
            "[engine] viewport settled at {}x{} (resynced={})",
            width,
            height,
            drifted
        );
        true
    }

    /// Time left before a pending settle check is due. A timer that fired
    /// early uses this to re-arm.
    pub fn settle_remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.resize_settle.remaining_ms(now_ms)
    }

    /// Stop the frame chain and drop all live particles.
    pub fn teardown(&mut self) {
        self.stop();
        self.particles.clear();
        self.resize_settle.cancel();
        log::info!("[engine] torn down");
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
    pub fn particles(&self) -> &ParticleLayer<S> {
        &self.particles
    }
    pub fn ambient(&self) -> &AmbientLayer<E> {
        &self.ambient
    }
    pub fn glow(&self) -> &PointerGlow {
        &self.glow
    }
    pub fn input(&self) -> &InputDispatcher {
        &self.input
    }
    pub fn scheduler(&self) -> &FrameScheduler<H> {
        &self.scheduler
    }
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }
}

//! The click/drag particle layer.

use crate::particle::Particle;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// Owns the live particles and the surface they are drawn on.
///
/// The surface is optional: when the 2D context could not be acquired the
/// layer keeps simulating but `render` does nothing.
pub struct ParticleLayer<S: Surface> {
    particles: Vec<Particle>,
    surface: Option<S>,
    max_particles: Option<usize>,
}

impl<S: Surface> ParticleLayer<S> {
    pub fn new(surface: Option<S>, max_particles: Option<usize>) -> Self {
        Self {
            particles: Vec::new(),
            surface,
            max_particles,
        }
    }

    /// Append `count` randomized particles at `origin`.
    ///
    /// With a cap configured, only as many as fit are appended.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, origin: Vec2, count: usize) {
        let count = match self.max_particles {
            Some(max) => count.min(max.saturating_sub(self.particles.len())),
            None => count,
        };
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, origin));
        }
    }

    /// Insert an already-built particle, honoring the cap.
    pub fn push(&mut self, particle: Particle) -> bool {
        if self
            .max_particles
            .is_some_and(|max| self.particles.len() >= max)
        {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Step every particle once, then drop the dead ones. Survivors keep
    /// their relative order.
    pub fn tick(&mut self) {
        self.particles.retain_mut(|p| {
            p.step();
            p.is_alive()
        });
    }

    /// Clear the surface and draw every live particle, oldest first.
    pub fn render(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.clear();
        for p in &self.particles {
            surface.fill_circle(p.position.x, p.position.y, p.radius(), p.color(), p.life());
        }
    }

    /// Resize the surface. Live particles are untouched and keep their
    /// coordinates, even if those are now off-screen.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn max_particles(&self) -> Option<usize> {
        self.max_particles
    }
}

use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Rgb(rng.gen(), rng.gen(), rng.gen())
    }

    /// CSS `rgba()` string with the given alpha.
    pub fn css_rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// A single ephemeral particle.
///
/// Radius, color and decay are fixed at creation and only readable afterwards;
/// `step` is the only mutation. Life is derived from the frame count in closed
/// form, `max(0, 1 - age * decay)`, so rounding never accumulates across frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
    color: Rgb,
    age: u32,
    life: f32,
    decay: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Rgb, decay: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
            age: 0,
            life: PARTICLE_INITIAL_LIFE,
            decay,
        }
    }

    /// Particle at `origin` with size, velocity, color and decay drawn from
    /// the spawn ranges.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, origin: Vec2) -> Self {
        let radius = rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX);
        let velocity = Vec2::new(
            rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
            rng.gen_range(-PARTICLE_SPEED_MAX..PARTICLE_SPEED_MAX),
        );
        let color = Rgb::random(rng);
        let decay = rng.gen_range(PARTICLE_DECAY_MIN..PARTICLE_DECAY_MAX);
        Self::new(origin, velocity, radius, color, decay)
    }

    /// Advance one frame: move by velocity, lose `decay` life (floored at 0).
    #[inline]
    pub fn step(&mut self) {
        self.position += self.velocity;
        self.age = self.age.saturating_add(1);
        // n * decay is exact in f64 for an f32 decay, and so is the difference
        let remaining = PARTICLE_INITIAL_LIFE as f64 - self.age as f64 * self.decay as f64;
        self.life = remaining.max(0.0) as f32;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
    pub fn life(&self) -> f32 {
        self.life
    }
    pub fn decay(&self) -> f32 {
        self.decay
    }
    /// Frames stepped since creation.
    pub fn age(&self) -> u32 {
        self.age
    }
}

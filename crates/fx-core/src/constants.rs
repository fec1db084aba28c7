// Shared animation tuning constants used by the engine and the web frontend.

// Particle spawn ranges (half-open)
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_MAX: f32 = 2.5;
pub const PARTICLE_SPEED_MAX: f32 = 1.0; // px/frame, per axis, symmetric around 0
pub const PARTICLE_DECAY_MIN: f32 = 0.01; // life lost per frame
pub const PARTICLE_DECAY_MAX: f32 = 0.03;
pub const PARTICLE_INITIAL_LIFE: f32 = 1.0;

// Input-driven spawn counts
pub const BURST_COUNT: usize = 5; // on pointer-down
pub const DRAG_COUNT: usize = 2; // per pointer-move while pressed

// Ambient shape drift
pub const DEFAULT_SHAPE_SPEED: f32 = 0.5;
pub const SHAPE_AMPLITUDE_X: f32 = 20.0; // px
pub const SHAPE_AMPLITUDE_Y: f32 = 15.0; // px
pub const SHAPE_Y_FREQUENCY_RATIO: f32 = 0.7;

// Pointer glow
pub const GLOW_DIAMETER: f32 = 300.0; // px
pub const GLOW_THROTTLE_MS: f64 = 16.0; // one frame at 60Hz

// Viewport
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;

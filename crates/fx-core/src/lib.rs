pub mod ambient;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod glow;
pub mod input;
pub mod particle;
pub mod particles;
pub mod scheduler;
pub mod surface;
pub mod throttle;

pub use ambient::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use glow::*;
pub use input::*;
pub use particle::*;
pub use particles::*;
pub use scheduler::*;
pub use surface::*;
pub use throttle::*;

pub mod api;
pub mod audio;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::context::{PointerState, SimContext};
pub use api::driver::{DriverConfig, DriverState, FrameDriver, FrameStats};
pub use api::params::{ForceMode, ParamPatch, SimParams, UnknownMode};
pub use audio::{AudioSource, SpectrumBuffer};
pub use crate::core::particle::{Particle, Trail, TrailPoint};
pub use crate::core::rng::Rng;
pub use crate::core::store::ParticleStore;
pub use crate::core::time::FrameClock;
pub use input::keys::KeyAction;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::{Rgba, RenderSurface};
pub use systems::forces::compute_acceleration;
pub use systems::step_particle;

#[cfg(feature = "vectors")]
pub use renderer::{DrawStats, TextLabel, VectorSurface, VectorVertex};

pub mod color;
pub mod surface;
#[cfg(feature = "vectors")]
pub mod vector;

// Re-export key types for convenient access
pub use color::Rgba;
pub use surface::RenderSurface;
#[cfg(feature = "vectors")]
pub use vector::{DrawStats, TextLabel, VectorSurface, VectorVertex};

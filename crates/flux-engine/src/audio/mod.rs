//! Audio input seen by the engine.
//!
//! The engine never touches an audio device. A host captures analyser data
//! on its own schedule and writes the latest frame into a [`SpectrumBuffer`];
//! the driver polls it once per tick without blocking.

mod spectrum;

pub use spectrum::SpectrumBuffer;

/// A pollable source of spectral magnitudes.
pub trait AudioSource {
    /// Mean spectral magnitude of the latest frame, in [0, 1].
    fn sample_energy(&self) -> f32;

    /// Per-bin magnitudes of the latest frame, low to high, each in [0, 1].
    fn sample_spectrum(&self) -> &[f32];
}

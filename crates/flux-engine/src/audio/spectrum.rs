use super::AudioSource;

/// Latest captured spectrum frame, normalized to [0, 1].
#[derive(Debug, Clone, Default)]
pub struct SpectrumBuffer {
    bins: Vec<f32>,
    energy: f32,
}

impl SpectrumBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the frame with analyser byte data (0-255 per bin).
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.bins.clear();
        self.bins.extend(data.iter().map(|&b| b as f32 / 255.0));
        self.update_energy();
    }

    /// Replace the frame with float magnitudes. Values are clamped to [0, 1];
    /// NaN becomes 0.
    pub fn write_magnitudes(&mut self, data: &[f32]) {
        self.bins.clear();
        // max() first so NaN maps to 0; clamp() would keep it
        self.bins.extend(data.iter().map(|&m| m.max(0.0).min(1.0)));
        self.update_energy();
    }

    pub fn clear(&mut self) {
        self.bins.clear();
        self.energy = 0.0;
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    fn update_energy(&mut self) {
        self.energy = if self.bins.is_empty() {
            0.0
        } else {
            (self.bins.iter().sum::<f32>() / self.bins.len() as f32).clamp(0.0, 1.0)
        };
    }
}

impl AudioSource for SpectrumBuffer {
    fn sample_energy(&self) -> f32 {
        self.energy
    }

    fn sample_spectrum(&self) -> &[f32] {
        &self.bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_normalize_and_average() {
        let mut buf = SpectrumBuffer::new();
        buf.write_bytes(&[0, 255, 255, 0]);
        assert_eq!(buf.sample_spectrum(), &[0.0, 1.0, 1.0, 0.0]);
        assert!((buf.sample_energy() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn magnitudes_are_clamped() {
        let mut buf = SpectrumBuffer::new();
        buf.write_magnitudes(&[2.0, -1.0, f32::NAN, 0.5]);
        assert_eq!(buf.sample_spectrum(), &[1.0, 0.0, 0.0, 0.5]);
        assert!((buf.sample_energy() - 0.375).abs() < 1e-6);
    }

    #[test]
    fn empty_buffer_has_no_energy() {
        let mut buf = SpectrumBuffer::new();
        assert_eq!(buf.sample_energy(), 0.0);
        buf.write_bytes(&[128; 8]);
        buf.clear();
        assert_eq!(buf.sample_energy(), 0.0);
        assert!(buf.is_empty());
    }
}

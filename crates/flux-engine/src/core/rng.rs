//! Seeded xorshift64 source for particle spawning and force noise.

/// Seedable pseudo-random number generator (xorshift64).
///
/// Drives population randomisation and the per-tick noise of the
/// repulsion and chaos force modes. Seeded, so two drivers built from the
/// same config produce identical populations.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a float in [0, 1) using the top 24 bits.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Generate a float in [lo, hi).
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// Centered noise in [-scale / 2, scale / 2).
    pub fn jitter(&mut self, scale: f32) -> f32 {
        (self.next_f32() - 0.5) * scale
    }
}

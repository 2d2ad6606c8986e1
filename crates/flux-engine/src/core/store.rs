use crate::core::particle::Particle;
use crate::core::rng::Rng;

/// Owns the live particle population using a flat Vec.
///
/// The population is only ever replaced wholesale by [`ParticleStore::reset`];
/// particles are never spawned or destroyed between resets. Storage order is
/// stable and is also the draw order.
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self {
            particles: Vec::with_capacity(2048),
        }
    }

    /// Build a store from an explicit population.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Discard the current population and replace it with `count` freshly
    /// randomised particles spread over the viewport.
    pub fn reset(&mut self, count: usize, width: f32, height: f32, rng: &mut Rng) -> &[Particle] {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, width, height));
        }
        &self.particles
    }

    /// Apply `f` to every particle in storage order.
    pub fn for_each<F: FnMut(&mut Particle)>(&mut self, f: F) {
        self.particles.iter_mut().for_each(f);
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn reset_produces_exact_count_within_viewport() {
        let mut store = ParticleStore::new();
        let mut rng = Rng::new(42);
        let particles = store.reset(750, 1024.0, 768.0, &mut rng);
        assert_eq!(particles.len(), 750);
        for p in particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 1024.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 768.0);
        }
    }

    #[test]
    fn reset_discards_previous_population() {
        let mut store = ParticleStore::from_particles(vec![Particle::new(Vec2::new(-5.0, -5.0)); 3]);
        let mut rng = Rng::new(1);
        store.reset(2, 100.0, 100.0, &mut rng);
        assert_eq!(store.len(), 2);
        assert!(store.iter().all(|p| p.pos.x >= 0.0));
    }

    #[test]
    fn for_each_visits_in_storage_order() {
        let mut store = ParticleStore::from_particles(
            (0..5).map(|i| Particle::new(Vec2::new(i as f32, 0.0))).collect(),
        );
        let mut seen = Vec::new();
        store.for_each(|p| {
            seen.push(p.pos.x);
            p.pos.y = 1.0;
        });
        assert_eq!(seen, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert!(store.iter().all(|p| p.pos.y == 1.0));
    }

    #[test]
    fn same_seed_same_population() {
        let mut a = ParticleStore::new();
        let mut b = ParticleStore::new();
        a.reset(50, 800.0, 600.0, &mut Rng::new(9));
        b.reset(50, 800.0, 600.0, &mut Rng::new(9));
        assert_eq!(a.as_slice(), b.as_slice());
    }
}

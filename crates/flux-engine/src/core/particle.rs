//! Particle entity and its bounded position trail.

use std::collections::VecDeque;

use glam::Vec2;

use super::rng::Rng;

/// One recorded trail position with its fading alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Recent positions of a particle, oldest first.
///
/// Holds at most [`Trail::CAPACITY`] points. Every recorded point fades by
/// [`Trail::DECAY`] once per tick, including the tick it was recorded on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
}

impl Trail {
    pub const CAPACITY: usize = 10;
    pub const DECAY: f32 = 0.9;

    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(Self::CAPACITY + 1),
        }
    }

    /// Append `pos` at full alpha, evict the oldest point past capacity,
    /// then decay every surviving point.
    pub fn record(&mut self, pos: Vec2) {
        self.points.push_back(TrailPoint { pos, alpha: 1.0 });
        while self.points.len() > Self::CAPACITY {
            self.points.pop_front();
        }
        for point in self.points.iter_mut() {
            point.alpha *= Self::DECAY;
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// Positions oldest to newest, for polyline drawing.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.pos).collect()
    }
}

/// A point-like simulated entity.
///
/// `acc` is recomputed from zero every tick; `vel` carries over between
/// ticks. `hue` and `brightness` are overwritten from motion every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Always 1.0. Reserved for fade-out.
    pub life: f32,
    /// Always 1.0. Reserved for fade-out.
    pub max_life: f32,
    /// Base radius for the body and trail width.
    pub size: f32,
    /// Degrees, [0, 360).
    pub hue: f32,
    /// Percent lightness, [0, 100].
    pub brightness: f32,
    pub trail: Trail,
}

impl Particle {
    pub const DEFAULT_SIZE: f32 = 2.0;
    pub const MIN_SIZE: f32 = 1.0;
    pub const MAX_SIZE: f32 = 4.0;
    pub const MAX_INITIAL_SPEED: f32 = 1.0;

    /// Create a resting particle at `pos`.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            life: 1.0,
            max_life: 1.0,
            size: Self::DEFAULT_SIZE,
            hue: 0.0,
            brightness: 50.0,
            trail: Trail::new(),
        }
    }

    /// Create a particle uniformly placed over a `width` x `height` viewport
    /// with a small random velocity and random size and colour.
    pub fn random(rng: &mut Rng, width: f32, height: f32) -> Self {
        let pos = Vec2::new(rng.range(0.0, width), rng.range(0.0, height));
        let vel = Vec2::new(
            rng.range(-Self::MAX_INITIAL_SPEED, Self::MAX_INITIAL_SPEED),
            rng.range(-Self::MAX_INITIAL_SPEED, Self::MAX_INITIAL_SPEED),
        );
        Self::new(pos)
            .with_velocity(vel)
            .with_size(rng.range(Self::MIN_SIZE, Self::MAX_SIZE))
            .with_hue(rng.range(0.0, 360.0))
            .with_brightness(rng.range(50.0, 100.0))
    }

    // -- Builder pattern --

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_hue(mut self, hue: f32) -> Self {
        self.hue = hue;
        self
    }

    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

//! Force field: one acceleration law per [`ForceMode`].
//!
//! Each law maps a particle and the tick's [`SimContext`] to an acceleration.
//! Laws are pure apart from the noise drawn by repulsion and chaos. Any
//! contribution whose direction depends on a distance is skipped when that
//! distance is zero, so no law can produce NaN from coincident points.

use glam::Vec2;

use crate::api::context::SimContext;
use crate::api::params::ForceMode;
use crate::core::particle::Particle;
use crate::core::rng::Rng;

const GRAVITY: f32 = 0.1;
const GRAVITY_AUDIO_GAIN: f32 = 0.5;
const GRAVITY_PUSH: f32 = 2.0;
const REPULSION_PUSH: f32 = 3.0;
const VORTEX_SPIN: f32 = 0.5;
const VORTEX_PULL: f32 = 0.1;
const VORTEX_REACH: f32 = 2.0;
const WAVE_AMPLITUDE: f32 = 0.5;
const FLOW_STRENGTH: f32 = 2.0;
const ATTRACTOR_MASS: f32 = 500.0;
const ATTRACTOR_GAIN: f32 = 0.1;
const CHAOS_AMPLITUDE: f32 = 5.0;
const CHAOS_AUDIO_NOISE: f32 = 10.0;
const AURORA_SPRING: f32 = 0.001;
const AURORA_DRIFT: f32 = 0.3;
const AURORA_AUDIO_JITTER: f32 = 2.0;

/// Attractor positions as fractions of the viewport.
pub const ATTRACTORS: [Vec2; 4] = [
    Vec2::new(0.25, 0.5),
    Vec2::new(0.75, 0.5),
    Vec2::new(0.5, 0.25),
    Vec2::new(0.5, 0.75),
];

/// Compute the acceleration acting on `p` this tick.
///
/// `audio` is the frame's spectral energy in [0, 1]. `rng` supplies the
/// per-particle, per-tick noise used by repulsion and chaos.
pub fn compute_acceleration(p: &Particle, ctx: &SimContext, audio: f32, rng: &mut Rng) -> Vec2 {
    match ctx.mode() {
        ForceMode::Gravity => gravity(p, ctx, audio),
        ForceMode::Repulsion => repulsion(p, ctx, rng),
        ForceMode::Vortex => vortex(p, ctx, audio),
        ForceMode::Wave => wave(p, ctx, audio),
        ForceMode::Flow => flow(p, ctx),
        ForceMode::Attractor => attractor(p, ctx),
        ForceMode::Chaos => chaos(p, ctx, audio, rng),
        ForceMode::Aurora => aurora(p, ctx, audio),
    }
}

/// Push directed from `from` toward `p`, fading linearly to zero at `radius`.
fn radial_push(p: Vec2, from: Vec2, radius: f32, strength: f32) -> Vec2 {
    let d = p - from;
    let dist = d.length();
    if dist > 0.0 && dist < radius {
        d / dist * strength * (1.0 - dist / radius)
    } else {
        Vec2::ZERO
    }
}

fn gravity(p: &Particle, ctx: &SimContext, audio: f32) -> Vec2 {
    let mut acc = Vec2::new(0.0, GRAVITY + GRAVITY_AUDIO_GAIN * audio);
    if ctx.pointer.down {
        acc += radial_push(p.pos, ctx.pointer.pos, ctx.params.interaction_radius, GRAVITY_PUSH);
    }
    acc
}

fn repulsion(p: &Particle, ctx: &SimContext, rng: &mut Rng) -> Vec2 {
    let mut acc = radial_push(p.pos, ctx.pointer.pos, ctx.params.interaction_radius, REPULSION_PUSH);
    let turbulence = ctx.params.turbulence;
    acc.x += rng.jitter(turbulence);
    acc.y += rng.jitter(turbulence);
    acc
}

fn vortex(p: &Particle, ctx: &SimContext, audio: f32) -> Vec2 {
    let d = p.pos - ctx.pointer.pos;
    let dist = d.length();
    if dist <= 0.0 || dist >= ctx.params.interaction_radius * VORTEX_REACH {
        return Vec2::ZERO;
    }
    let dir = d / dist;
    // dir rotated by +90 degrees
    let tangent = dir.perp();
    -tangent * (VORTEX_SPIN + audio) - dir * VORTEX_PULL
}

fn wave(p: &Particle, ctx: &SimContext, audio: f32) -> Vec2 {
    let t = ctx.time;
    let mut acc = Vec2::ZERO;
    acc.y += (p.pos.x * 0.01 + t * 0.05).sin() * WAVE_AMPLITUDE;
    acc.x += (p.pos.y * 0.01 + t * 0.03).cos() * WAVE_AMPLITUDE;
    acc.y += audio * (t * 0.1).sin();
    acc
}

fn flow(p: &Particle, ctx: &SimContext) -> Vec2 {
    let t = ctx.time;
    let Vec2 { x, y } = p.pos;
    let fx = (y * 0.01 + (x * 0.007 + t * 0.02).cos()).sin() * (x * 0.005 - t * 0.01).cos();
    let fy = (x * 0.01 + (y * 0.008 - t * 0.015).sin()).cos() * (y * 0.004 + t * 0.012).sin();
    Vec2::new(fx, fy) * FLOW_STRENGTH
}

fn attractor(p: &Particle, ctx: &SimContext) -> Vec2 {
    ATTRACTORS
        .iter()
        .map(|frac| *frac * ctx.viewport)
        .fold(Vec2::ZERO, |acc, target| {
            let d = target - p.pos;
            let dist = d.length();
            if dist > 0.0 {
                acc + d / dist * (ATTRACTOR_MASS / dist) * ATTRACTOR_GAIN
            } else {
                acc
            }
        })
}

fn chaos(p: &Particle, ctx: &SimContext, audio: f32, rng: &mut Rng) -> Vec2 {
    let t = ctx.time;
    let noise = audio * CHAOS_AUDIO_NOISE;
    Vec2::new(
        (0.1 * t + 0.01 * p.pos.x).sin() * CHAOS_AMPLITUDE + rng.jitter(noise),
        (0.15 * t + 0.01 * p.pos.y).cos() * CHAOS_AMPLITUDE + rng.jitter(noise),
    )
}

/// Height of the aurora ribbon at horizontal position `x`.
pub fn aurora_ribbon(x: f32, time: f32, height: f32) -> f32 {
    (x * 0.003 + time * 0.02).sin() * 100.0 + 0.3 * height
}

fn aurora(p: &Particle, ctx: &SimContext, audio: f32) -> Vec2 {
    let t = ctx.time;
    let ribbon = aurora_ribbon(p.pos.x, t, ctx.viewport.y);
    let ay = -AURORA_SPRING * (p.pos.y - ribbon);
    let ax = (p.pos.y * 0.005 + t * 0.03).cos() * AURORA_DRIFT
        + audio * AURORA_AUDIO_JITTER * (0.05 * t + 0.002 * p.pos.x).sin();
    Vec2::new(ax, ay)
}

pub mod appearance;
pub mod forces;
pub mod integrate;
pub mod render;

use crate::api::context::SimContext;
use crate::core::particle::Particle;
use crate::core::rng::Rng;
use appearance::AppearanceInputs;

/// Run one particle through force, integration and appearance for a tick.
pub fn step_particle(p: &mut Particle, ctx: &SimContext, audio: f32, rng: &mut Rng) {
    let acc = forces::compute_acceleration(p, ctx, audio, rng);
    integrate::integrate(p, acc, ctx.viewport);
    appearance::update_appearance(
        p,
        &AppearanceInputs {
            trails_enabled: ctx.params.trails_enabled,
            color_shift: ctx.params.color_shift,
            time: ctx.time,
            audio,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::context::PointerState;
    use crate::api::params::{ForceMode, SimParams};
    use crate::core::particle::Trail;
    use glam::Vec2;

    fn calm_params(mode: ForceMode) -> SimParams {
        SimParams { mode, turbulence: 0.0, ..SimParams::default() }
    }

    #[test]
    fn gravity_single_step_from_rest() {
        let ctx = SimContext::new(Vec2::new(800.0, 600.0), calm_params(ForceMode::Gravity));
        let mut p = Particle::new(Vec2::new(100.0, 100.0));
        step_particle(&mut p, &ctx, 0.0, &mut Rng::new(1));
        assert!((p.acc.y - 0.1).abs() < 1e-6);
        assert!((p.vel.y - 0.1).abs() < 1e-6);
        assert!((p.pos.y - 100.1).abs() < 1e-4);
        assert_eq!(p.pos.x, 100.0);
    }

    #[test]
    fn wave_trajectories_are_bit_identical() {
        let ctx = SimContext::new(Vec2::new(800.0, 600.0), calm_params(ForceMode::Wave));
        let run = || {
            let mut p = Particle::new(Vec2::new(123.0, 456.0)).with_velocity(Vec2::new(0.3, -0.2));
            let mut rng = Rng::new(77);
            let mut path = Vec::new();
            let mut c = ctx.with_time(1.5);
            for _ in 0..300 {
                c.time += 0.016;
                step_particle(&mut p, &c, 0.0, &mut rng);
                path.push((p.pos.x.to_bits(), p.pos.y.to_bits()));
            }
            path
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn every_mode_keeps_particles_in_bounds() {
        let viewport = Vec2::new(320.0, 240.0);
        for mode in ForceMode::ALL {
            let pointer = PointerState { pos: Vec2::new(160.0, 120.0), down: true, velocity: Vec2::ZERO };
            let mut ctx = SimContext::new(viewport, SimParams { mode, ..SimParams::default() })
                .with_pointer(pointer);
            let mut rng = Rng::new(5);
            let mut particles: Vec<Particle> =
                (0..100).map(|_| Particle::random(&mut rng, viewport.x, viewport.y)).collect();
            for _ in 0..200 {
                ctx.time += 0.016;
                for p in particles.iter_mut() {
                    step_particle(p, &ctx, 0.7, &mut rng);
                    assert!(p.pos.x >= 0.0 && p.pos.x <= viewport.x, "{}: x={}", mode, p.pos.x);
                    assert!(p.pos.y >= 0.0 && p.pos.y <= viewport.y, "{}: y={}", mode, p.pos.y);
                    assert!(p.trail.len() <= Trail::CAPACITY);
                }
            }
        }
    }
}

use glam::Vec2;

use crate::core::particle::Particle;

/// Velocity multiplier applied once per tick before acceleration.
pub const FRICTION: f32 = 0.99;
/// Velocity multiplier on the bounced axis when a particle hits an edge.
pub const BOUNCE: f32 = -0.5;

/// Advance one particle by one tick.
///
/// Order: damp velocity, add `acc`, move, then reflect off the viewport
/// edges. Each axis is clamped and bounced independently.
pub fn integrate(p: &mut Particle, acc: Vec2, viewport: Vec2) {
    p.acc = acc;
    p.vel *= FRICTION;
    p.vel += acc;
    p.pos += p.vel;

    if p.pos.x < 0.0 {
        p.pos.x = 0.0;
        p.vel.x *= BOUNCE;
    } else if p.pos.x > viewport.x {
        p.pos.x = viewport.x;
        p.vel.x *= BOUNCE;
    }

    if p.pos.y < 0.0 {
        p.pos.y = 0.0;
        p.vel.y *= BOUNCE;
    } else if p.pos.y > viewport.y {
        p.pos.y = viewport.y;
        p.vel.y *= BOUNCE;
    }
}

use crate::core::particle::Particle;

/// Inputs shared by every particle's appearance update in a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppearanceInputs {
    pub trails_enabled: bool,
    pub color_shift: f32,
    pub time: f32,
    pub audio: f32,
}

/// Hue in degrees derived from speed, the colour shift and simulated time.
pub fn hue_for(speed: f32, color_shift: f32, time: f32) -> f32 {
    let hue = (speed * 20.0 + color_shift + time * 0.5).rem_euclid(360.0);
    // rem_euclid rounds tiny negative sums up to exactly 360
    if hue >= 360.0 { 0.0 } else { hue }
}

/// Lightness percent derived from speed and audio energy.
pub fn brightness_for(speed: f32, audio: f32) -> f32 {
    (50.0 + speed * 10.0 + audio * 50.0).min(100.0)
}

/// Record the trail (when enabled) and recolour the particle from its motion.
///
/// A disabled trail is left untouched rather than cleared, so re-enabling
/// trails resumes drawing from the stale history.
pub fn update_appearance(p: &mut Particle, inputs: &AppearanceInputs) {
    if inputs.trails_enabled {
        p.trail.record(p.pos);
    }
    let speed = p.speed();
    p.hue = hue_for(speed, inputs.color_shift, inputs.time);
    p.brightness = brightness_for(speed, inputs.audio);
}

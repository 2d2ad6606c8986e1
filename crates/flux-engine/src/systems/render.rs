//! Per-frame drawing: fade, particles, spectrum bars, pointer ring, stats.

use glam::Vec2;

use crate::api::driver::FrameStats;
use crate::core::particle::Particle;
use crate::renderer::color::Rgba;
use crate::renderer::surface::RenderSurface;

/// Alpha of the black fill laid over the previous frame.
pub const FADE_ALPHA_TRAILS: f32 = 0.1;
pub const FADE_ALPHA_PLAIN: f32 = 0.3;
pub const TRAIL_ALPHA: f32 = 0.3;
/// Body radius multiplier when bloom is on.
pub const BLOOM_SCALE: f32 = 3.0;
/// Tallest spectrum bar as a fraction of surface height.
pub const SPECTRUM_HEIGHT: f32 = 0.3;
pub const SPECTRUM_ALPHA: f32 = 0.8;
pub const RING_WIDTH: f32 = 2.0;
pub const RING_COLOR: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.1);
pub const STATS_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
pub const STATS_FONT_SIZE: f32 = 14.0;
pub const STATS_LINE_HEIGHT: f32 = 18.0;

/// Darken the whole surface so earlier frames fade out.
pub fn draw_fade(surface: &mut dyn RenderSurface, trails_enabled: bool) {
    let alpha = if trails_enabled { FADE_ALPHA_TRAILS } else { FADE_ALPHA_PLAIN };
    let size = Vec2::new(surface.width(), surface.height());
    surface.fill_rect(Vec2::ZERO, size, Rgba::BLACK.with_alpha(alpha));
}

/// Draw the trail (when enabled) and then the glowing body.
pub fn draw_particle(surface: &mut dyn RenderSurface, p: &Particle, trails_enabled: bool, bloom_enabled: bool) {
    if trails_enabled && p.trail.len() >= 2 {
        let color = Rgba::from_hsla(p.hue, 100.0, p.brightness, TRAIL_ALPHA);
        surface.stroke_polyline(&p.trail.positions(), p.size, color);
    }

    let radius = if bloom_enabled { p.size * BLOOM_SCALE } else { p.size };
    let inner = Rgba::from_hsla(p.hue, 100.0, p.brightness, 1.0);
    surface.fill_radial_gradient(p.pos, radius, inner, inner.with_alpha(0.0));
}

/// One bar per bin along the bottom edge, hue following the bin index.
pub fn draw_spectrum(surface: &mut dyn RenderSurface, spectrum: &[f32]) {
    if spectrum.is_empty() {
        return;
    }
    let (width, height) = (surface.width(), surface.height());
    let bins = spectrum.len() as f32;
    let bar_width = width / bins;
    for (i, magnitude) in spectrum.iter().enumerate() {
        let bar_height = magnitude * height * SPECTRUM_HEIGHT;
        let color = Rgba::from_hsla(i as f32 / bins * 360.0, 100.0, 50.0, SPECTRUM_ALPHA);
        surface.fill_rect(
            Vec2::new(i as f32 * bar_width, height - bar_height),
            Vec2::new(bar_width, bar_height),
            color,
        );
    }
}

pub fn draw_pointer_ring(surface: &mut dyn RenderSurface, center: Vec2, radius: f32) {
    surface.stroke_circle(center, radius, RING_WIDTH, RING_COLOR);
}

pub fn draw_stats(surface: &mut dyn RenderSurface, stats: &FrameStats) {
    for (i, line) in stats.lines().iter().enumerate() {
        let pos = STATS_ORIGIN + Vec2::new(0.0, i as f32 * STATS_LINE_HEIGHT);
        surface.fill_text(line, pos, STATS_FONT_SIZE, Rgba::WHITE);
    }
}

//! Drawing contract between the engine and a host surface.
//!
//! The engine never owns pixels. Each tick it issues a short list of 2D
//! drawing commands against a [`RenderSurface`]; the host decides how those
//! become pixels (canvas, GPU triangles, a test recorder).

use glam::Vec2;

use super::color::Rgba;

/// A 2D drawing target.
///
/// Drawing composites over what the surface already shows; nothing is
/// cleared between frames by the engine except via its own translucent fill.
pub trait RenderSurface {
    /// Current surface width in pixels.
    fn width(&self) -> f32;

    /// Current surface height in pixels.
    fn height(&self) -> f32;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba);

    /// Stroke an open polyline.
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba);

    /// Fill a disc with a radial gradient from `inner` at the center to
    /// `outer` at `radius`.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);

    /// Draw a line of text with its top-left corner at `pos`.
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Counts every command it receives.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub width: f32,
        pub height: f32,
        pub rects: Vec<(Vec2, Vec2, Rgba)>,
        pub polylines: usize,
        pub gradients: Vec<(Vec2, f32)>,
        pub circles: Vec<(Vec2, f32)>,
        pub texts: Vec<String>,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self { width, height, ..Default::default() }
        }
    }

    impl RenderSurface for RecordingSurface {
        fn width(&self) -> f32 {
            self.width
        }

        fn height(&self) -> f32 {
            self.height
        }

        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
            self.rects.push((pos, size, color));
        }

        fn stroke_polyline(&mut self, _points: &[Vec2], _width: f32, _color: Rgba) {
            self.polylines += 1;
        }

        fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, _inner: Rgba, _outer: Rgba) {
            self.gradients.push((center, radius));
        }

        fn stroke_circle(&mut self, center: Vec2, radius: f32, _width: f32, _color: Rgba) {
            self.circles.push((center, radius));
        }

        fn fill_text(&mut self, text: &str, _pos: Vec2, _size: f32, _color: Rgba) {
            self.texts.push(text.to_string());
        }
    }
}

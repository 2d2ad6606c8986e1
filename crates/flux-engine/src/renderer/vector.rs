//! Lyon-backed [`RenderSurface`].
//!
//! Tessellates every drawing command on the CPU into a flat triangle list of
//! [`VectorVertex`] that the host uploads and composites over a persistent
//! canvas. Text is not tessellated; it is collected as [`TextLabel`]s for the
//! host to draw.
//!
//! # Usage
//!
//! ```ignore
//! let mut surface = VectorSurface::new(800.0, 600.0);
//! surface.begin_frame();
//! driver.tick(now_ms, &mut surface, None);
//! upload(surface.buffer_ptr(), surface.vertex_count());
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use super::color::Rgba;
use super::surface::RenderSurface;

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24

    fn at(pos: Vec2, color: Rgba) -> Self {
        Self { x: pos.x, y: pos.y, r: color.r, g: color.g, b: color.b, a: color.a }
    }
}

/// A text overlay line for the host to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgba,
}

/// Per-frame command counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub rects: u32,
    pub polylines: u32,
    pub gradients: u32,
    pub circles: u32,
    pub texts: u32,
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: Rgba,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(Vec2::new(p.x, p.y), self.color)
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: Rgba,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(Vec2::new(p.x, p.y), self.color)
    }
}

/// Triangle-list surface.
///
/// Holds lyon tessellators and the output vertex buffer.
/// Cleared by [`VectorSurface::begin_frame`] and populated by drawing commands.
pub struct VectorSurface {
    width: f32,
    height: f32,
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    labels: Vec<TextLabel>,
    stats: DrawStats,
}

impl VectorSurface {
    /// Rim segments used for radial gradient fans.
    pub const GRADIENT_SEGMENTS: usize = 16;

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(65536 * VectorVertex::FLOATS),
            labels: Vec::new(),
            stats: DrawStats::default(),
        }
    }

    /// Drop last frame's triangles, labels and counters.
    pub fn begin_frame(&mut self) {
        self.buffer.clear();
        self.labels.clear();
        self.stats = DrawStats::default();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer (for SAB copy).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn vertices(&self) -> &[VectorVertex] {
        bytemuck::cast_slice(&self.buffer)
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    pub fn stats(&self) -> DrawStats {
        self.stats
    }

    fn push_vertex(&mut self, v: VectorVertex) {
        self.buffer.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(&v)));
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(v)));
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::warn!("vector: fill tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: Rgba) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::warn!("vector: stroke tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}

impl RenderSurface for VectorSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        self.stats.rects += 1;
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.begin(point(pos.x, pos.y));
        builder.line_to(point(pos.x + size.x, pos.y));
        builder.line_to(point(pos.x + size.x, pos.y + size.y));
        builder.line_to(point(pos.x, pos.y + size.y));
        builder.close();
        let path = builder.build();
        self.fill_path(&path, color);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        self.stats.polylines += 1;
        if points.len() < 2 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false); // open path

        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    /// Triangle fan: the center vertex carries `inner`, rim vertices carry
    /// `outer`, and the rasterizer interpolates between them.
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        self.stats.gradients += 1;
        if radius <= 0.0 {
            return;
        }
        let n = Self::GRADIENT_SEGMENTS;
        let rim = |i: usize| {
            let angle = i as f32 / n as f32 * std::f32::consts::TAU;
            center + Vec2::from_angle(angle) * radius
        };
        let mid = VectorVertex::at(center, inner);
        for i in 0..n {
            self.push_vertex(mid);
            self.push_vertex(VectorVertex::at(rim(i), outer));
            self.push_vertex(VectorVertex::at(rim(i + 1), outer));
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.stats.circles += 1;
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        self.stroke_path(&path, width, color);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba) {
        self.stats.texts += 1;
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::FLOATS, 6);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn fill_rect_produces_two_triangles() {
        let mut surface = VectorSurface::new(800.0, 600.0);
        surface.fill_rect(Vec2::ZERO, Vec2::new(800.0, 600.0), Rgba::BLACK.with_alpha(0.1));
        assert_eq!(surface.vertex_count(), 6);
        assert!(surface.vertices().iter().all(|v| (v.a - 0.1).abs() < 1e-6));
    }

    #[test]
    fn gradient_fan_fades_to_rim() {
        let mut surface = VectorSurface::new(800.0, 600.0);
        let inner = Rgba::from_hsla(200.0, 100.0, 60.0, 1.0);
        surface.fill_radial_gradient(Vec2::new(10.0, 10.0), 6.0, inner, inner.with_alpha(0.0));
        assert_eq!(surface.vertex_count(), VectorSurface::GRADIENT_SEGMENTS * 3);
        let verts = surface.vertices();
        assert_eq!(verts[0].a, 1.0);
        assert_eq!(verts[1].a, 0.0);
        let rim = Vec2::new(verts[1].x, verts[1].y);
        assert!((rim.distance(Vec2::new(10.0, 10.0)) - 6.0).abs() < 1e-4);
    }

    #[test]
    fn stroke_polyline_needs_two_points() {
        let mut surface = VectorSurface::new(800.0, 600.0);
        surface.stroke_polyline(&[Vec2::ZERO], 2.0, Rgba::WHITE);
        assert_eq!(surface.vertex_count(), 0);
        surface.stroke_polyline(&[Vec2::ZERO, Vec2::new(10.0, 10.0)], 2.0, Rgba::WHITE);
        assert!(surface.vertex_count() > 0);
        assert_eq!(surface.stats().polylines, 2);
    }

    #[test]
    fn stroke_circle_produces_vertices() {
        let mut surface = VectorSurface::new(800.0, 600.0);
        surface.stroke_circle(Vec2::new(50.0, 50.0), 25.0, 2.0, Rgba::WHITE.with_alpha(0.1));
        assert!(surface.vertex_count() > 0);
    }

    #[test]
    fn text_is_collected_as_labels() {
        let mut surface = VectorSurface::new(800.0, 600.0);
        surface.fill_text("FPS: 60", Vec2::new(10.0, 20.0), 14.0, Rgba::WHITE);
        assert_eq!(surface.vertex_count(), 0);
        assert_eq!(surface.labels().len(), 1);
        assert_eq!(surface.labels()[0].text, "FPS: 60");
    }

    #[test]
    fn begin_frame_resets_everything() {
        let mut surface = VectorSurface::new(800.0, 600.0);
        surface.fill_rect(Vec2::ZERO, Vec2::ONE, Rgba::WHITE);
        surface.fill_text("x", Vec2::ZERO, 10.0, Rgba::WHITE);
        surface.begin_frame();
        assert_eq!(surface.vertex_count(), 0);
        assert!(surface.labels().is_empty());
        assert_eq!(surface.stats(), DrawStats::default());
    }
}

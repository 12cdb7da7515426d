//! Canvas that tessellates draw calls into a triangle list

use glam::DVec2;

use super::canvas::Canvas;
use super::shapes;
use super::vertex::Vertex;
use crate::palette::Color;

/// Triangle-list batch, rebuilt every frame
#[derive(Debug, Clone)]
pub struct VertexBatch {
    /// Clear color requested by the last `cls` (None if never cleared)
    pub clear_color: Option<Color>,
    pub vertices: Vec<Vertex>,
    pub line_width: f64,
}

impl Default for VertexBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexBatch {
    pub fn new() -> Self {
        Self {
            clear_color: None,
            vertices: Vec::new(),
            line_width: shapes::LINE_WIDTH,
        }
    }

    /// Number of triangles in the batch
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Canvas for VertexBatch {
    fn cls(&mut self, color: Color) {
        // Clearing drops everything drawn so far this frame
        self.vertices.clear();
        self.clear_color = Some(color);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
        self.vertices.extend(shapes::line(
            DVec2::new(x1, y1),
            DVec2::new(x2, y2),
            self.line_width,
            color,
        ));
    }

    fn tri(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, color: Color) {
        self.vertices.extend(shapes::triangle(
            DVec2::new(x1, y1),
            DVec2::new(x2, y2),
            DVec2::new(x3, y3),
            color,
        ));
    }

    fn trib(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, color: Color) {
        self.line(x1, y1, x2, y2, color);
        self.line(x2, y2, x3, y3, color);
        self.line(x3, y3, x1, y1, color);
    }

    fn pset(&mut self, x: f64, y: f64, color: Color) {
        self.vertices
            .extend(shapes::point(DVec2::new(x.floor(), y.floor()), color));
    }

    fn circ(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        let segments = shapes::circle_segments(radius);
        self.vertices
            .extend(shapes::circle(DVec2::new(x, y), radius, color, segments));
    }
}

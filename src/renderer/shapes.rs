//! Triangle tessellation for 2D primitives

use glam::DVec2;
use std::f64::consts::TAU;

use super::vertex::Vertex;
use crate::palette::Color;

/// Default line thickness in pixels
pub const LINE_WIDTH: f64 = 1.0;

/// Minimum fan segments for a circle, regardless of radius
const MIN_CIRCLE_SEGMENTS: u32 = 8;
/// Upper bound so huge circles don't explode the batch
const MAX_CIRCLE_SEGMENTS: u32 = 64;

/// Vertices for a line segment as a thin quad (two triangles)
pub fn line(from: DVec2, to: DVec2, width: f64, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == DVec2::ZERO {
        // Zero-length line still covers its pixel
        return point(from, color);
    }
    // Perpendicular for width
    let perp = DVec2::new(-dir.y, dir.x) * (width / 2.0);

    let v1a = from + perp;
    let v1b = from - perp;
    let v2a = to + perp;
    let v2b = to - perp;

    vec![
        Vertex::at(v1a.x, v1a.y, color),
        Vertex::at(v1b.x, v1b.y, color),
        Vertex::at(v2a.x, v2a.y, color),
        Vertex::at(v2a.x, v2a.y, color),
        Vertex::at(v1b.x, v1b.y, color),
        Vertex::at(v2b.x, v2b.y, color),
    ]
}

/// Vertices for a single filled triangle
pub fn triangle(a: DVec2, b: DVec2, c: DVec2, color: Color) -> Vec<Vertex> {
    vec![
        Vertex::at(a.x, a.y, color),
        Vertex::at(b.x, b.y, color),
        Vertex::at(c.x, c.y, color),
    ]
}

/// Vertices for a 1x1 pixel at `p`
pub fn point(p: DVec2, color: Color) -> Vec<Vertex> {
    let (x0, y0) = (p.x, p.y);
    let (x1, y1) = (p.x + 1.0, p.y + 1.0);
    vec![
        Vertex::at(x0, y0, color),
        Vertex::at(x1, y0, color),
        Vertex::at(x1, y1, color),
        Vertex::at(x0, y0, color),
        Vertex::at(x1, y1, color),
        Vertex::at(x0, y1, color),
    ]
}

/// Fan segment count scaled to the circle's circumference
pub fn circle_segments(radius: f64) -> u32 {
    ((radius * 0.5).ceil() as u32).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

/// Vertices for a filled circle
pub fn circle(center: DVec2, radius: f64, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f64 / segments as f64) * TAU;
        let theta2 = ((i + 1) as f64 / segments as f64) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::at(center.x, center.y, color));
        vertices.push(Vertex::at(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::at(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

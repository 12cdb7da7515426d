//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::palette::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Vertex at world coordinates, narrowed to GPU precision
    pub fn at(x: f64, y: f64, color: Color) -> Self {
        Self::new(x as f32, y as f32, color.to_rgba())
    }

    /// Byte stride of one vertex in an interleaved buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        let v = Vertex::at(1.5, 2.5, Color::BLACK);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), Vertex::STRIDE);
        assert_eq!(&bytes[0..4], &1.5f32.to_ne_bytes());
    }
}

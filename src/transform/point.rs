//! Point-wise transforms
//!
//! Same maps as the `Mat3` constructors, applied directly to a single point.

use glam::DVec2;

#[inline]
pub fn translate(p: DVec2, tx: f64, ty: f64) -> DVec2 {
    DVec2::new(p.x + tx, p.y + ty)
}

#[inline]
pub fn scale(p: DVec2, sx: f64, sy: f64) -> DVec2 {
    DVec2::new(p.x * sx, p.y * sy)
}

/// Rotate about the origin (math convention, see [`super::Mat3::rotate`])
#[inline]
pub fn rotate(p: DVec2, angle: f64) -> DVec2 {
    let (s, c) = angle.sin_cos();
    DVec2::new(p.x * c - p.y * s, p.x * s + p.y * c)
}

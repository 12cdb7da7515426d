//! Collision detection and response for circles
//!
//! Walls are an axis-aligned box with its origin at the top-left. Circle pairs
//! get a symmetric positional correction followed by an equal-mass elastic
//! impulse along the contact normal.

use glam::DVec2;

use super::body::Body;

/// Containment box `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which axes a wall bounce touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContact {
    pub x: bool,
    pub y: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Clamp a body inside `bounds`, flipping the velocity on each axis it left
///
/// Axes are handled independently; the bounce is perfectly elastic.
pub fn bounce_wall(body: &mut Body, bounds: Bounds) -> WallContact {
    let r = body.radius;
    let mut contact = WallContact::default();

    if body.pos.x < r || body.pos.x > bounds.width - r {
        body.pos.x = body.pos.x.max(r).min(bounds.width - r);
        body.vel.x = -body.vel.x;
        contact.x = true;
    }

    if body.pos.y < r || body.pos.y > bounds.height - r {
        body.pos.y = body.pos.y.max(r).min(bounds.height - r);
        body.vel.y = -body.vel.y;
        contact.y = true;
    }

    contact
}

/// Resolve contact between two circles
///
/// Returns false (and touches nothing) when they are apart. Otherwise pushes
/// both apart by half the overlap each, then exchanges the closing velocity
/// along the normal if they are approaching. Returns true in both cases.
pub fn bounce_off(a: &mut Body, b: &mut Body) -> bool {
    let mut d = b.pos - a.pos;
    let min_dist = a.radius + b.radius;
    let dist_sq = d.length_squared();
    if dist_sq > min_dist * min_dist {
        return false;
    }

    // Coincident centers: any fixed normal will do
    let dist = if dist_sq == 0.0 {
        d = DVec2::X;
        1.0
    } else {
        dist_sq.sqrt()
    };

    let n = d / dist;
    let overlap = min_dist - dist;
    if overlap > 0.0 {
        let correction = n * (overlap / 2.0);
        a.pos -= correction;
        b.pos += correction;
    }

    let closing_speed = (a.vel - b.vel).dot(n);
    if closing_speed <= 0.0 {
        // Separating or grazing
        return true;
    }

    let impulse = closing_speed * n;
    a.vel -= impulse;
    b.vel += impulse;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Color;

    const EPS: f64 = 1e-9;

    fn body(x: f64, y: f64, vx: f64, vy: f64, r: f64) -> Body {
        Body::new(x, y, vx, vy, r, Color::WHITE)
    }

    #[test]
    fn test_wall_inside_untouched() {
        let mut b = body(100.0, 100.0, 5.0, -3.0, 10.0);
        let contact = bounce_wall(&mut b, Bounds::new(200.0, 200.0));
        assert!(!contact.any());
        assert_eq!(b, body(100.0, 100.0, 5.0, -3.0, 10.0));
    }

    #[test]
    fn test_wall_left_clamps_and_flips() {
        let mut b = body(4.0, 50.0, -6.0, 2.0, 10.0);
        let contact = bounce_wall(&mut b, Bounds::new(200.0, 100.0));
        assert_eq!(contact, WallContact { x: true, y: false });
        assert_eq!(b.pos, DVec2::new(10.0, 50.0));
        assert_eq!(b.vel, DVec2::new(6.0, 2.0));
    }

    #[test]
    fn test_wall_corner_flips_both_axes() {
        let mut b = body(198.0, 97.0, 4.0, 3.0, 10.0);
        let contact = bounce_wall(&mut b, Bounds::new(200.0, 100.0));
        assert_eq!(contact, WallContact { x: true, y: true });
        assert_eq!(b.pos, DVec2::new(190.0, 90.0));
        assert_eq!(b.vel, DVec2::new(-4.0, -3.0));
    }

    #[test]
    fn test_wall_touching_exactly_is_not_a_bounce() {
        let mut b = body(10.0, 90.0, -1.0, 1.0, 10.0);
        let contact = bounce_wall(&mut b, Bounds::new(200.0, 100.0));
        assert!(!contact.any());
        assert_eq!(b.vel, DVec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_wall_bounce_flips_even_when_moving_inward() {
        // Sign flip depends only on position, not direction of travel
        let mut b = body(5.0, 50.0, 3.0, 0.0, 10.0);
        bounce_wall(&mut b, Bounds::new(200.0, 100.0));
        assert_eq!(b.vel.x, -3.0);
        assert_eq!(b.pos.x, 10.0);
    }

    #[test]
    fn test_far_apart_no_interaction() {
        let mut a = body(0.0, 0.0, 1.0, 0.0, 10.0);
        let mut b = body(30.0, 0.0, -1.0, 0.0, 10.0);
        let (a0, b0) = (a.clone(), b.clone());
        assert!(!bounce_off(&mut a, &mut b));
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_head_on_overlap_separates_and_swaps() {
        let mut a = body(100.0, 100.0, 5.0, 0.0, 20.0);
        let mut b = body(110.0, 100.0, -5.0, 0.0, 20.0);

        assert!(bounce_off(&mut a, &mut b));
        assert_eq!(a.pos, DVec2::new(85.0, 100.0));
        assert_eq!(b.pos, DVec2::new(125.0, 100.0));
        assert!((b.pos.distance(a.pos) - 40.0).abs() < EPS);
        assert_eq!(a.vel, DVec2::new(-5.0, 0.0));
        assert_eq!(b.vel, DVec2::new(5.0, 0.0));
    }

    #[test]
    fn test_coincident_centers_use_x_normal() {
        let mut a = body(50.0, 50.0, 0.0, 0.0, 10.0);
        let mut b = body(50.0, 50.0, 0.0, 0.0, 15.0);

        assert!(bounce_off(&mut a, &mut b));
        // dist treated as 1, so overlap = 25 - 1
        let half = (25.0 - 1.0) / 2.0;
        assert_eq!(a.pos, DVec2::new(50.0 - half, 50.0));
        assert_eq!(b.pos, DVec2::new(50.0 + half, 50.0));
        // Both at rest: closing speed 0, velocities untouched
        assert_eq!(a.vel, DVec2::ZERO);
        assert_eq!(b.vel, DVec2::ZERO);
    }

    #[test]
    fn test_separating_pair_keeps_velocity() {
        let mut a = body(0.0, 0.0, -2.0, 1.0, 10.0);
        let mut b = body(15.0, 0.0, 3.0, 1.0, 10.0);

        assert!(bounce_off(&mut a, &mut b));
        assert!((b.pos.distance(a.pos) - 20.0).abs() < EPS);
        assert_eq!(a.vel, DVec2::new(-2.0, 1.0));
        assert_eq!(b.vel, DVec2::new(3.0, 1.0));
    }

    #[test]
    fn test_touching_pair_interacts_without_correction() {
        let mut a = body(0.0, 0.0, 1.0, 0.0, 10.0);
        let mut b = body(20.0, 0.0, 0.0, 0.0, 10.0);

        assert!(bounce_off(&mut a, &mut b));
        assert_eq!(a.pos, DVec2::ZERO);
        assert_eq!(b.pos, DVec2::new(20.0, 0.0));
        assert_eq!(a.vel, DVec2::ZERO);
        assert_eq!(b.vel, DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_oblique_impulse_keeps_tangent() {
        // Normal along +y; tangential x motion must survive
        let mut a = body(0.0, 0.0, 4.0, 3.0, 10.0);
        let mut b = body(0.0, 15.0, -1.0, -2.0, 10.0);

        assert!(bounce_off(&mut a, &mut b));
        assert_eq!(a.vel, DVec2::new(4.0, -2.0));
        assert_eq!(b.vel, DVec2::new(-1.0, 3.0));
    }
}

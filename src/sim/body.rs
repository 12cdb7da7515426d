//! Circular bodies

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::palette::Color;
use crate::renderer::Canvas;

/// A moving circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    /// Pixels per tick
    pub vel: DVec2,
    /// Assumed positive
    pub radius: f64,
    #[serde(default)]
    pub color: Color,
}

impl Body {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, color: Color) -> Self {
        Self {
            pos: DVec2::new(x, y),
            vel: DVec2::new(vx, vy),
            radius,
            color,
        }
    }

    /// Euler step with a fixed unit timestep
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.circ(self.pos.x, self.pos.y, self.radius, self.color);
    }
}

/// Stable reference to a body: its insertion index
///
/// Bodies are never removed, so a handle stays valid for the simulation's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandList, DrawCommand};

    #[test]
    fn test_advance_adds_velocity() {
        let mut body = Body::new(10.0, 20.0, 3.0, -4.0, 5.0, Color::WHITE);
        body.advance();
        body.advance();
        assert_eq!(body.pos, DVec2::new(16.0, 12.0));
        assert_eq!(body.vel, DVec2::new(3.0, -4.0));
    }

    #[test]
    fn test_draw_emits_filled_circle() {
        let body = Body::new(10.0, 20.0, 0.0, 0.0, 5.0, Color(3));
        let mut list = CommandList::new();
        body.draw(&mut list);
        assert_eq!(
            list.commands,
            vec![DrawCommand::Circle {
                center: (10.0, 20.0),
                radius: 5.0,
                color: Color(3)
            }]
        );
    }

    #[test]
    fn test_body_json_defaults_color() {
        let body: Body =
            serde_json::from_str(r#"{"pos":[1.0,2.0],"vel":[0.5,0.0],"radius":7.0}"#).unwrap();
        assert_eq!(body, Body::new(1.0, 2.0, 0.5, 0.0, 7.0, Color::BLACK));
    }
}

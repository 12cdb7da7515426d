//! Drawing seam to the external 2D toolkit
//!
//! The canvas has its origin at the top-left with x to the right and y down.

use crate::palette::Color;

/// Primitive drawing calls supplied by the host toolkit
pub trait Canvas {
    /// Clear the whole surface
    fn cls(&mut self, color: Color);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color);
    /// Filled triangle
    #[allow(clippy::too_many_arguments)]
    fn tri(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, color: Color);
    /// Triangle outline
    #[allow(clippy::too_many_arguments)]
    fn trib(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, color: Color);
    fn pset(&mut self, x: f64, y: f64, color: Color);
    /// Filled circle
    fn circ(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
    },
    Tri {
        points: [(f64, f64); 3],
        color: Color,
    },
    TriOutline {
        points: [(f64, f64); 3],
        color: Color,
    },
    Point {
        at: (f64, f64),
        color: Color,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Color,
    },
}

/// Canvas that records calls in order instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded calls onto another canvas
    pub fn replay(&self, target: &mut impl Canvas) {
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::Clear(color) => target.cls(color),
                DrawCommand::Line { from, to, color } => {
                    target.line(from.0, from.1, to.0, to.1, color)
                }
                DrawCommand::Tri { points: [a, b, c], color } => {
                    target.tri(a.0, a.1, b.0, b.1, c.0, c.1, color)
                }
                DrawCommand::TriOutline { points: [a, b, c], color } => {
                    target.trib(a.0, a.1, b.0, b.1, c.0, c.1, color)
                }
                DrawCommand::Point { at, color } => target.pset(at.0, at.1, color),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => target.circ(center.0, center.1, radius, color),
            }
        }
    }
}

impl Canvas for CommandList {
    fn cls(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
        self.commands.push(DrawCommand::Line {
            from: (x1, y1),
            to: (x2, y2),
            color,
        });
    }

    fn tri(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, color: Color) {
        self.commands.push(DrawCommand::Tri {
            points: [(x1, y1), (x2, y2), (x3, y3)],
            color,
        });
    }

    fn trib(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, color: Color) {
        self.commands.push(DrawCommand::TriOutline {
            points: [(x1, y1), (x2, y2), (x3, y3)],
            color,
        });
    }

    fn pset(&mut self, x: f64, y: f64, color: Color) {
        self.commands.push(DrawCommand::Point { at: (x, y), color });
    }

    fn circ(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center: (x, y),
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = CommandList::new();
        list.cls(Color::BLACK);
        list.line(0.0, 0.0, 10.0, 5.0, Color::WHITE);
        list.pset(3.0, 4.0, Color::RED);

        assert_eq!(list.len(), 3);
        assert_eq!(list.commands[0], DrawCommand::Clear(Color::BLACK));
        assert_eq!(
            list.commands[2],
            DrawCommand::Point {
                at: (3.0, 4.0),
                color: Color::RED
            }
        );
    }

    #[test]
    fn test_replay_reproduces_commands() {
        let mut list = CommandList::new();
        list.tri(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, Color::GREEN);
        list.trib(0.0, 0.0, 2.0, 0.0, 0.0, 2.0, Color::YELLOW);
        list.circ(50.0, 60.0, 20.0, Color::ORANGE);

        let mut copy = CommandList::new();
        list.replay(&mut copy);
        assert_eq!(copy.commands, list.commands);
    }
}

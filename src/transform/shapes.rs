//! Transformed shape drawing
//!
//! Vertices are given in model space; each helper maps them through the current
//! matrix and forwards the result to the canvas.

use glam::DVec2;
use std::f64::consts::TAU;

use super::matrix::Mat3;
use crate::palette::Color;
use crate::renderer::Canvas;

/// Filled or outlined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Fill,
    Outline,
}

pub fn line(canvas: &mut impl Canvas, m: &Mat3, a: DVec2, b: DVec2, color: Color) {
    let (a, b) = (m.apply_point(a), m.apply_point(b));
    canvas.line(a.x, a.y, b.x, b.y, color);
}

pub fn tri(canvas: &mut impl Canvas, m: &Mat3, points: [DVec2; 3], color: Color, style: Style) {
    let [a, b, c] = points.map(|p| m.apply_point(p));
    match style {
        Style::Fill => canvas.tri(a.x, a.y, b.x, b.y, c.x, c.y, color),
        Style::Outline => canvas.trib(a.x, a.y, b.x, b.y, c.x, c.y, color),
    }
}

/// Quad as two triangles `(a, b, c)` + `(a, c, d)`, or four edges when outlined
pub fn quad(canvas: &mut impl Canvas, m: &Mat3, corners: [DVec2; 4], color: Color, style: Style) {
    let t = corners.map(|p| m.apply_point(p));
    match style {
        Style::Fill => {
            canvas.tri(t[0].x, t[0].y, t[1].x, t[1].y, t[2].x, t[2].y, color);
            canvas.tri(t[0].x, t[0].y, t[2].x, t[2].y, t[3].x, t[3].y, color);
        }
        Style::Outline => polyline_closed(canvas, &t, color),
    }
}

/// Closed outline through already-transformed points
pub fn polyline_closed(canvas: &mut impl Canvas, points: &[DVec2], color: Color) {
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        canvas.line(a.x, a.y, b.x, b.y, color);
    }
}

/// Single pixels at the transformed, truncated positions
pub fn points(canvas: &mut impl Canvas, m: &Mat3, model: &[DVec2], color: Color) {
    for p in model {
        let t = m.apply_point(*p);
        canvas.pset(t.x.trunc(), t.y.trunc(), color);
    }
}

/// Fan of petals around the model origin
///
/// Petal `i` is a filled triangle spanning `[TAU * i / petals, + petal_width]`.
pub fn flower(
    canvas: &mut impl Canvas,
    m: &Mat3,
    petals: u32,
    radius: f64,
    petal_width: f64,
    color: Color,
) {
    for i in 0..petals {
        let a0 = TAU / petals as f64 * i as f64;
        let a1 = a0 + petal_width;
        let p1 = DVec2::from_angle(a0) * radius;
        let p2 = DVec2::from_angle(a1) * radius;
        tri(canvas, m, [p1, p2, DVec2::ZERO], color, Style::Fill);
    }
}

/// Ellipse centred on the model origin, approximated with `segments` vertices
///
/// Fewer than 3 segments draw nothing.
pub fn ellipse(
    canvas: &mut impl Canvas,
    m: &Mat3,
    rx: f64,
    ry: f64,
    segments: u32,
    color: Color,
    style: Style,
) {
    if segments < 3 {
        return;
    }
    let rim: Vec<DVec2> = (0..segments)
        .map(|i| {
            let theta = TAU * i as f64 / segments as f64;
            m.apply_point(DVec2::new(rx * theta.cos(), ry * theta.sin()))
        })
        .collect();

    match style {
        Style::Fill => {
            let c = m.apply_point(DVec2::ZERO);
            for (i, a) in rim.iter().enumerate() {
                let b = rim[(i + 1) % rim.len()];
                canvas.tri(c.x, c.y, a.x, a.y, b.x, b.y, color);
            }
        }
        Style::Outline => polyline_closed(canvas, &rim, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandList, DrawCommand};

    fn corners() -> [DVec2; 4] {
        [
            DVec2::new(-1.0, -1.0),
            DVec2::new(1.0, -1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(-1.0, 1.0),
        ]
    }

    #[test]
    fn test_tri_styles() {
        let m = Mat3::translate(10.0, 20.0);
        let pts = [DVec2::ZERO, DVec2::X, DVec2::Y];
        let mut list = CommandList::new();
        tri(&mut list, &m, pts, Color::GREEN, Style::Fill);
        tri(&mut list, &m, pts, Color::GREEN, Style::Outline);

        let expected = [(10.0, 20.0), (11.0, 20.0), (10.0, 21.0)];
        assert_eq!(
            list.commands,
            vec![
                DrawCommand::Tri {
                    points: expected,
                    color: Color::GREEN
                },
                DrawCommand::TriOutline {
                    points: expected,
                    color: Color::GREEN
                },
            ]
        );
    }

    #[test]
    fn test_quad_fill_is_two_triangles() {
        let mut list = CommandList::new();
        quad(&mut list, &Mat3::scale(10.0, 10.0), corners(), Color::RED, Style::Fill);

        assert_eq!(list.len(), 2);
        let (DrawCommand::Tri { points: t1, .. }, DrawCommand::Tri { points: t2, .. }) =
            (&list.commands[0], &list.commands[1])
        else {
            panic!("expected two filled triangles");
        };
        // Shared diagonal from the first to the third corner
        assert_eq!(t1[0], t2[0]);
        assert_eq!(t1[2], t2[1]);
        assert_eq!(t1[0], (-10.0, -10.0));
        assert_eq!(t2[2], (-10.0, 10.0));
    }

    #[test]
    fn test_quad_outline_is_closed() {
        let mut list = CommandList::new();
        quad(&mut list, &Mat3::IDENTITY, corners(), Color::WHITE, Style::Outline);

        assert_eq!(list.len(), 4);
        assert_eq!(
            list.commands[3],
            DrawCommand::Line {
                from: (-1.0, 1.0),
                to: (-1.0, -1.0),
                color: Color::WHITE
            }
        );
    }

    #[test]
    fn test_points_truncate() {
        let mut list = CommandList::new();
        points(
            &mut list,
            &Mat3::translate(0.5, 0.75),
            &[DVec2::new(3.9, 2.0)],
            Color::WHITE,
        );
        assert_eq!(
            list.commands,
            vec![DrawCommand::Point {
                at: (4.0, 2.0),
                color: Color::WHITE
            }]
        );
    }

    #[test]
    fn test_flower_fans_from_center() {
        let m = Mat3::translate(100.0, 75.0);
        let mut list = CommandList::new();
        flower(&mut list, &m, 8, 25.0, 0.4, Color::YELLOW);

        assert_eq!(list.len(), 8);
        for cmd in &list.commands {
            let DrawCommand::Tri { points, .. } = cmd else {
                panic!("petals are filled triangles");
            };
            assert_eq!(points[2], (100.0, 75.0));
            let (x, y) = points[0];
            assert!(((x - 100.0).hypot(y - 75.0) - 25.0).abs() < 1e-9);
        }
        // First petal starts on the +x axis
        let DrawCommand::Tri { points, .. } = &list.commands[0] else {
            unreachable!()
        };
        assert_eq!(points[0], (125.0, 75.0));
    }

    #[test]
    fn test_ellipse_segments() {
        let mut list = CommandList::new();
        ellipse(&mut list, &Mat3::IDENTITY, 10.0, 5.0, 2, Color::WHITE, Style::Fill);
        assert!(list.is_empty());

        ellipse(&mut list, &Mat3::IDENTITY, 10.0, 5.0, 16, Color::WHITE, Style::Fill);
        assert_eq!(list.len(), 16);

        list.clear();
        ellipse(&mut list, &Mat3::IDENTITY, 10.0, 5.0, 16, Color::WHITE, Style::Outline);
        assert_eq!(list.len(), 16);
        let DrawCommand::Line { from, .. } = list.commands[0] else {
            panic!("outline is drawn with lines");
        };
        assert_eq!(from, (10.0, 0.0));
    }
}

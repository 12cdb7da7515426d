//! Animated transform demos
//!
//! Each demo owns its animation state and rebuilds one matrix per tick.
//! `update` consumes the state and returns the next one; `draw` only reads it.

use glam::DVec2;

use super::matrix::Mat3;
use super::shapes::{self, Style};
use crate::config::{PivotConfig, ShapesConfig};
use crate::palette::Color;
use crate::renderer::Canvas;

/// Star positions in model space
pub const STARS: [DVec2; 8] = [
    DVec2::new(-80.0, -60.0),
    DVec2::new(-50.0, -20.0),
    DVec2::new(0.0, -70.0),
    DVec2::new(50.0, -50.0),
    DVec2::new(-30.0, 40.0),
    DVec2::new(20.0, 70.0),
    DVec2::new(70.0, 10.0),
    DVec2::new(-70.0, 20.0),
];

const FLOWER_PETALS: u32 = 8;
const FLOWER_RADIUS: f64 = 25.0;
const PETAL_WIDTH: f64 = 0.4;

/// Pulsing, spinning shapes around the canvas centre
#[derive(Debug, Clone, PartialEq)]
pub struct ShapesDemo {
    pub angle: f64,
    pub matrix: Mat3,
    pub center: DVec2,
    pub angle_step: f64,
}

impl ShapesDemo {
    pub fn new(config: &ShapesConfig) -> Self {
        Self {
            angle: 0.0,
            matrix: Mat3::IDENTITY,
            center: DVec2::new(config.width / 2.0, config.height / 2.0),
            angle_step: config.angle_step,
        }
    }

    /// Uniform scale for a given angle: pulses between 0.5 and 1.5
    pub fn pulse(angle: f64) -> f64 {
        1.0 + 0.5 * (angle * 2.0).sin()
    }

    /// Scale, then rotate, then move to the centre
    pub fn matrix_for(&self, angle: f64) -> Mat3 {
        let s = Self::pulse(angle);
        Mat3::translate(self.center.x, self.center.y) * Mat3::rotate(angle) * Mat3::scale(s, s)
    }

    pub fn update(self) -> Self {
        let angle = self.angle + self.angle_step;
        let matrix = self.matrix_for(angle);
        Self {
            angle,
            matrix,
            ..self
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let m = &self.matrix;
        let p = DVec2::new;
        canvas.cls(Color::BLACK);

        shapes::tri(
            canvas,
            m,
            [p(-20.0, -10.0), p(20.0, -10.0), p(0.0, 20.0)],
            Color(11),
            Style::Fill,
        );
        shapes::quad(
            canvas,
            m,
            [p(-15.0, -15.0), p(15.0, -15.0), p(15.0, 15.0), p(-15.0, 15.0)],
            Color(8),
            Style::Fill,
        );
        // Same square again, built from two explicit triangles
        shapes::tri(canvas, m, [p(-5.0, -5.0), p(5.0, -5.0), p(5.0, 5.0)], Color(9), Style::Fill);
        shapes::tri(canvas, m, [p(-5.0, -5.0), p(5.0, 5.0), p(-5.0, 5.0)], Color(9), Style::Fill);

        shapes::points(canvas, m, &STARS, Color(7));
        shapes::flower(canvas, m, FLOWER_PETALS, FLOWER_RADIUS, PETAL_WIDTH, Color(10));
    }
}

/// Steps of the pivot-rotation walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStage {
    /// Leaves points where they are
    #[default]
    Identity,
    /// Shift by (30, -10)
    Translate,
    /// 45° about the canvas origin (top-left), which swings the square away
    Rotate,
    /// 45° about the canvas centre
    PivotRotate,
    /// Spin about the centre by a fixed step each tick
    AnimatedPivot,
    /// Spin, with a (30, 30) shift applied to points before the spin
    OffsetAfter,
    /// Spin, with a (30, 30) shift applied after the spin
    OffsetBefore,
}

impl PivotStage {
    pub const ALL: [PivotStage; 7] = [
        PivotStage::Identity,
        PivotStage::Translate,
        PivotStage::Rotate,
        PivotStage::PivotRotate,
        PivotStage::AnimatedPivot,
        PivotStage::OffsetAfter,
        PivotStage::OffsetBefore,
    ];

    /// Following stage, wrapping to the first
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn is_animated(self) -> bool {
        matches!(
            self,
            PivotStage::AnimatedPivot | PivotStage::OffsetAfter | PivotStage::OffsetBefore
        )
    }
}

/// A square transformed by one stage of the pivot walkthrough
#[derive(Debug, Clone, PartialEq)]
pub struct PivotDemo {
    pub stage: PivotStage,
    /// Accumulated rotation in radians (animated stages only)
    pub angle: f64,
    pub matrix: Mat3,
    pub center: DVec2,
    pub square_size: f64,
    pub degrees_per_tick: f64,
}

impl PivotDemo {
    pub fn new(config: &PivotConfig, stage: PivotStage) -> Self {
        Self {
            stage,
            angle: 0.0,
            matrix: Mat3::IDENTITY,
            center: DVec2::new(config.width / 2.0, config.height / 2.0),
            square_size: config.square_size,
            degrees_per_tick: config.degrees_per_tick,
        }
    }

    /// Switch stage, keeping the accumulated angle
    pub fn with_stage(self, stage: PivotStage) -> Self {
        Self { stage, ..self }
    }

    /// Corners of the untransformed square, clockwise on screen from top-left
    pub fn square(&self) -> [DVec2; 4] {
        let h = self.square_size / 2.0;
        let c = self.center;
        [
            DVec2::new(c.x - h, c.y - h),
            DVec2::new(c.x + h, c.y - h),
            DVec2::new(c.x + h, c.y + h),
            DVec2::new(c.x - h, c.y + h),
        ]
    }

    fn spin(&self, angle: f64) -> Mat3 {
        Mat3::about_pivot(self.center.x, self.center.y, Mat3::rotate(angle))
    }

    pub fn update(self) -> Self {
        let angle = if self.stage.is_animated() {
            self.angle + self.degrees_per_tick.to_radians()
        } else {
            self.angle
        };
        let quarter = 45f64.to_radians();

        let matrix = match self.stage {
            PivotStage::Identity => Mat3::IDENTITY,
            PivotStage::Translate => Mat3::translate(30.0, -10.0),
            PivotStage::Rotate => Mat3::rotate(quarter),
            PivotStage::PivotRotate => self.spin(quarter),
            PivotStage::AnimatedPivot => self.spin(angle),
            PivotStage::OffsetAfter => self.spin(angle) * Mat3::translate(30.0, 30.0),
            PivotStage::OffsetBefore => Mat3::translate(30.0, 30.0) * self.spin(angle),
        };

        Self {
            angle,
            matrix,
            ..self
        }
    }

    pub fn transformed_square(&self) -> [DVec2; 4] {
        self.square().map(|p| self.matrix.apply_point(p))
    }

    /// Original square in white, transformed one in red
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.cls(Color::BLACK);
        shapes::polyline_closed(canvas, &self.square(), Color::WHITE);
        shapes::polyline_closed(canvas, &self.transformed_square(), Color::RED);
    }
}

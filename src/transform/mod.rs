//! 2D affine transforms
//!
//! - `matrix`: the `Mat3` value type (construct, compose, apply)
//! - `point`: the same maps applied to single points
//! - `shapes`: transform-then-draw helpers
//! - `demo`: animated demos that rebuild one matrix per tick

pub mod demo;
pub mod matrix;
pub mod point;
pub mod shapes;

pub use demo::{PivotDemo, PivotStage, ShapesDemo};
pub use matrix::Mat3;
pub use shapes::Style;

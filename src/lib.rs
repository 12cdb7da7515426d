//! Retro Demos - small teaching demos for a 2D retro canvas
//!
//! Core modules:
//! - `sim`: Bouncing circles (wall containment, elastic circle-circle contacts)
//! - `transform`: 3x3 homogeneous matrices and the shape demos built on them
//! - `sprite`: Sprite-sheet frame selection
//! - `renderer`: The `Canvas` seam to the external toolkit, plus recording/batching canvases
//! - `config`: Data-driven demo settings

pub mod config;
pub mod palette;
pub mod renderer;
pub mod sim;
pub mod sprite;
pub mod transform;

pub use config::{ConfigError, DemoConfig};
pub use palette::Color;

/// Demo configuration constants
pub mod consts {
    /// Bouncing-circles canvas
    pub const BOUNCE_WIDTH: f64 = 720.0;
    pub const BOUNCE_HEIGHT: f64 = 680.0;
    /// Speed of freshly spawned circles (pixels per tick)
    pub const CIRCLE_SPEED: f64 = 20.0;
    pub const MIN_CIRCLE_RADIUS: u32 = 20;
    pub const MAX_CIRCLE_RADIUS: u32 = 60;

    /// Transform-shapes canvas
    pub const SHAPES_WIDTH: f64 = 200.0;
    pub const SHAPES_HEIGHT: f64 = 150.0;
    /// Radians added to the shapes demo angle each tick
    pub const SHAPES_ANGLE_STEP: f64 = 0.03;

    /// Pivot-rotation canvas
    pub const PIVOT_WIDTH: f64 = 160.0;
    pub const PIVOT_HEIGHT: f64 = 120.0;
    pub const PIVOT_SQUARE_SIZE: f64 = 20.0;
    /// Degrees added per tick by the animated pivot stage
    pub const PIVOT_DEGREES_PER_TICK: f64 = 4.0;

    /// Sprite demo canvas and sheet layout
    pub const SPRITE_WIDTH: f64 = 320.0;
    pub const SPRITE_HEIGHT: f64 = 240.0;
    pub const SPRITE_FRAMES: u32 = 3;
    pub const SPRITE_TICKS_PER_FRAME: u64 = 4;
}

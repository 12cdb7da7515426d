//! Demo settings
//!
//! Loaded from an optional JSON file. Missing fields take the built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Body;

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON or wrong field types
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Bouncing-circles settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceConfig {
    pub width: f64,
    pub height: f64,
    /// Speed of spawned circles (pixels per tick)
    pub circle_speed: f64,
    pub min_radius: u32,
    pub max_radius: u32,
    /// RNG seed for spawning
    pub seed: u64,
    /// Bodies present before the first tick
    pub bodies: Vec<Body>,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            width: BOUNCE_WIDTH,
            height: BOUNCE_HEIGHT,
            circle_speed: CIRCLE_SPEED,
            min_radius: MIN_CIRCLE_RADIUS,
            max_radius: MAX_CIRCLE_RADIUS,
            seed: 0,
            bodies: Vec::new(),
        }
    }
}

/// Transform-shapes settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    pub width: f64,
    pub height: f64,
    /// Radians per tick
    pub angle_step: f64,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            width: SHAPES_WIDTH,
            height: SHAPES_HEIGHT,
            angle_step: SHAPES_ANGLE_STEP,
        }
    }
}

/// Pivot-rotation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotConfig {
    pub width: f64,
    pub height: f64,
    pub square_size: f64,
    /// Degrees per tick for the animated stage
    pub degrees_per_tick: f64,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            width: PIVOT_WIDTH,
            height: PIVOT_HEIGHT,
            square_size: PIVOT_SQUARE_SIZE,
            degrees_per_tick: PIVOT_DEGREES_PER_TICK,
        }
    }
}

/// Sprite-sheet animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub width: f64,
    pub height: f64,
    /// Full sheet size in pixels
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub frames: u32,
    pub ticks_per_frame: u64,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            width: SPRITE_WIDTH,
            height: SPRITE_HEIGHT,
            sheet_width: 48,
            sheet_height: 16,
            frames: SPRITE_FRAMES,
            ticks_per_frame: SPRITE_TICKS_PER_FRAME,
        }
    }
}

/// All demo settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub bounce: BounceConfig,
    pub shapes: ShapesConfig,
    pub pivot: PivotConfig,
    pub sprite: SpriteConfig,
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, or fall back to defaults (with a warning) on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

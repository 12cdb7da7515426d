//! Bouncing-circles simulation
//!
//! Pure and deterministic:
//! - Fixed unit timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order, pairs by ascending index)
//! - No platform dependencies; drawing goes through `Canvas`

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::{Body, BodyHandle};
pub use collision::{Bounds, WallContact, bounce_off, bounce_wall};
pub use state::{Simulation, SpawnParams, StepStats};
pub use tick::{TickInput, TickOutcome, tick};

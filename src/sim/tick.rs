//! Per-frame update for the bouncing-circles demo

use super::state::{Simulation, StepStats};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Spawn a random circle (space)
    pub spawn: bool,
    /// Request exit (q)
    pub quit: bool,
}

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue(StepStats),
    Quit,
}

/// Advance the simulation by one frame, then apply input
///
/// The step always runs; a spawned circle first moves on the next tick.
pub fn tick(sim: &mut Simulation, input: &TickInput) -> TickOutcome {
    let stats = sim.step();

    if input.quit {
        log::info!("Quit requested after {} ticks", sim.time_ticks);
        return TickOutcome::Quit;
    }

    if input.spawn {
        sim.spawn_random();
    }

    TickOutcome::Continue(stats)
}

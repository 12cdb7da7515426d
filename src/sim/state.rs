//! Bouncing-circles simulation state
//!
//! Owns the bodies and the seeded RNG used to spawn new ones.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, BodyHandle};
use super::collision::{Bounds, bounce_off, bounce_wall};
use crate::config::BounceConfig;
use crate::palette::Color;
use crate::renderer::Canvas;

/// Parameters for randomly spawned circles
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnParams {
    /// Speed in pixels per tick
    pub speed: f64,
    pub min_radius: u32,
    pub max_radius: u32,
    /// Lowest palette index used (0 is the background)
    pub min_color: u8,
    pub max_color: u8,
}

impl Default for SpawnParams {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            speed: CIRCLE_SPEED,
            min_radius: MIN_CIRCLE_RADIUS,
            max_radius: MAX_CIRCLE_RADIUS,
            min_color: 1,
            max_color: 15,
        }
    }
}

impl SpawnParams {
    /// Copy with each inclusive range ordered low to high
    pub fn normalized(&self) -> Self {
        let (min_radius, max_radius) = ordered(self.min_radius, self.max_radius);
        let (min_color, max_color) = ordered(self.min_color, self.max_color);
        Self {
            speed: self.speed,
            min_radius,
            max_radius,
            min_color,
            max_color,
        }
    }
}

fn ordered<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Per-step counters, mostly for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    pub wall_hits: usize,
    pub contacts: usize,
}

/// The bouncing-circles world
///
/// Bodies are kept in insertion order and never removed.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub bounds: Bounds,
    bodies: Vec<Body>,
    rng: Pcg32,
    pub spawn: SpawnParams,
    /// Completed steps
    pub time_ticks: u64,
}

impl Simulation {
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        Self {
            bounds,
            bodies: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            spawn: SpawnParams::default(),
            time_ticks: 0,
        }
    }

    /// Build from config, including any pre-placed bodies
    pub fn from_config(config: &BounceConfig) -> Self {
        let mut sim = Self::new(Bounds::new(config.width, config.height), config.seed);
        let (mut min_radius, mut max_radius) = (config.min_radius, config.max_radius);
        if min_radius > max_radius {
            log::warn!("min_radius {min_radius} > max_radius {max_radius}; swapping");
            std::mem::swap(&mut min_radius, &mut max_radius);
        }
        sim.spawn = SpawnParams {
            speed: config.circle_speed,
            min_radius: min_radius.max(1),
            max_radius: max_radius.max(1),
            ..SpawnParams::default()
        };
        for body in &config.bodies {
            sim.push(body.clone());
        }
        sim
    }

    pub fn add_body(
        &mut self,
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
        radius: f64,
        color: Color,
    ) -> BodyHandle {
        self.push(Body::new(x, y, vx, vy, radius, color))
    }

    pub fn push(&mut self, body: Body) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    /// Spawn a circle with random position, heading, radius and color
    ///
    /// Reversed ranges in `spawn` are read as their swapped form.
    pub fn spawn_random(&mut self) -> BodyHandle {
        let params = self.spawn.normalized();
        let x = self.rng.random_range(0..=self.bounds.width as u32) as f64;
        let y = self.rng.random_range(0..=self.bounds.height as u32) as f64;
        let heading: f64 = self.rng.random_range(0.0..360.0);
        let (sin, cos) = heading.to_radians().sin_cos();
        let radius = self.rng.random_range(params.min_radius..=params.max_radius) as f64;
        let color = Color(self.rng.random_range(params.min_color..=params.max_color));

        let handle = self.add_body(
            x,
            y,
            cos * params.speed,
            sin * params.speed,
            radius,
            color,
        );
        log::info!(
            "Spawned circle #{} at ({x}, {y}) r={radius} heading={heading:.1}°",
            handle.index()
        );
        handle
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance one tick: move, contain, then resolve pairs in `(i, j)` order
    ///
    /// Pairs are resolved one after another, so a correction on `(i, j)` is
    /// visible to every later pair involving `i` or `j` in the same step.
    pub fn step(&mut self) -> StepStats {
        let mut stats = StepStats::default();

        for body in &mut self.bodies {
            body.advance();
        }
        for body in &mut self.bodies {
            if bounce_wall(body, self.bounds).any() {
                stats.wall_hits += 1;
            }
        }

        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if bounce_off(a, b) {
                    stats.contacts += 1;
                }
            }
        }

        self.time_ticks += 1;
        if stats.contacts > 0 {
            log::debug!(
                "tick {}: {} contacts, {} wall hits",
                self.time_ticks,
                stats.contacts,
                stats.wall_hits
            );
        }
        stats
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.cls(Color::BLACK);
        for body in &self.bodies {
            body.draw(canvas);
        }
    }
}

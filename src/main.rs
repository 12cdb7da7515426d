//! Retro Demos entry point
//!
//! Runs one demo headless for a fixed number of frames, drawing into a vertex
//! batch each frame the way a host toolkit would before presenting.
//!
//! Usage: `retro-demos [bounce|shapes|pivot|sprite] [config.json]`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use retro_demos::DemoConfig;
use retro_demos::renderer::{Canvas, VertexBatch};
use retro_demos::sim::{Simulation, TickInput, TickOutcome, tick};
use retro_demos::sprite::SpriteAnimation;
use retro_demos::transform::{PivotDemo, PivotStage, ShapesDemo};

/// Frames to run before exiting
const FRAMES: u64 = 600;
/// Bounce demo: spawn a circle every this many frames
const SPAWN_INTERVAL: u64 = 30;
/// Pivot demo: advance to the next stage every this many frames
const STAGE_INTERVAL: u64 = 90;

/// Which demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    /// Bouncing circles with random spawns
    #[value(alias = "circles")]
    Bounce,
    /// Pulsing, spinning transformed shapes
    Shapes,
    /// Staged pivot-rotation walkthrough
    Pivot,
    /// Sprite-sheet frame cycling
    #[value(alias = "mario")]
    Sprite,
}

#[derive(Debug, Parser)]
#[command(
    name = "retro-demos",
    about = "Run a retro canvas demo headless for a fixed number of frames"
)]
struct Args {
    /// Demo to run
    #[arg(value_enum, ignore_case = true, default_value_t = Demo::Bounce)]
    demo: Demo,

    /// JSON config file (defaults are used when absent or unreadable)
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Args { demo, config } = Args::parse();
    let config = DemoConfig::load_or_default(config.as_deref());

    log::info!("Running {demo:?} demo for {FRAMES} frames");
    let mut batch = VertexBatch::new();
    match demo {
        Demo::Bounce => run_bounce(&config, &mut batch),
        Demo::Shapes => run_shapes(&config, &mut batch),
        Demo::Pivot => run_pivot(&config, &mut batch),
        Demo::Sprite => run_sprite(&config),
    }
    log::info!(
        "Last frame: {} triangles ({} bytes)",
        batch.triangle_count(),
        batch.as_bytes().len()
    );
}

fn run_bounce(config: &DemoConfig, canvas: &mut impl Canvas) {
    let mut sim = Simulation::from_config(&config.bounce);
    let mut contacts = 0;

    for frame in 0..FRAMES {
        let input = TickInput {
            spawn: frame % SPAWN_INTERVAL == 0,
            quit: frame + 1 == FRAMES,
        };
        match tick(&mut sim, &input) {
            TickOutcome::Continue(stats) => contacts += stats.contacts,
            TickOutcome::Quit => break,
        }
        sim.draw(canvas);
    }

    log::info!(
        "{} circles after {} ticks, {contacts} contacts resolved",
        sim.len(),
        sim.time_ticks
    );
}

fn run_shapes(config: &DemoConfig, canvas: &mut impl Canvas) {
    let mut demo = ShapesDemo::new(&config.shapes);
    for _ in 0..FRAMES {
        demo = demo.update();
        demo.draw(canvas);
    }
    log::info!("Final angle {:.3} rad", demo.angle);
}

fn run_pivot(config: &DemoConfig, canvas: &mut impl Canvas) {
    let mut demo = PivotDemo::new(&config.pivot, PivotStage::default());
    for frame in 0..FRAMES {
        if frame > 0 && frame % STAGE_INTERVAL == 0 {
            let stage = demo.stage.next();
            log::info!("Stage {stage:?}");
            demo = demo.with_stage(stage);
        }
        demo = demo.update();
        demo.draw(canvas);
    }
}

fn run_sprite(config: &DemoConfig) {
    let mut anim = SpriteAnimation::from_config(&config.sprite);
    let mut last = None;
    for frame_count in 0..FRAMES {
        anim.update(frame_count);
        if last != Some(anim.frame()) {
            log::debug!("frame {frame_count}: {:?}", anim.source_rect());
            last = Some(anim.frame());
        }
    }
    log::info!("Sprite ended on frame {}", anim.frame());
}

//! `oscillume` - animate an LC oscillator or a pendulum.
//!
//! ```text
//! oscillume oscillator --period 2
//! oscillume pendulum --period 2 --amplitude 30 --block-size 1
//! oscillume --frames 40 --snapshot out.png oscillator --period 2
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glam::IVec2;
use tracing_subscriber::EnvFilter;

use oscillume::app;
use oscillume::config::{
    OscillatorConfig, PendulumConfig, RenderConfig, DEFAULT_BLOCK_SIZE, DEFAULT_FIXED_DT,
};
use oscillume::error::AppError;
use oscillume::scene::{Scene, Visual};

#[derive(Parser, Debug)]
#[command(name = "oscillume")]
#[command(about = "Closed-form oscillators rendered as radial glows")]
struct Args {
    #[command(subcommand)]
    visual: VisualArgs,

    /// Simulated seconds per tick.
    #[arg(long, global = true, default_value_t = DEFAULT_FIXED_DT)]
    dt: f64,

    /// Side of the square pixel blocks sampled by the rasterizer (1 = per pixel).
    #[arg(long, global = true, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: u32,

    /// Surface width in pixels.
    #[arg(long, global = true, default_value_t = 800)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, global = true, default_value_t = 400)]
    height: u32,

    /// Run this many ticks without a window and exit.
    #[arg(long, global = true)]
    frames: Option<u64>,

    /// PNG written after a headless run.
    #[arg(long, global = true, requires = "frames")]
    snapshot: Option<PathBuf>,

    /// Directory for snapshots taken with `S` in the window.
    #[arg(long, global = true, default_value = "snapshots")]
    snapshot_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
enum VisualArgs {
    /// LC circuit: charge and current discs.
    Oscillator {
        /// Period in seconds.
        #[arg(long)]
        period: f64,

        /// Charge amplitude.
        #[arg(long, default_value_t = 30.0)]
        max_charge: f64,
    },
    /// Pendulum swinging along its arc.
    Pendulum {
        /// Period in seconds.
        #[arg(long)]
        period: f64,

        /// Swing half-angle in degrees.
        #[arg(long)]
        amplitude: f64,

        /// Rope length in pixels.
        #[arg(long, default_value_t = 300.0)]
        rope: f64,
    },
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let render = RenderConfig::default()
        .with_size(args.width, args.height)
        .with_sample_block_size(args.block_size)
        .with_fixed_dt(args.dt);

    let visual = match args.visual {
        VisualArgs::Oscillator { period, max_charge } => Visual::oscillator(
            &OscillatorConfig::new(period).with_maximal_charge(max_charge),
            &render,
        )?,
        VisualArgs::Pendulum {
            period,
            amplitude,
            rope,
        } => Visual::pendulum(
            &PendulumConfig::new(period, amplitude)
                .with_fulcrum(IVec2::new(args.width as i32 / 2, 0))
                .with_length_of_rope(rope),
        )?,
    };
    let scene = Scene::new(visual, &render)?;

    match args.frames {
        Some(frames) => {
            app::run_headless(scene, frames, args.snapshot.as_deref())?;
            Ok(())
        }
        None => app::run(scene, args.snapshot_dir),
    }
}

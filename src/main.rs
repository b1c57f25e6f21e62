//! Drag-free projectile calculator.
//!
//! Prints the closed-form flight parameters and renders the trajectory as an
//! animated GIF, one frame per sample.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use dragless_projectile::core::{sample, summarize};
use dragless_projectile::input::LaunchArgs;
use dragless_projectile::logging::init_tracing;
use dragless_projectile::render::GifSink;
use tracing::{info, warn};

/// Flight time, apex and range of a drag-free projectile
#[derive(Parser)]
#[command(name = "dragless_projectile")]
#[command(about = "Closed-form flight of a drag-free projectile, animated to a GIF")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    launch: LaunchArgs,

    /// Animation output path (defaults to a timestamped GIF in the working directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the flight report without rendering the animation
    #[arg(long)]
    no_animate: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory_{}.gif",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.launch.config();
    let engine = config.engine()?;
    info!(
        gravity_source = cli.launch.gravity_source(),
        gravity_mps2 = engine.gravity_mps2(),
        "Using gravity"
    );

    let conditions = cli
        .launch
        .conditions(&mut io::stdin().lock(), &mut io::stdout())?;
    let metrics = engine.compute_flight_metrics(&conditions)?;
    if let Some(case) = metrics.degenerate_case() {
        warn!(%case, "Degenerate flight");
    }

    println!("\n{}", summarize(&metrics));

    if cli.no_animate {
        return Ok(());
    }

    let samples = sample(
        &engine,
        &conditions,
        &metrics,
        conditions.velocity(),
        config.step_count,
    );
    let output = cli.output.unwrap_or_else(default_output_path);
    let mut sink = GifSink::create(&output, config.frame_delay)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let frames = config.animator().animate(samples, &metrics, &mut sink)?;
    info!(frames, path = %output.display(), "Done");

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

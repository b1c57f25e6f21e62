use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use dragless_projectile::core::{Playback, TrajectorySamples, sample, summarize};
use dragless_projectile::input::LaunchArgs;
use dragless_projectile::logging::init_tracing;
use macroquad::prelude::*;
use tracing::{info, warn};

use crate::constants::{INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES};
use crate::render::draw_frame;

/// Live view of a drag-free projectile flight
#[derive(Parser)]
#[command(name = "trajectory_viewer")]
#[command(about = "Animates a drag-free projectile flight in a window")]
#[command(version)]
struct ViewerCli {
    #[command(flatten)]
    launch: LaunchArgs,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Dragless Projectile".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

/// Everything the window needs, gathered before it opens.
pub(crate) struct Launch {
    playback: Playback<TrajectorySamples>,
    frame_delay: Duration,
}

/// Reads the launch on the terminal and prints the report. Runs before
/// macroquad starts so prompting never blocks a blank window.
pub(crate) fn prepare() -> Result<Launch> {
    let cli = ViewerCli::parse();
    init_tracing(cli.verbose);

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

    let animator = config.animator();
    let samples = sample(
        &engine,
        &conditions,
        &metrics,
        conditions.velocity(),
        config.step_count,
    );
    info!(
        flight_time_s = metrics.flight_time_s,
        delay_ms = animator.frame_delay().as_millis() as u64,
        "Starting live trajectory animation"
    );

    Ok(Launch {
        playback: animator.playback(samples, &metrics),
        frame_delay: animator.frame_delay(),
    })
}

// macroquad owns the frame loop and yields through `next_frame().await`, which a
// blocking `RenderSink::pause` cannot do, so the window steps `Playback` itself.
pub(crate) async fn run(launch: Launch) {
    let Launch {
        mut playback,
        frame_delay,
    } = launch;
    let delay_s = frame_delay.as_secs_f32();
    let mut since_last_frame = 0.0f32;
    let mut finished = playback.advance().is_none();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        if !finished {
            since_last_frame += get_frame_time();
            while since_last_frame >= delay_s {
                since_last_frame -= delay_s;
                if playback.advance().is_none() {
                    finished = true;
                    info!(
                        frames = playback.frames_rendered(),
                        "Final frame reached, close the window or press Escape to exit"
                    );
                    break;
                }
            }
        }

        if let Some(frame) = playback.current() {
            draw_frame(&frame, screen_width(), screen_height());
        }

        next_frame().await;
    }
}

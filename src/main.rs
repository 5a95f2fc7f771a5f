//! Breakout entry point
//!
//! Runs one round headlessly: an autopilot plays, frames go to an in-memory
//! draw list and sounds to the log.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use breakout::audio::{AudioManager, LogSink};
use breakout::driver::{Autopilot, RunConfig, run_headless};
use breakout::renderer::DrawList;
use breakout::{Game, Settings};

const AUTOPILOT_SEED: u64 = 0x0B7E_A4D0;

#[derive(Parser, Debug)]
#[command(name = "breakout")]
#[command(about = "Play one Breakout round with the built-in autopilot")]
struct Cli {
    /// Render the frame-rate overlay
    #[arg(long)]
    print_fps: bool,

    /// Master sound volume, clamped to 0.0..=1.0 (0 mutes)
    #[arg(long, default_value_t = 0.8)]
    volume: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Breakout (headless) starting, fps overlay: {}", cli.print_fps);

    let settings = Settings::with_fps(cli.print_fps);
    let mut audio = AudioManager::new(Arc::new(LogSink));
    audio.set_master_volume(cli.volume);
    let mut game = Game::new(settings, audio).context("failed to set up the round")?;

    let mut renderer = DrawList::new();
    let mut pilot = Autopilot::new(AUTOPILOT_SEED);
    let summary = run_headless(&mut game, &mut renderer, &mut pilot, &RunConfig::default());

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("failed to encode run summary")?
    );
    Ok(())
}

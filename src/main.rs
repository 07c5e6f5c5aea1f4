//! Touch Target entry point
//!
//! Runs a headless session steered by the autopilot and reports the final
//! score. Pass `--realtime` to pace frames at the configured rate.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use touch_target::GameConfig;
use touch_target::engine::HeadlessHost;
use touch_target::sim::{Game, autopilot};

#[derive(Parser, Debug)]
#[command(name = "touch-target", about = "Steer the player into the target")]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed (overrides the config)
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to run before ending the session
    #[arg(long, default_value_t = 900)]
    frames: u64,
    /// Sleep between frames to hold the target frame rate
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let frame_duration = config.frame_duration();

    log::info!("Touch Target (headless) starting...");
    let mut game = Game::new(config, seed);
    let mut host = HeadlessHost::default();
    host.start(&mut game);

    let mut report = None;
    for _ in 0..args.frames {
        let frame_start = Instant::now();
        let held = game.level().map(autopilot::steer).unwrap_or(0);

        report = host.run_frame(&mut game, held);
        if report.is_some() {
            break;
        }

        if args.realtime {
            // Best effort: late frames are not made up
            if let Some(rest) = frame_duration.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    let report = match report {
        Some(report) => report,
        None => host
            .terminate(&mut game)
            .context("session ended without a running game")?,
    };
    println!("{report} (seed {}, {} frames)", game.seed(), host.frame());
    Ok(())
}

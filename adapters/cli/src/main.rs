#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Paper Rally race in the terminal.

mod board;
mod input;
mod session;
mod track_file;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use paper_rally_core::RaceConfig;
use paper_rally_system_turn::TurnController;
use paper_rally_world::{query, Track, TrackDefinition};

/// Turn-based vector racing on grid paper.
#[derive(Debug, Parser)]
#[command(name = "paper-rally", version)]
struct Args {
    /// TOML track file; the built-in rally circuit is used when omitted.
    #[arg(long)]
    track: Option<PathBuf>,
    /// Apply each turn's acceleration after the racer has moved.
    #[arg(long)]
    delayed: bool,
    /// Whitespace-separated `x,y` selections to play instead of reading stdin.
    #[arg(long)]
    moves: Option<String>,
}

/// Entry point for the Paper Rally command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let (definition, mut config) = match &args.track {
        Some(path) => track_file::load(path)?,
        None => (TrackDefinition::rally(), RaceConfig::default()),
    };
    if args.delayed {
        config.delayed_acceleration = true;
    }

    let track = Track::load(&definition).context("track definition is invalid")?;
    log::info!(
        "loaded {}x{} track with waypoints {:?}",
        track.width(),
        track.height(),
        track.waypoints()
    );
    let mut controller = TurnController::new(track, config);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    writeln!(output, "{}", query::welcome_banner(controller.world()))?;

    match args.moves {
        Some(script) => {
            let moves = input::parse_moves(&script).context("invalid --moves script")?;
            session::run_script(&mut controller, &moves, &mut output)?;
        }
        None => {
            let stdin = io::stdin();
            session::run_interactive(&mut controller, stdin.lock(), &mut output)?;
        }
    }

    output.flush()?;
    Ok(())
}

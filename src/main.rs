//! Terminal Tetris runner (default binary).
//!
//! Puts the terminal in raw mode, runs the fixed-cadence game loop with
//! crossterm input, and prints "Game Over!" once a new piece has no room.

mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use text_tetris::core::{GameState, PiecePicker};
use text_tetris::engine::{Exit, GameLoop};
use text_tetris::input::CrosstermInput;
use text_tetris::term::TerminalRenderer;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible piece sequence
    #[clap(long)]
    seed: Option<u64>,
    /// Write log records to this file
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Minimum level of logged records
    #[clap(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        logging::init_log(args.log_level, path)?;
    }

    let state = match args.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::with_picker(PiecePicker::from_os_rng()),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut game = GameLoop::new(state, CrosstermInput::new(), term);
    let result = game.run();

    // Always try to restore terminal state.
    let (_, _, mut term) = game.into_parts();
    if let Err(err) = term.exit() {
        log::warn!("failed to restore terminal: {err:#}");
    }

    if result? == Exit::GameOver {
        println!("Game Over!");
    }
    Ok(())
}

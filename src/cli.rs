//! Command-line interface for the gomoku binary.

use std::path::PathBuf;

use clap::Parser;

use crate::advisor::Advisor;
use crate::error::Result;
use crate::save::{self, DEFAULT_SAVE_FILE};
use crate::session::{GameSession, COMPUTER_NAME};

/// Five-in-a-row on an 8x8 board
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row on an 8x8 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of player one (moves first, plays X). "C" is the computer.
    #[arg(short = '1', long, default_value = "Player")]
    pub player_one: String,

    /// Name of player two (plays O). "C" is the computer.
    #[arg(short = '2', long, default_value = COMPUTER_NAME)]
    pub player_two: String,

    /// Resume a saved game instead of starting a new one
    #[arg(short, long)]
    pub load: Option<PathBuf>,

    /// Where in-game saves are written
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    pub save_file: PathBuf,

    /// Seed for the computer player's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in the terminal instead of opening a window
    #[arg(long)]
    pub console: bool,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Cli {
    /// The session to start with: loaded from `--load` or fresh
    pub fn session(&self) -> Result<GameSession> {
        match &self.load {
            Some(path) => save::load(save::resolve_path(&path.to_string_lossy())),
            None => GameSession::new(&self.player_one, &self.player_two),
        }
    }

    pub fn advisor(&self) -> Advisor {
        match self.seed {
            Some(seed) => Advisor::seeded(seed),
            None => Advisor::new(),
        }
    }
}

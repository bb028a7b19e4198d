//! Save-file format and storage
//!
//! A save is eleven lines of plain text:
//!
//! ```text
//! Ada            <- player one name
//! C              <- player two name
//! 2              <- whose turn, 1 or 2
//! 1,0,0,0,0,0,0,0
//! ...            <- eight rows of eight cells, 0 empty / 1 / 2
//! 0,0,0,0,0,0,0,0
//! ```
//!
//! Anything after the last row other than blank lines is rejected.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{info, instrument, warn};

use crate::board::{Board, Cell, Player, BOARD_SIZE};
use crate::error::{GameError, Result};
use crate::session::GameSession;

/// File used when no name is given
pub const DEFAULT_SAVE_FILE: &str = "game.txt";

/// Header lines before the board rows
const HEADER_LINES: usize = 3;

/// Parsed save record, before any game logic is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    pub player_one: String,
    pub player_two: String,
    pub turn: Player,
    pub board: Board,
}

impl FromStr for SavedGame {
    type Err = GameError;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));
        let mut next_line = |number: usize| {
            lines
                .next()
                .ok_or_else(|| GameError::malformed(number, "unexpected end of file"))
        };

        let player_one = parse_name(next_line(1)?, 1)?;
        let player_two = parse_name(next_line(2)?, 2)?;
        let turn = parse_turn(next_line(3)?, 3)?;

        let mut rows = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            let number = HEADER_LINES + r + 1;
            *row = parse_row(next_line(number)?, number)?;
        }

        let trailing = HEADER_LINES + BOARD_SIZE + 1;
        if let Some(offset) = lines.position(|l| !l.trim().is_empty()) {
            return Err(GameError::malformed(
                trailing + offset,
                "unexpected content after the board",
            ));
        }

        Ok(SavedGame {
            player_one,
            player_two,
            turn,
            board: Board::from_rows(&rows),
        })
    }
}

impl fmt::Display for SavedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.player_one)?;
        writeln!(f, "{}", self.player_two)?;
        writeln!(f, "{}", self.turn.tag())?;
        for row in self.board.rows() {
            let cells: Vec<String> = row.iter().map(|c| c.digit().to_string()).collect();
            writeln!(f, "{}", cells.join(","))?;
        }
        Ok(())
    }
}

fn parse_name(line: &str, number: usize) -> Result<String> {
    let name = line.trim();
    if name.is_empty() {
        return Err(GameError::malformed(number, "player name is empty"));
    }
    Ok(name.to_string())
}

fn parse_turn(line: &str, number: usize) -> Result<Player> {
    line.trim()
        .parse::<u8>()
        .ok()
        .and_then(Player::from_tag)
        .ok_or_else(|| GameError::malformed(number, format!("turn must be 1 or 2, found '{line}'")))
}

fn parse_row(line: &str, number: usize) -> Result<[Cell; BOARD_SIZE]> {
    let values: Vec<&str> = line.split(',').collect();
    if values.len() != BOARD_SIZE {
        return Err(GameError::malformed(
            number,
            format!("expected {BOARD_SIZE} values, found {}", values.len()),
        ));
    }

    let mut row = [Cell::Empty; BOARD_SIZE];
    for (cell, raw) in row.iter_mut().zip(values) {
        *cell = raw
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Cell::from_digit)
            .ok_or_else(|| GameError::malformed(number, format!("invalid cell value '{raw}'")))?;
    }
    Ok(row)
}

/// Blank input means [`DEFAULT_SAVE_FILE`]
pub fn resolve_path(text: &str) -> PathBuf {
    let text = text.trim();
    if text.is_empty() {
        PathBuf::from(DEFAULT_SAVE_FILE)
    } else {
        PathBuf::from(text)
    }
}

/// Read and rebuild a session. Nothing partial is ever returned.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<GameSession> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GameError::SaveNotFound(path.to_path_buf()),
        _ => GameError::Io(e),
    })?;

    let saved = text.parse::<SavedGame>().inspect_err(|e| {
        warn!(error = %e, "rejecting save file");
    })?;
    let session = GameSession::from_saved(saved)?;
    info!("game loaded");
    Ok(session)
}

/// Write `session` to `path`, replacing any existing file
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn store(session: &GameSession, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path.as_ref(), session.to_saved().to_string())?;
    info!("game saved");
    Ok(())
}

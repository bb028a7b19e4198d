//! Error type shared by the whole engine

use std::path::PathBuf;

use crate::board::Pos;

/// Everything that can go wrong while building or playing a game.
///
/// All variants are recoverable: the caller re-prompts or reports, the
/// session is never left half-updated.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid coordinate '{0}' (expected a letter a-h and a digit 1-8)")]
    InvalidCoordinate(String),

    #[error("player name must not be empty")]
    EmptyName,

    #[error("player name {0:?} must fit on one line")]
    InvalidName(String),

    #[error("cell {0} is already occupied")]
    OccupiedCell(Pos),

    #[error("the game is already over")]
    GameOver,

    #[error("malformed save file at line {line}: {reason}")]
    MalformedSave { line: usize, reason: String },

    #[error("save file not found: {}", .0.display())]
    SaveNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        GameError::MalformedSave {
            line,
            reason: reason.into(),
        }
    }
}

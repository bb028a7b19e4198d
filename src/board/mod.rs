//! Board representation for 8x8 Gomoku

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Column letters used by the human notation, left to right
const COLUMN_LETTERS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, tag 1, drawn as `X`
    One,
    /// Tag 2, drawn as `O`
    Two,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Integer tag used on disk and in prompts (1 or 2)
    #[inline]
    pub fn tag(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Player> {
        match tag {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Cell state this player leaves on the board
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// Symbol used by the text renderer
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// State of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Owner of the cell, `None` when empty
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    /// Digit written to save files (0, 1 or 2)
    pub fn digit(self) -> u8 {
        self.player().map_or(0, Player::tag)
    }

    pub fn from_digit(digit: u8) -> Option<Cell> {
        match digit {
            0 => Some(Cell::Empty),
            other => Player::from_tag(other).map(Player::cell),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `steps` cells along `(dr, dc)`, `None` once off the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Pos> {
        let r = self.row as i32 + dr * steps;
        let c = self.col as i32 + dc * steps;
        Pos::is_valid(r, c).then(|| Pos::new(r as u8, c as u8))
    }

    /// All 64 positions in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }

    /// Parse human notation such as `"c4"`.
    ///
    /// Case and whitespace are ignored and the digit may come first, so
    /// `"C 4"` and `"4c"` are the same cell. The digit is the row (1-8,
    /// top to bottom) and the letter the column (a-h, left to right).
    pub fn from_notation(text: &str) -> Result<Pos, GameError> {
        let invalid = || GameError::InvalidCoordinate(text.to_string());

        let chars: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        let (letter, digit) = match chars.as_slice() {
            [a, b] if a.is_ascii_digit() => (*b, *a),
            [a, b] => (*a, *b),
            _ => return Err(invalid()),
        };

        let row = digit
            .to_digit(10)
            .filter(|d| (1..=BOARD_SIZE as u32).contains(d))
            .ok_or_else(invalid)?;
        let col = COLUMN_LETTERS
            .iter()
            .position(|&l| l == letter)
            .ok_or_else(invalid)?;

        Ok(Pos::new(row as u8 - 1, col as u8))
    }

    /// Canonical human notation, column letter first (`(0, 0)` is `"a1"`)
    pub fn to_notation(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMN_LETTERS[self.col as usize], self.row + 1)
    }
}

impl FromStr for Pos {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pos::from_notation(s)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

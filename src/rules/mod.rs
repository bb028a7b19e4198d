//! Game rules for 8x8 Gomoku
//!
//! - Placement rules (single occupancy, legal move enumeration)
//! - Win condition (five or more in a row, any of the four directions)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply_move, is_valid_move, valid_moves};
pub use win::{check_winner, find_winning_line, has_won, lines, Direction, Line, WIN_LENGTH};

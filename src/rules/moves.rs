//! Move enumeration and application

use crate::board::{Board, Player, Pos};
use crate::error::{GameError, Result};

/// All empty cells in row-major scan order.
///
/// The order is part of the contract: the advisor probes candidates in
/// exactly this order.
pub fn valid_moves(board: &Board) -> Vec<Pos> {
    board.empty_cells().collect()
}

/// A move is legal iff its cell is empty
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}

/// Put `player`'s stone on `pos`.
///
/// Fails with [`GameError::OccupiedCell`] instead of overwriting a stone;
/// the board is untouched in that case.
pub fn apply_move(board: &mut Board, pos: Pos, player: Player) -> Result<()> {
    if !is_valid_move(board, pos) {
        return Err(GameError::OccupiedCell(pos));
    }
    board.place_stone(pos, player);
    Ok(())
}

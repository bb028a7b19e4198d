//! Board structure

use super::bitboard::{Bitboard, BitboardIter};
use super::{Cell, Player, Pos, BOARD_SIZE};

/// Game board, one occupancy mask per player
///
/// `Copy` so that probing a move is a plain value copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// Player one stones
    one: Bitboard,
    /// Player two stones
    two: Bitboard,
}

impl Board {
    /// Empty board
    pub const fn new() -> Self {
        Self {
            one: Bitboard::new(),
            two: Bitboard::new(),
        }
    }

    /// Build a board from eight rows of cells
    pub fn from_rows(rows: &[[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                board.set_cell(Pos::new(r as u8, c as u8), cell);
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.one.get(pos) {
            Cell::PlayerOne
        } else if self.two.get(pos) {
            Cell::PlayerTwo
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.occupied().get(pos)
    }

    /// Place a stone without any occupancy check.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        self.set_cell(pos, player.cell());
    }

    /// Overwrite a cell with any state, including `Empty`
    pub fn set_cell(&mut self, pos: Pos, cell: Cell) {
        self.one.clear(pos);
        self.two.clear(pos);
        match cell {
            Cell::PlayerOne => self.one.set(pos),
            Cell::PlayerTwo => self.two.set(pos),
            Cell::Empty => {}
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.one.union(self.two)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> BitboardIter {
        self.occupied().iter_zeros()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied().count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == BOARD_SIZE * BOARD_SIZE
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for pos in Pos::all() {
            rows[pos.row as usize][pos.col as usize] = self.get(pos);
        }
        rows
    }
}

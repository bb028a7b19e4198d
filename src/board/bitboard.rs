//! Single-word bitboard covering the whole 8x8 board

use super::{Pos, TOTAL_CELLS};

/// One bit per cell, bit `row * 8 + col`
/// 64 cells fit exactly in a u64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.0 |= 1u64 << pos.to_index();
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.0 &= !(1u64 << pos.to_index());
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.0 >> pos.to_index()) & 1 == 1
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Union of two boards
    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0 | other.0)
    }

    /// Iterate over clear positions in row-major order
    pub fn iter_zeros(&self) -> BitboardIter {
        BitboardIter { word: !self.0 }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    word: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.word == 0 {
            return None;
        }

        // Lowest set bit is the next cell in scan order
        let idx = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.word.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

//! Move suggestion for the computer player
//!
//! The advisor looks exactly one ply ahead. Candidates are taken from
//! [`valid_moves`] in scan order and tried on a copy of the board:
//!
//! 1. **Immediate win**: the first move that completes a five
//! 2. **Block**: the first move that would complete a five for the opponent
//! 3. **Random**: otherwise a uniformly random empty cell
//!
//! # Example
//!
//! ```
//! use gomoku::{Advisor, Board, Player, Pos, SuggestionKind};
//!
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.place_stone(Pos::new(2, col), Player::One);
//! }
//!
//! let mut advisor = Advisor::seeded(7);
//! let suggestion = advisor.suggest_move(&board, Player::One).unwrap();
//! assert_eq!(suggestion.pos, Pos::new(2, 4));
//! assert_eq!(suggestion.kind, SuggestionKind::ImmediateWin);
//! ```

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::board::{Board, Player, Pos};
use crate::rules::{has_won, valid_moves};

/// Which rule produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Playing here wins on the spot
    ImmediateWin,
    /// The opponent would win here next turn
    Block,
    /// Nothing urgent, picked at random
    Random,
}

/// A suggested move together with the reason for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub pos: Pos,
    pub kind: SuggestionKind,
}

/// One-ply heuristic player.
///
/// The random source is injected so tests can pin the fallback choice:
///
/// ```
/// use gomoku::{Advisor, Board, Player};
///
/// let board = Board::new();
/// let a = Advisor::seeded(42).suggest_move(&board, Player::Two);
/// let b = Advisor::seeded(42).suggest_move(&board, Player::Two);
/// assert_eq!(a, b);
/// ```
pub struct Advisor<R = SmallRng> {
    rng: R,
}

impl Advisor<SmallRng> {
    /// Advisor seeded from OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Deterministic advisor, same seed gives the same fallback moves
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Advisor<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Advisor<R> {
    /// Advisor drawing its fallback moves from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Suggest a move for `player`.
    ///
    /// Returns `None` only when the board is full. The board itself is
    /// never modified; every probe runs on a copy.
    #[instrument(skip(self, board), fields(stones = board.stone_count()))]
    pub fn suggest_move(&mut self, board: &Board, player: Player) -> Option<Suggestion> {
        let candidates = valid_moves(board);
        if candidates.is_empty() {
            debug!("board is full, nothing to suggest");
            return None;
        }

        // 1. Our own immediate win
        if let Some(pos) = find_completing_move(board, &candidates, player) {
            debug!(%pos, "immediate win");
            return Some(Suggestion {
                pos,
                kind: SuggestionKind::ImmediateWin,
            });
        }

        // 2. Opponent's immediate win, take the cell first
        if let Some(pos) = find_completing_move(board, &candidates, player.opponent()) {
            debug!(%pos, "blocking opponent five");
            return Some(Suggestion {
                pos,
                kind: SuggestionKind::Block,
            });
        }

        // 3. Random fallback
        let pos = *candidates.choose(&mut self.rng)?;
        debug!(%pos, "random move");
        Some(Suggestion {
            pos,
            kind: SuggestionKind::Random,
        })
    }
}

/// First candidate that gives `player` five in a row.
fn find_completing_move(board: &Board, candidates: &[Pos], player: Player) -> Option<Pos> {
    candidates.iter().copied().find(|&pos| {
        let mut probe = *board;
        probe.place_stone(pos, player);
        has_won(&probe, player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;

    fn board_with(one: &[(u8, u8)], two: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(r, c) in one {
            board.place_stone(Pos::new(r, c), Player::One);
        }
        for &(r, c) in two {
            board.place_stone(Pos::new(r, c), Player::Two);
        }
        board
    }

    #[test]
    fn test_finds_unique_winning_move() {
        // O O O O . on column 5, blocked at the top by X
        let board = board_with(&[(0, 5), (6, 0)], &[(1, 5), (2, 5), (3, 5), (4, 5)]);
        let suggestion = Advisor::seeded(1).suggest_move(&board, Player::Two).unwrap();
        assert_eq!(suggestion.pos, Pos::new(5, 5));
        assert_eq!(suggestion.kind, SuggestionKind::ImmediateWin);
    }

    #[test]
    fn test_first_win_in_scan_order() {
        // Open four on row 3, both ends win; (3, 1) comes first
        let board = board_with(&[(3, 2), (3, 3), (3, 4), (3, 5)], &[]);
        let suggestion = Advisor::seeded(1).suggest_move(&board, Player::One).unwrap();
        assert_eq!(suggestion.pos, Pos::new(3, 1));
    }

    #[test]
    fn test_blocks_unique_opponent_win() {
        // X X X X on the anti-diagonal, only (3, 4) remains
        let board = board_with(&[(7, 0), (6, 1), (5, 2), (4, 3)], &[(2, 5)]);
        let suggestion = Advisor::seeded(1).suggest_move(&board, Player::Two).unwrap();
        assert_eq!(suggestion.pos, Pos::new(3, 4));
        assert_eq!(suggestion.kind, SuggestionKind::Block);
    }

    #[test]
    fn test_win_beats_block() {
        // Both sides have four; the mover should finish its own line
        let board = board_with(
            &[(0, 0), (0, 1), (0, 2), (0, 3)],
            &[(7, 0), (7, 1), (7, 2), (7, 3)],
        );
        let suggestion = Advisor::seeded(1).suggest_move(&board, Player::Two).unwrap();
        assert_eq!(suggestion.pos, Pos::new(7, 4));
        assert_eq!(suggestion.kind, SuggestionKind::ImmediateWin);
    }

    #[test]
    fn test_random_fallback_is_legal_and_reproducible() {
        let board = board_with(&[(3, 3)], &[(4, 4)]);
        let legal = valid_moves(&board);

        let mut a = Advisor::seeded(99);
        let mut b = Advisor::seeded(99);
        for _ in 0..50 {
            let sa = a.suggest_move(&board, Player::One).unwrap();
            let sb = b.suggest_move(&board, Player::One).unwrap();
            assert_eq!(sa, sb);
            assert_eq!(sa.kind, SuggestionKind::Random);
            assert!(legal.contains(&sa.pos));
        }
    }

    #[test]
    fn test_board_not_modified() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], &[(5, 5)]);
        let before = board;
        let _ = Advisor::seeded(3).suggest_move(&board, Player::One);
        let _ = Advisor::seeded(3).suggest_move(&board, Player::Two);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_suggestion() {
        let mut board = Board::new();
        for pos in Pos::all() {
            let player = if (pos.col / 2 + pos.row) % 2 == 0 { Player::One } else { Player::Two };
            board.place_stone(pos, player);
        }
        assert_eq!(Advisor::seeded(0).suggest_move(&board, Player::One), None);
    }

    #[test]
    fn test_self_play_always_legal() {
        let mut advisor = Advisor::seeded(2024);
        let mut board = Board::new();
        let mut player = Player::One;
        while let Some(s) = advisor.suggest_move(&board, player) {
            apply_move(&mut board, s.pos, player).unwrap();
            if has_won(&board, player) {
                break;
            }
            player = player.opponent();
        }
        assert!(board.stone_count() >= 9);
    }
}

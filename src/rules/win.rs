//! Win condition checking
//!
//! A player wins with five or more of their stones in a row, horizontally,
//! vertically or on either diagonal. Every line of the board that is long
//! enough to hold five is produced by [`lines`], and a single scan walks
//! each of them.

use crate::board::{Board, Player, Pos};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// The four line families, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
    /// Bottom-left to top-right
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// (row, col) step between consecutive cells
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }
}

/// A maximal straight segment of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Pos,
    pub direction: Direction,
    pub len: u8,
}

impl Line {
    /// Cells of the line from `start` onwards
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        let (dr, dc) = self.direction.delta();
        (0..self.len as i32).filter_map(move |i| self.start.offset(dr, dc, i))
    }
}

/// Every maximal line in `direction` with room for a five.
///
/// A line starts on the first cell whose predecessor falls off the board;
/// starts are visited in row-major order. On 8x8 this gives 8 rows,
/// 8 columns and 7 lines for each diagonal family.
pub fn lines(direction: Direction) -> impl Iterator<Item = Line> {
    let (dr, dc) = direction.delta();
    Pos::all()
        .filter(move |p| p.offset(-dr, -dc, 1).is_none())
        .map(move |start| {
            let len = (0..)
                .take_while(|&i| start.offset(dr, dc, i).is_some())
                .count();
            Line {
                start,
                direction,
                len: len as u8,
            }
        })
        .filter(|line| line.len as usize >= WIN_LENGTH)
}

/// Walk one line counting adjacent pairs that both belong to `player`.
///
/// Any other pair resets the count; four matching pairs in a row are five
/// stones. Returns the first five cells of the run.
fn scan_line(board: &Board, line: Line, player: Player) -> Option<[Pos; WIN_LENGTH]> {
    let target = player.cell();
    let cells: Vec<Pos> = line.cells().collect();
    let mut count = 0;

    for (i, pair) in cells.windows(2).enumerate() {
        if board.get(pair[0]) == target && board.get(pair[1]) == target {
            count += 1;
            if count >= WIN_LENGTH - 1 {
                let first = i + 2 - WIN_LENGTH;
                return <[Pos; WIN_LENGTH]>::try_from(&cells[first..first + WIN_LENGTH]).ok();
            }
        } else {
            count = 0;
        }
    }
    None
}

/// First winning run for `player`, scanning rows, columns, diagonals and
/// anti-diagonals in that order
pub fn find_winning_line(board: &Board, player: Player) -> Option<[Pos; WIN_LENGTH]> {
    Direction::ALL
        .into_iter()
        .find_map(|direction| lines(direction).find_map(|line| scan_line(board, line, player)))
}

/// Check if `player` has five or more in a row anywhere on the board
pub fn has_won(board: &Board, player: Player) -> bool {
    find_winning_line(board, player).is_some()
}

/// Check for a winner
///
/// Returns `Some(player)` if either side has five in a row, player one
/// first, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::ALL.into_iter().find(|&p| has_won(board, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, BOARD_SIZE};

    fn place_run(board: &mut Board, start: Pos, direction: Direction, len: i32, player: Player) {
        let (dr, dc) = direction.delta();
        for i in 0..len {
            board.place_stone(start.offset(dr, dc, i).unwrap(), player);
        }
    }

    #[test]
    fn test_line_counts() {
        assert_eq!(lines(Direction::Horizontal).count(), 8);
        assert_eq!(lines(Direction::Vertical).count(), 8);
        assert_eq!(lines(Direction::Diagonal).count(), 7);
        assert_eq!(lines(Direction::AntiDiagonal).count(), 7);
    }

    #[test]
    fn test_diagonal_starts() {
        let starts: Vec<Pos> = lines(Direction::Diagonal).map(|l| l.start).collect();
        assert_eq!(
            starts,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(0, 3),
                Pos::new(1, 0),
                Pos::new(2, 0),
                Pos::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_anti_diagonal_goes_up_right() {
        let longest = lines(Direction::AntiDiagonal)
            .find(|l| l.len as usize == BOARD_SIZE)
            .unwrap();
        assert_eq!(longest.start, Pos::new(7, 0));
        assert_eq!(longest.cells().last(), Some(Pos::new(0, 7)));
        assert!(lines(Direction::AntiDiagonal).all(|l| l.cells().count() == l.len as usize));
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        place_run(&mut board, Pos::new(3, 2), Direction::Horizontal, 5, Player::One);
        assert!(has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        place_run(&mut board, Pos::new(3, 6), Direction::Vertical, 5, Player::Two);
        assert!(has_won(&board, Player::Two));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        place_run(&mut board, Pos::new(1, 2), Direction::Diagonal, 5, Player::One);
        assert!(has_won(&board, Player::One));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let mut board = Board::new();
        // From (6, 0) up to (2, 4)
        place_run(&mut board, Pos::new(6, 0), Direction::AntiDiagonal, 5, Player::Two);
        assert!(has_won(&board, Player::Two));
        assert_eq!(check_winner(&board), Some(Player::Two));
    }

    #[test]
    fn test_every_five_is_detected() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            for start in Pos::all() {
                if start.offset(dr, dc, WIN_LENGTH as i32 - 1).is_none() {
                    continue;
                }
                let mut board = Board::new();
                place_run(&mut board, start, direction, WIN_LENGTH as i32, Player::One);
                assert!(has_won(&board, Player::One), "{direction:?} from {start}");
                assert!(!has_won(&board, Player::Two));
            }
        }
    }

    #[test]
    fn test_scenario_four_then_five() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place_stone(Pos::new(0, col), Player::One);
        }
        assert!(!has_won(&board, Player::One));

        board.place_stone(Pos::new(0, 4), Player::One);
        assert!(has_won(&board, Player::One));
    }

    #[test]
    fn test_six_and_eight_in_row_also_win() {
        let mut board = Board::new();
        place_run(&mut board, Pos::new(5, 0), Direction::Horizontal, 6, Player::One);
        assert!(has_won(&board, Player::One));

        let mut board = Board::new();
        place_run(&mut board, Pos::new(0, 0), Direction::Diagonal, 8, Player::Two);
        assert!(has_won(&board, Player::Two));
    }

    #[test]
    fn test_broken_run_not_win() {
        let mut board = Board::new();
        // X X X X . X X X
        for col in [0, 1, 2, 3, 5, 6, 7] {
            board.place_stone(Pos::new(2, col), Player::One);
        }
        assert!(!has_won(&board, Player::One));

        // X X O X X X X .
        board.place_stone(Pos::new(2, 4), Player::One);
        board.place_stone(Pos::new(2, 2), Player::Two);
        board.set_cell(Pos::new(2, 7), Cell::Empty);
        assert!(!has_won(&board, Player::One));
    }

    #[test]
    fn test_empty_and_isolated_not_five() {
        let board = Board::new();
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));

        let mut board = Board::new();
        for pos in Pos::all().filter(|p| p.row % 2 == 0 && p.col % 2 == 0) {
            board.place_stone(pos, Player::One);
        }
        assert!(!has_won(&board, Player::One));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winning_line_cells() {
        let mut board = Board::new();
        place_run(&mut board, Pos::new(7, 1), Direction::AntiDiagonal, 6, Player::One);
        let line = find_winning_line(&board, Player::One).unwrap();
        assert_eq!(
            line,
            [
                Pos::new(7, 1),
                Pos::new(6, 2),
                Pos::new(5, 3),
                Pos::new(4, 4),
                Pos::new(3, 5),
            ]
        );
    }

    #[test]
    fn test_winning_line_prefers_rows() {
        let mut board = Board::new();
        place_run(&mut board, Pos::new(0, 7), Direction::Vertical, 5, Player::One);
        place_run(&mut board, Pos::new(6, 0), Direction::Horizontal, 5, Player::One);
        let line = find_winning_line(&board, Player::One).unwrap();
        assert_eq!(line[0], Pos::new(6, 0));
    }

    #[test]
    fn test_alternating_full_board_has_no_winner() {
        let mut board = Board::new();
        for pos in Pos::all() {
            let player = if (pos.col / 2 + pos.row) % 2 == 0 { Player::One } else { Player::Two };
            board.place_stone(pos, player);
        }
        assert!(board.is_full());
        assert_eq!(check_winner(&board), None);
    }
}

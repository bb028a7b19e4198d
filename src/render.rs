//! Plain-text board rendering
//!
//! ```text
//!  |a|b|c|d|e|f|g|h|
//!  +-+-+-+-+-+-+-+-+
//! 1|X| | | | | | | |
//! 2| |O| | | | | | |
//! ...
//!  +-+-+-+-+-+-+-+-+
//! ```

use std::fmt;

use crate::board::{Board, Pos, BOARD_SIZE};

const HEADER: &str = " |a|b|c|d|e|f|g|h|";
const BORDER: &str = " +-+-+-+-+-+-+-+-+";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "{BORDER}")?;
        for row in 0..BOARD_SIZE as u8 {
            write!(f, "{}|", row + 1)?;
            for col in 0..BOARD_SIZE as u8 {
                let symbol = self
                    .get(Pos::new(row, col))
                    .player()
                    .map_or(' ', |p| p.symbol());
                write!(f, "{symbol}|")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{BORDER}")
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Player, Pos};

    #[test]
    fn test_empty_board() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], " |a|b|c|d|e|f|g|h|");
        assert_eq!(lines[1], " +-+-+-+-+-+-+-+-+");
        assert_eq!(lines[2], "1| | | | | | | | |");
        assert_eq!(lines[9], "8| | | | | | | | |");
        assert_eq!(lines[10], " +-+-+-+-+-+-+-+-+");
    }

    #[test]
    fn test_stones_drawn_in_place() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Player::One);
        board.place_stone(Pos::new(1, 1), Player::Two);
        board.place_stone(Pos::new(7, 7), Player::One);

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "1|X| | | | | | | |");
        assert_eq!(lines[3], "2| |O| | | | | | |");
        assert_eq!(lines[9], "8| | | | | | | |X|");
    }
}

use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_tags() {
    assert_eq!(Player::One.tag(), 1);
    assert_eq!(Player::Two.tag(), 2);
    assert_eq!(Player::from_tag(1), Some(Player::One));
    assert_eq!(Player::from_tag(2), Some(Player::Two));
    assert_eq!(Player::from_tag(0), None);
    assert_eq!(Player::from_tag(3), None);
}

#[test]
fn test_cell_digits() {
    for cell in [Cell::Empty, Cell::PlayerOne, Cell::PlayerTwo] {
        assert_eq!(Cell::from_digit(cell.digit()), Some(cell));
    }
    assert_eq!(Cell::from_digit(3), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 8 + 4);
    assert_eq!(Pos::from_index(28), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(6, 1);
    assert_eq!(pos.offset(1, 1, 1), Some(Pos::new(7, 2)));
    assert_eq!(pos.offset(1, 1, 2), None);
    assert_eq!(pos.offset(-1, -1, 1), Some(Pos::new(5, 0)));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_notation_corners() {
    assert_eq!(Pos::new(0, 0).to_notation(), "a1");
    assert_eq!(Pos::new(0, 7).to_notation(), "h1");
    assert_eq!(Pos::new(7, 0).to_notation(), "a8");
    assert_eq!(Pos::new(7, 7).to_notation(), "h8");
}

#[test]
fn test_notation_round_trip_all_cells() {
    for pos in Pos::all() {
        assert_eq!(Pos::from_notation(&pos.to_notation()).unwrap(), pos);
    }
}

#[test]
fn test_notation_order_insensitive() {
    for pos in Pos::all() {
        let text = pos.to_notation();
        let swapped: String = text.chars().rev().collect();
        assert_eq!(Pos::from_notation(&swapped).unwrap(), pos, "{swapped}");
    }
}

#[test]
fn test_notation_case_and_whitespace() {
    let corner = Pos::new(0, 0);
    assert_eq!(Pos::from_notation("A1").unwrap(), corner);
    assert_eq!(Pos::from_notation("1a").unwrap(), corner);
    assert_eq!(Pos::from_notation(" 1 A ").unwrap(), corner);
    assert_eq!("d5".parse::<Pos>().unwrap(), Pos::new(4, 3));
}

#[test]
fn test_notation_rejects_garbage() {
    for text in ["", "a", "1", "a0", "a9", "i1", "aa", "11", "a10", "a1b", "é1", "#3"] {
        match Pos::from_notation(text) {
            Err(GameError::InvalidCoordinate(raw)) => assert_eq!(raw, text),
            other => panic!("{text:?} gave {other:?}"),
        }
    }
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.place_stone(Pos::new(2, 3), Player::Two);
    assert_eq!(board.get(Pos::new(2, 3)), Cell::PlayerTwo);
    assert!(!board.is_empty(Pos::new(2, 3)));
    assert_eq!(board.stone_count(), 1);

    board.set_cell(Pos::new(2, 3), Cell::PlayerOne);
    assert_eq!(board.get(Pos::new(2, 3)), Cell::PlayerOne);
    assert_eq!(board.stone_count(), 1);

    board.set_cell(Pos::new(2, 3), Cell::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_board_rows_round_trip() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 7), Player::One);
    board.place_stone(Pos::new(7, 0), Player::Two);
    assert_eq!(Board::from_rows(&board.rows()), board);
}

#[test]
fn test_board_full() {
    let mut board = Board::new();
    for pos in Pos::all() {
        assert!(!board.is_full());
        board.place_stone(pos, Player::One);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

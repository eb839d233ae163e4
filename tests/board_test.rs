//! Tests for the board grid and navigator.

use tilecross::{
    Board, BoardError, Direction, Occupancy, Orientation, Position, ScoreMultiplier, Tile,
    BOARD_SIZE,
};

#[test]
fn test_classic_board_dimensions() {
    let board = Board::classic();
    assert_eq!(board.height(), BOARD_SIZE);
    assert_eq!(board.width(), BOARD_SIZE);
}

#[test]
fn test_center_square_is_marked() {
    let board = Board::classic();
    let center = board.center();
    assert!(center.is_center);
    assert_eq!(center.position, Position::new(7, 7));
}

#[test]
fn test_classic_premium_layout() {
    let board = Board::classic();
    // Triple word in every corner.
    assert_eq!(
        board.square(Position::new(0, 0)).unwrap().multiplier,
        Some(ScoreMultiplier::Word(3))
    );
    assert_eq!(
        board.square(Position::new(14, 14)).unwrap().multiplier,
        Some(ScoreMultiplier::Word(3))
    );
    // Double letter beside the start row.
    assert_eq!(
        board.square(Position::new(0, 3)).unwrap().multiplier,
        Some(ScoreMultiplier::Letter(2))
    );
    // Center doubles the first word.
    assert_eq!(
        board.center().multiplier,
        Some(ScoreMultiplier::Word(2))
    );
}

#[test]
fn test_out_of_bounds_square_is_rejected() {
    let board = Board::classic();
    let result = board.square(Position::new(15, 0));
    assert!(matches!(result, Err(BoardError::OutOfBounds(_))));
}

#[test]
fn test_place_tile_out_of_bounds_is_rejected_without_mutating() {
    let mut board = Board::classic();
    let result = board.place_tile(Tile::new('a', 1), Position::new(15, 15));
    assert_eq!(
        result,
        Err(BoardError::OutOfBounds(Position::new(15, 15)))
    );
    assert!(board.is_untouched());
}

#[test]
fn test_place_tile_fills_empty_square_once() {
    let mut board = Board::classic();
    let position = Position::new(7, 7);
    assert!(board.place_tile(Tile::new('a', 1), position).unwrap());
    assert!(!board.place_tile(Tile::new('b', 3), position).unwrap());
    assert_eq!(
        board.square(position).unwrap().tile,
        Some(Tile::new('a', 1))
    );
}

#[test]
fn test_place_word_skips_filled_squares() {
    let mut board = Board::classic();
    board
        .place_tile(Tile::new('a', 1), Position::new(7, 8))
        .unwrap();

    let placed = board.place_word(
        vec![Tile::new('c', 3), Tile::new('t', 1)],
        Position::new(7, 7),
        Orientation::Horizontal,
    );
    assert!(placed);
    // The 't' lands past the occupied square.
    assert_eq!(
        board.square(Position::new(7, 9)).unwrap().tile,
        Some(Tile::new('t', 1))
    );
}

#[test]
fn test_place_word_rejects_overflow_without_mutating() {
    let mut board = Board::classic();
    let placed = board.place_word(
        vec![Tile::new('a', 1), Tile::new('b', 3), Tile::new('c', 3)],
        Position::new(7, 13),
        Orientation::Horizontal,
    );
    assert!(!placed);
    assert!(board.is_untouched());
}

#[test]
fn test_verify_square_occupancy() {
    let mut board = Board::classic();
    let position = Position::new(3, 3);
    assert!(board.verify_square(position, Occupancy::Empty).unwrap());
    assert!(!board.verify_square(position, Occupancy::Filled).unwrap());

    board.place_tile(Tile::new('z', 10), position).unwrap();
    assert!(board.verify_square(position, Occupancy::Filled).unwrap());
}

#[test]
fn test_navigator_walks_both_orientations() {
    let board = Board::classic();
    let mut navigator = board.navigate(Position::new(7, 7), Orientation::Horizontal);
    navigator.forward(2);
    assert_eq!(navigator.position(), Some(Position::new(7, 9)));

    navigator.switch_orientation();
    navigator.forward(3);
    assert_eq!(navigator.position(), Some(Position::new(10, 9)));
}

#[test]
fn test_navigator_steps_off_the_edge() {
    let board = Board::classic();
    let mut navigator = board.navigate(Position::new(0, 0), Orientation::Horizontal);
    navigator.backward(1);
    assert!(!navigator.is_within_bounds());
    assert_eq!(navigator.position(), None);
    assert!(navigator.square().is_none());

    // Walking back on keeps working.
    navigator.forward(1);
    assert_eq!(navigator.position(), Some(Position::new(0, 0)));
}

#[test]
fn test_navigator_move_until_finds_occupied() {
    let mut board = Board::classic();
    board
        .place_tile(Tile::new('q', 10), Position::new(7, 10))
        .unwrap();

    let mut navigator = board.navigate(Position::new(7, 7), Orientation::Horizontal);
    let steps = navigator.move_until(|nav| nav.verify(Occupancy::Filled));
    assert_eq!(steps, Some(3));
    assert_eq!(navigator.position(), Some(Position::new(7, 10)));
}

#[test]
fn test_navigator_neighbor_check_leaves_cursor_in_place() {
    let mut board = Board::classic();
    board
        .place_tile(Tile::new('a', 1), Position::new(6, 7))
        .unwrap();

    let navigator = board.navigate(Position::new(7, 7), Orientation::Horizontal);
    assert!(navigator.verify_neighbors(Orientation::Vertical, Occupancy::Filled));
    assert!(!navigator.verify_neighbors(Orientation::Horizontal, Occupancy::Filled));
    assert_eq!(navigator.position(), Some(Position::new(7, 7)));
}

#[test]
fn test_direction_moves() {
    let board = Board::classic();
    let mut navigator = board.navigate(Position::new(5, 5), Orientation::Vertical);
    navigator.move_direction(Direction::Forward);
    assert_eq!(navigator.position(), Some(Position::new(6, 5)));
    navigator.move_direction(Direction::Backward);
    navigator.move_direction(Direction::Backward);
    assert_eq!(navigator.position(), Some(Position::new(4, 5)));
}

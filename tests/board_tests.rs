//! Board tests - grid, collision, locking, and row clearing

use termtris::core::{get_shape, Board};
use termtris::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row_except(board: &mut Board, y: i8, skip: &[i8]) {
    for x in 0..BOARD_WIDTH as i8 {
        if !skip.contains(&x) {
            board.set(x, y, true);
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(false), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, true));
    assert_eq!(board.get(5, 10), Some(true));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, false));
    assert_eq!(board.get(5, 10), Some(false));

    assert!(!board.set(-1, 0, true));
    assert!(!board.set(0, BOARD_HEIGHT as i8, true));
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_collides_walls_and_floor() {
    let board = Board::new();
    let o = get_shape(ShapeKind::O);

    assert!(!board.collides(&o, 0, 0));
    assert!(!board.collides(&o, 8, 18));

    assert!(board.collides(&o, -1, 0), "left wall");
    assert!(board.collides(&o, 9, 0), "right wall");
    assert!(board.collides(&o, 0, 19), "floor");
}

#[test]
fn test_collides_ceiling_is_open() {
    let board = Board::new();
    let o = get_shape(ShapeKind::O);

    assert!(!board.collides(&o, 4, -1));
    assert!(!board.collides(&o, 4, -10));
    // Walls still apply above the grid.
    assert!(board.collides(&o, -1, -5));
}

#[test]
fn test_collides_occupied_cell() {
    let mut board = Board::new();
    board.set(5, 1, true);
    let o = get_shape(ShapeKind::O);

    assert!(board.collides(&o, 4, 0));
    assert!(board.collides(&o, 5, 1));
    assert!(!board.collides(&o, 6, 0));
}

#[test]
fn test_lock_marks_shape_cells() {
    let mut board = Board::new();
    let t = get_shape(ShapeKind::T);

    board.lock(&t, 3, 5);

    assert!(board.is_occupied(3, 5));
    assert!(board.is_occupied(4, 5));
    assert!(board.is_occupied(5, 5));
    assert!(board.is_occupied(4, 6));
    assert!(!board.is_occupied(3, 6));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_lock_over_occupied_cell_overwrites() {
    let mut board = Board::new();
    board.set(4, 5, true);
    let o = get_shape(ShapeKind::O);

    assert!(board.collides(&o, 3, 5));
    board.lock(&o, 3, 5);
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_lock_drops_cells_above_ceiling() {
    let mut board = Board::new();
    let o = get_shape(ShapeKind::O);

    board.lock(&o, 0, -1);
    assert_eq!(board.occupied_count(), 2);
    assert!(board.is_occupied(0, 0));
    assert!(board.is_occupied(1, 0));
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    fill_row_except(&mut board, 19, &[9]);
    assert!(!board.is_row_full(19));

    board.set(9, 19, true);
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_clear_single_row_shifts_down() {
    let mut board = Board::new();
    fill_row_except(&mut board, 19, &[]);
    board.set(2, 18, true);
    board.set(7, 0, true);

    assert_eq!(board.clear_full_rows(), 1);

    assert!(board.is_occupied(2, 19));
    assert!(board.is_occupied(7, 1));
    assert!(!board.is_row_full(19));
    for x in 0..BOARD_WIDTH as i8 {
        assert!(!board.is_occupied(x, 0), "new top row must be empty");
    }
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_adjacent_rows_reexamines_index() {
    let mut board = Board::new();
    fill_row_except(&mut board, 18, &[]);
    fill_row_except(&mut board, 19, &[]);
    board.set(0, 17, true);

    assert_eq!(board.clear_full_rows(), 2);
    assert!(board.is_occupied(0, 19));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::from_ascii(&[
        "##########",
        "#.........",
        "##########",
        "..#.......",
        "##########",
    ]);
    assert_eq!(board.occupied_count(), 32);

    assert_eq!(board.clear_full_rows(), 3);

    // Survivors keep their relative order at the bottom.
    assert!(board.is_occupied(0, 18));
    assert!(board.is_occupied(2, 19));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_removes_exactly_full_rows() {
    let mut board = Board::from_ascii(&[
        "#.#.#.#.#.",
        "##########",
        "##########",
        "##########",
        "##########",
    ]);
    let before = board.occupied_count();

    let cleared = board.clear_full_rows();
    assert_eq!(cleared, 4);
    assert_eq!(board.occupied_count(), before - cleared * BOARD_WIDTH as usize);
    assert!((0..BOARD_HEIGHT as usize).all(|y| !board.is_row_full(y)));
}

#[test]
fn test_clear_nothing_on_partial_board() {
    let mut board = Board::from_ascii(&["#########.", ".#########"]);
    let snapshot = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, snapshot);
}

#[test]
fn test_write_u8_grid() {
    let mut board = Board::new();
    board.set(3, 7, true);

    let mut grid = [[9u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_u8_grid(&mut grid);

    assert_eq!(grid[7][3], 1);
    assert_eq!(grid.iter().flatten().filter(|&&c| c == 1).count(), 1);
    assert!(grid.iter().flatten().all(|&c| c <= 1));
}

#[test]
fn test_board_clear() {
    let mut board = Board::from_ascii(&["##########", "#.#.#.#.#."]);
    board.clear();
    assert_eq!(board, Board::new());
}

//! Board tests - cell access and row clearing through the facade.

use joycab::core::{Board, PieceKind};
use joycab::types::{STACK_COLS, STACK_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new();

    for row in 0..STACK_ROWS as i8 {
        for col in 0..STACK_COLS as i8 {
            assert_eq!(board.cell(col, row), Some(None));
            assert!(board.is_free(col, row));
        }
    }
    assert_eq!(board.occupied(), 0);
}

#[test]
fn test_board_cell_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.cell(-1, 0), None);
    assert_eq!(board.cell(0, -1), None);
    assert_eq!(board.cell(STACK_COLS as i8, 0), None);
    assert_eq!(board.cell(0, STACK_ROWS as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set_cell(5, 10, Some(PieceKind::T)));
    assert_eq!(board.cell(5, 10), Some(Some(PieceKind::T)));
    assert!(!board.is_free(5, 10));

    assert!(board.set_cell(5, 10, None));
    assert_eq!(board.cell(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set_cell(-1, 0, Some(PieceKind::T)));
    assert!(!board.set_cell(0, -1, Some(PieceKind::T)));
    assert!(!board.set_cell(STACK_COLS as i8, 0, Some(PieceKind::T)));
    assert!(!board.set_cell(0, STACK_ROWS as i8, Some(PieceKind::T)));
    assert_eq!(board.occupied(), 0);
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    for col in 0..STACK_COLS as i8 {
        board.set_cell(col, 5, Some(PieceKind::T));
    }
    assert!(board.is_row_full(5));

    board.set_cell(3, 5, None);
    assert!(!board.is_row_full(5));
}

#[test]
fn test_board_clear_bottom_rows() {
    let mut board = Board::new();

    for col in 0..STACK_COLS as i8 {
        board.set_cell(col, 18, Some(PieceKind::I));
        board.set_cell(col, 19, Some(PieceKind::O));
    }
    board.set_cell(0, 17, Some(PieceKind::T));

    assert_eq!(board.clear_full_rows(), 2);

    // The marker above the pair drops two rows.
    assert_eq!(board.cell(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.occupied(), 1);
}

#[test]
fn test_board_clear_multiple_rows_order() {
    let mut board = Board::new();

    for col in 0..STACK_COLS as i8 {
        board.set_cell(col, 5, Some(PieceKind::T));
        board.set_cell(col, 10, Some(PieceKind::I));
        board.set_cell(col, 15, Some(PieceKind::O));
    }

    // One marker above each full row.
    board.set_cell(0, 4, Some(PieceKind::J));
    board.set_cell(0, 9, Some(PieceKind::L));
    board.set_cell(0, 14, Some(PieceKind::S));

    assert_eq!(board.clear_full_rows(), 3);

    // Each marker drops by the number of full rows below it.
    assert_eq!(board.cell(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.cell(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.cell(0, 15), Some(Some(PieceKind::S)));
    assert_eq!(board.occupied(), 3);
}

#[test]
fn test_board_clear_wipes_everything() {
    let mut board = Board::new();
    for col in 0..STACK_COLS as i8 {
        board.set_cell(col, 5, Some(PieceKind::T));
        board.set_cell(col, 12, Some(PieceKind::S));
    }

    board.clear();
    assert_eq!(board.occupied(), 0);
}

#[test]
fn test_board_write_codes() {
    let mut board = Board::new();
    board.set_cell(0, 0, Some(PieceKind::I));
    board.set_cell(9, 19, Some(PieceKind::Z));

    let mut codes = [[0u8; STACK_COLS as usize]; STACK_ROWS as usize];
    board.write_codes(&mut codes);

    assert_eq!(codes[0][0], PieceKind::I.code());
    assert_eq!(codes[19][9], PieceKind::Z.code());
    assert_eq!(codes[10][5], 0);
}

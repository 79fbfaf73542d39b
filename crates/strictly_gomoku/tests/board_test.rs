//! Tests for board construction, bounds and placement bookkeeping.

use proptest::prelude::*;
use strictly_gomoku::{Board, CellState, Coordinate, GomokuError, GomokuErrorKind, Player};

#[test]
fn test_rejects_small_dimensions() {
    for (rows, columns) in [(0, 5), (5, 0), (-1, 3), (0, 0)] {
        let err = Board::new(rows, columns, 2, None).unwrap_err();
        assert_eq!(err.kind(), GomokuErrorKind::InvalidDimension, "{rows}x{columns}");
    }
}

#[test]
fn test_rejects_win_length_out_of_range() {
    assert_eq!(
        Board::new(5, 5, 1, None).unwrap_err().kind(),
        GomokuErrorKind::InvalidWinLength
    );
    // Exceeds the column count of a tall board.
    assert_eq!(
        Board::new(8, 3, 4, None).unwrap_err(),
        GomokuError::InvalidWinLength {
            win_length: 4,
            max: 3
        }
    );
    // Exceeds the row count of a wide board.
    assert_eq!(
        Board::new(3, 8, 4, None).unwrap_err().kind(),
        GomokuErrorKind::InvalidWinLength
    );
    assert!(Board::new(3, 8, 3, None).is_ok());
}

#[test]
fn test_rejects_grid_of_wrong_length() {
    let err = Board::new(3, 3, 3, Some(vec![CellState::Empty; 8])).unwrap_err();
    assert_eq!(err.kind(), GomokuErrorKind::InvalidInitialState);
}

#[test]
fn test_from_layout_rejects_ragged_rows_and_unknown_symbols() {
    assert_eq!(
        Board::from_layout(2, &["__", "___"]).unwrap_err().kind(),
        GomokuErrorKind::InvalidInitialState
    );
    assert_eq!(
        Board::from_layout(2, &["_#", "__"]).unwrap_err().kind(),
        GomokuErrorKind::InvalidInitialState
    );
}

#[test]
fn test_is_on_board_uses_each_axis_bound_on_rectangular_boards() {
    for (rows, columns) in [(3, 7), (7, 3), (2, 5), (5, 2)] {
        let board = Board::new(rows, columns, 2, None).unwrap();
        for row in -2..rows + 2 {
            for column in -2..columns + 2 {
                let expected = (0..rows).contains(&row) && (0..columns).contains(&column);
                assert_eq!(
                    board.is_on_board(Coordinate::new(row, column)),
                    expected,
                    "({row}, {column}) on {rows}x{columns}"
                );
            }
        }
    }
}

#[test]
fn test_column_beyond_row_count_is_on_wide_board() {
    let mut board = Board::new(2, 6, 2, None).unwrap();
    let far_right = Coordinate::new(1, 5);
    assert!(board.is_on_board(far_right));
    assert!(board.can_place(far_right));
    board.place_stone(Player::White, far_right).unwrap();
    assert_eq!(board.get(far_right), Ok(CellState::White));
}

#[test]
fn test_column_beyond_column_count_is_off_tall_board() {
    let board = Board::new(6, 2, 2, None).unwrap();
    let outside = Coordinate::new(0, 3);
    assert!(!board.is_on_board(outside));
    assert!(!board.can_place(outside));
    assert_eq!(
        board.get(outside),
        Err(GomokuError::OutOfBounds {
            coordinate: outside
        })
    );
}

#[test]
fn test_empty_count_tracks_placements() {
    for (rows, columns) in [(2, 2), (3, 5), (5, 3), (4, 4)] {
        let mut board = Board::new(rows, columns, 2, None).unwrap();
        let total = (rows * columns) as usize;
        let mut player = Player::Black;

        for (placed, coordinate) in board.valid_moves().into_iter().enumerate() {
            assert_eq!(board.empty_cells(), total - placed);
            board.place_stone(player, coordinate).unwrap();
            player = player.opponent();
        }

        assert_eq!(board.empty_cells(), 0);
        assert!(!board.has_moves_left());
        assert_eq!(
            board.place_stone(player, Coordinate::new(0, 0)),
            Err(GomokuError::NoMovesLeft)
        );
    }
}

proptest! {
    #[test]
    fn test_empty_count_after_random_placements(
        (rows, columns, order) in (2i32..=9, 2i32..=9).prop_flat_map(|(rows, columns)| {
            let cells: Vec<i32> = (0..rows * columns).collect();
            (Just(rows), Just(columns), Just(cells).prop_shuffle())
        }),
        fraction in 0.0f64..=1.0,
    ) {
        let mut board = Board::new(rows, columns, 2, None).unwrap();
        let placements = (order.len() as f64 * fraction) as usize;
        let mut player = Player::Black;

        for index in &order[..placements] {
            let cell = Coordinate::new(index / columns, index % columns);
            board.place_stone(player, cell).unwrap();
            player = player.opponent();
        }

        prop_assert_eq!(board.empty_cells(), order.len() - placements);
        prop_assert_eq!(board.valid_moves().len(), order.len() - placements);
        prop_assert_eq!(board.has_moves_left(), placements < order.len());
    }
}

#[test]
fn test_reset_restores_every_cell() {
    let mut board = Board::from_layout(3, &["XO_", "_X_", "O__"]).unwrap();
    assert_eq!(board.empty_cells(), 5);

    board.reset();
    assert_eq!(board.empty_cells(), 9);
    assert_eq!(board.to_rows(), vec!["___", "___", "___"]);
}

#[test]
fn test_rows_render_symbols() {
    let grid = vec![
        CellState::White,
        CellState::Empty,
        CellState::Black,
        CellState::Empty,
        CellState::Empty,
        CellState::Black,
    ];
    let board = Board::new(2, 3, 2, Some(grid)).unwrap();
    assert_eq!(board.to_rows(), vec!["O_X", "__X"]);
    assert_eq!(board.get(Coordinate::new(0, 0)), Ok(CellState::White));
}

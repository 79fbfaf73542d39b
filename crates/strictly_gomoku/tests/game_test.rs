//! Tests for the game facade: scenarios, terminal phases and restart.

use strictly_gomoku::{
    CellState, Coordinate, Game, GameConfig, GamePhase, GomokuError, Outcome, Player,
};

/// White stones at (0,0)-(0,1), black stones at (3,2)-(3,3) on a 4x4 board.
fn two_pairs_grid() -> Vec<CellState> {
    std::iter::repeat_n(CellState::White, 2)
        .chain(std::iter::repeat_n(CellState::Empty, 12))
        .chain(std::iter::repeat_n(CellState::Black, 2))
        .collect()
}

fn two_pairs_game(starting_phase: GamePhase) -> Game {
    GameConfig::new(4, 4, 3)
        .with_initial_grid(two_pairs_grid())
        .with_starting_phase(starting_phase)
        .build()
        .expect("Valid configuration")
}

#[test]
fn test_occupied_cell_rejected_and_phase_kept() {
    let mut game = GameConfig::new(4, 4, 2).build().unwrap();

    game.submit_move(Coordinate::new(0, 0)).expect("Valid move");
    let result = game.submit_move(Coordinate::new(0, 0));

    assert_eq!(
        result,
        Err(GomokuError::CellOccupied {
            coordinate: Coordinate::new(0, 0)
        })
    );
    assert_eq!(game.phase(), GamePhase::WhiteToMove);
}

#[test]
fn test_black_completes_horizontal_run() {
    let mut game = two_pairs_game(GamePhase::BlackToMove);

    let status = game.submit_move(Coordinate::new(3, 1)).expect("Valid move");

    assert!(*status.has_ended());
    assert_eq!(*status.phase(), GamePhase::BlackWins);
    assert_eq!(game.phase().outcome(), Some(Outcome::Winner(Player::Black)));
    assert_eq!(status.board_rows()[3], "_XXX");
}

#[test]
fn test_white_completes_horizontal_run() {
    let mut game = two_pairs_game(GamePhase::WhiteToMove);

    let status = game.submit_move(Coordinate::new(0, 2)).expect("Valid move");

    assert!(*status.has_ended());
    assert_eq!(*status.phase(), GamePhase::WhiteWins);
    assert_eq!(status.board_rows()[0], "OOO_");
}

#[test]
fn test_full_board_without_run_is_draw() {
    let mut game = GameConfig::new(3, 3, 3).build().unwrap();

    let draw_moves = [
        (0, 0), // X
        (0, 1), // O
        (0, 2), // X
        (1, 1), // O
        (1, 0), // X
        (1, 2), // O
        (2, 1), // X
        (2, 0), // O
        (2, 2), // X
    ];
    for (index, (row, column)) in draw_moves.into_iter().enumerate() {
        let status = game.submit_move(Coordinate::new(row, column)).unwrap();
        let last = index == draw_moves.len() - 1;
        assert_eq!(*status.has_ended(), last, "move {index}");
    }

    assert_eq!(game.phase(), GamePhase::Draw);
    assert!(!game.board().has_moves_left());
    assert_eq!(game.board().to_rows(), vec!["XOX", "XOO", "OXX"]);
}

#[test]
fn test_terminal_phases_reject_moves_without_mutation() {
    for phase in [GamePhase::BlackWins, GamePhase::WhiteWins, GamePhase::Draw] {
        let mut game = two_pairs_game(phase);
        let snapshot = game.clone();

        let result = game.submit_move(Coordinate::new(1, 1));

        assert_eq!(result, Err(GomokuError::GameEnded { phase }));
        assert_eq!(game, snapshot);
        assert_eq!(game.status(), snapshot.status());
    }
}

#[test]
fn test_moves_after_win_rejected() {
    let mut game = two_pairs_game(GamePhase::BlackToMove);
    game.submit_move(Coordinate::new(3, 1)).unwrap();
    let snapshot = game.board().clone();

    assert_eq!(
        game.submit_move(Coordinate::new(2, 2)),
        Err(GomokuError::GameEnded {
            phase: GamePhase::BlackWins
        })
    );
    assert_eq!(game.board(), &snapshot);
}

#[test]
fn test_off_board_move_rejected() {
    let mut game = GameConfig::new(3, 6, 3).build().unwrap();

    for (row, column) in [(-1, 0), (0, -1), (3, 0), (0, 6)] {
        let coordinate = Coordinate::new(row, column);
        assert_eq!(
            game.submit_move(coordinate),
            Err(GomokuError::OutOfBounds { coordinate })
        );
    }

    // Columns past the row count are still on a wide board.
    assert!(game.submit_move(Coordinate::new(2, 5)).is_ok());
    assert_eq!(game.board().empty_cells(), 17);
}

#[test]
fn test_restart_is_idempotent() {
    let mut game = GameConfig::new(5, 5, 4)
        .with_starting_phase(GamePhase::WhiteToMove)
        .build()
        .unwrap();

    for (row, column) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
        game.submit_move(Coordinate::new(row, column)).unwrap();
    }

    for _ in 0..2 {
        let status = game.restart();
        assert!(!*status.has_ended());
        assert_eq!(*status.phase(), GamePhase::WhiteToMove);
        assert!(status.board_rows().iter().all(|row| row == "_____"));
        assert_eq!(game.status(), status);
        assert!(game.history().is_empty());
    }
}

#[test]
fn test_restart_after_game_end_allows_new_game() {
    let mut game = two_pairs_game(GamePhase::WhiteToMove);
    game.submit_move(Coordinate::new(0, 2)).unwrap();
    assert!(game.has_ended());

    game.restart();
    assert_eq!(game.phase(), GamePhase::WhiteToMove);
    assert!(game.submit_move(Coordinate::new(0, 2)).is_ok());
    assert_eq!(game.phase(), GamePhase::BlackToMove);
}

#[test]
fn test_win_on_last_empty_cell_beats_draw() {
    let grid = vec![
        CellState::Black,
        CellState::White,
        CellState::Empty,
        CellState::White,
    ];
    let mut game = GameConfig::new(2, 2, 2)
        .with_initial_grid(grid)
        .with_starting_phase(GamePhase::WhiteToMove)
        .build()
        .unwrap();

    let status = game.submit_move(Coordinate::new(1, 0)).unwrap();
    assert_eq!(*status.phase(), GamePhase::WhiteWins);
    assert!(!game.board().has_moves_left());
}

#[test]
fn test_status_serializes_with_host_field_names() {
    let game = GameConfig::new(2, 2, 2).build().unwrap();
    let json = serde_json::to_value(game.status()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "hasEnded": false,
            "phase": "BlackToMove",
            "boardRows": ["__", "__"],
        })
    );
}

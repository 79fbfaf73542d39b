//! Strictly Gomoku - rules engine for (m,n,k) five-in-a-row games
//!
//! Two players alternately place stones on a rectangular grid; the first to
//! line up `win_length` stones of their colour horizontally, vertically or
//! diagonally wins, and a full board with no such run is a draw.
//!
//! # Architecture
//!
//! - **Board**: grid storage, bounds checks, occupancy bookkeeping
//! - **Rules**: localized win detection around the last stone
//! - **Phases**: the pure turn/termination state machine
//! - **Game**: facade that validates, places, detects and transitions
//! - **Contracts / invariants**: pre- and postconditions for every move
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{Coordinate, GameConfig, GamePhase};
//!
//! # fn example() -> Result<(), strictly_gomoku::GomokuError> {
//! let mut game = GameConfig::new(3, 3, 3).build()?;
//! let status = game.submit_move(Coordinate::new(1, 1))?;
//! assert_eq!(*status.phase(), GamePhase::WhiteToMove);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod contracts;
mod coordinate;
mod error;
mod game;
mod invariants;
mod phases;
pub mod rules;
mod status;
mod types;

pub use action::Move;
pub use board::Board;
pub use config::GameConfig;
pub use contracts::{CellIsEmpty, Contract, GameNotEnded, LegalMove, MoveContract, OnBoard};
pub use coordinate::Coordinate;
pub use error::{GomokuError, GomokuErrorKind};
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, EmptyCountInvariant, GomokuInvariants, HistoryConsistentInvariant,
    Invariant, InvariantSet, InvariantViolation,
};
pub use phases::{GamePhase, Outcome, transition};
pub use rules::{Direction, Segment, is_winning_move};
pub use status::Status;
pub use types::{CellState, Player};

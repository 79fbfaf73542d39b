//! Game rules for gomoku.
//!
//! Rules are pure functions over a [`Board`](super::Board), kept apart from
//! board storage so the game facade and the contracts can share them.

pub mod win;

pub use win::{Direction, Segment, is_winning_move};

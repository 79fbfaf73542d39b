//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A (row, column) cell address.
///
/// Coordinates carry no bounds of their own; whether a coordinate is valid
/// depends on the board it is used with. Negative values are representable
/// so that off-board requests can be reported instead of rejected at parse
/// time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Coordinate {
    /// Zero-based row index.
    pub row: i32,
    /// Zero-based column index.
    pub column: i32,
}

impl Coordinate {
    /// Returns the coordinate shifted by `(d_row, d_column)`.
    pub fn offset(self, d_row: i32, d_column: i32) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

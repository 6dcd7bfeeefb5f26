//! Cell coordinates on the board grid.
//!
//! Cells are flattened row-major: `index = row * columns + column`.
//! Every conversion between coordinates and slot indices goes through
//! `Cell::flatten` and `Cell::from_index`.

use serde::{Deserialize, Serialize};

/// A `(row, column)` position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

impl Cell {
    /// Create a cell.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Slot index on a grid with `columns` columns.
    #[must_use]
    pub const fn flatten(self, columns: usize) -> usize {
        self.row * columns + self.column
    }

    /// Inverse of `flatten`.
    #[must_use]
    pub const fn from_index(index: usize, columns: usize) -> Self {
        Self {
            row: index / columns,
            column: index % columns,
        }
    }

    /// Check if the cell lies on a `rows x columns` grid.
    #[must_use]
    pub const fn in_bounds(self, rows: usize, columns: usize) -> bool {
        self.row < rows && self.column < columns
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

//! Board configuration.
//!
//! The grid shape is fixed when a board is created. Attribute
//! configuration lives in `cards::AttributeRegistry`.

use serde::{Deserialize, Serialize};

/// Default number of board rows.
pub const DEFAULT_ROWS: usize = 3;

/// Default number of board columns.
pub const DEFAULT_COLUMNS: usize = 3;

/// Shape of the board grid.
///
/// ```
/// use set_game::core::BoardConfig;
///
/// let config = BoardConfig::new().with_rows(3).with_columns(4);
/// assert_eq!(config.cell_count(), Some(12));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub columns: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl BoardConfig {
    /// Create the default 3x3 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Total number of cells on the grid, `None` on overflow.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }
}

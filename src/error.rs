//! Error types.
//!
//! Every error here is a caller contract violation or a bad
//! configuration. None of them is retried. An invalid but well-formed
//! claim is not an error; see `board::ClaimOutcome`.

use thiserror::Error;

use crate::board::Cell;

/// Invalid attribute configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("attribute '{attribute}' has no options")]
    EmptyOptions { attribute: String },

    #[error("attribute '{attribute}' lists option '{option}' more than once")]
    DuplicateOption { attribute: String, option: String },

    #[error("registry has no attributes")]
    NoAttributes,

    #[error("attribute '{attribute}' registered more than once")]
    DuplicateAttribute { attribute: String },

    #[error("number of distinct cards does not fit in usize")]
    DeckTooLarge,
}

/// Malformed card construction input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("unknown attribute '{attribute}'")]
    UnknownAttribute { attribute: String },

    #[error("'{value}' is not an option of attribute '{attribute}'")]
    InvalidValue { attribute: String, value: String },

    #[error("index {index} out of range for attribute '{attribute}' ({options} options)")]
    IndexOutOfRange {
        attribute: String,
        index: usize,
        options: usize,
    },

    #[error("expected {expected} indices, got {found}")]
    WrongIndexCount { expected: usize, found: usize },

    #[error("incomplete card: missing {missing:?}, unexpected {unexpected:?}")]
    IncompleteCard {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("card number {number} out of range (deck has {total} cards)")]
    CardNumberOutOfRange { number: usize, total: usize },
}

/// Board construction failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board of {rows}x{columns} cells is larger than the deck of {total} cards")]
    BoardTooLarge {
        rows: usize,
        columns: usize,
        total: usize,
    },

    #[error("board must have at least one row and one column")]
    EmptyBoard,

    #[error("card {number} appears more than once in the layout")]
    DuplicateCard { number: usize },

    #[error("layout has {found} cells, board has {expected}")]
    LayoutSize { expected: usize, found: usize },

    #[error(transparent)]
    Card(#[from] CardError),
}

/// Malformed claim input. The board is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("a claim needs exactly {expected} cells, got {found}")]
    WrongArity { expected: usize, found: usize },

    #[error("cell {0} is claimed more than once")]
    DuplicateCell(Cell),

    #[error("cell {0} holds no card")]
    EmptyCell(Cell),

    #[error("cell {0} is outside the board")]
    CellOutOfBounds(Cell),

    #[error("cards come from different attribute registries")]
    MixedRegistries,
}

/// Unparseable player input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected '(row, column)' tuples, got '{0}'")]
    Malformed(String),

    #[error("'{0}' is not a non-negative integer")]
    NotANumber(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// Any error raised by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Card(#[from] CardError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ClaimError {
    /// The offending cell, if the error is about one.
    #[must_use]
    pub fn cell(&self) -> Option<Cell> {
        match self {
            ClaimError::WrongArity { .. } | ClaimError::MixedRegistries => None,
            ClaimError::DuplicateCell(c)
            | ClaimError::EmptyCell(c)
            | ClaimError::CellOutOfBounds(c) => Some(*c),
        }
    }
}

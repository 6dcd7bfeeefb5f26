//! Board system: grid coordinates, the undealt pool, and the engine.
//!
//! ## Key Types
//!
//! - `Cell`: `(row, column)` coordinate, flattened row-major
//! - `UndealtPool`: Card numbers not yet dealt
//! - `Board`: The grid, the pool, and the cached sets on the board
//! - `ClaimOutcome`: Result of a well-formed claim

pub mod engine;
pub mod grid;
pub mod pool;

pub use engine::{Board, BoardSnapshot, ClaimOutcome};
pub use grid::Cell;
pub use pool::UndealtPool;

//! Core engine types: RNG and configuration.
//!
//! Everything here is independent of the card attributes in use.

pub mod config;
pub mod rng;

pub use config::{BoardConfig, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use rng::{GameRng, GameRngState};

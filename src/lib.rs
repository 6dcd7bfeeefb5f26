//! # set-game
//!
//! The card game Set: a card codec, a set validator, and a board engine.
//!
//! ## Design Principles
//!
//! 1. **Registry Order Is Global**: The `AttributeRegistry` fixes the
//!    attribute order once. Index vectors and card numbers mean nothing
//!    without it, so every card carries a shared handle to its registry.
//!
//! 2. **Three Equivalent Card Forms**: Values, index vector and card
//!    number convert losslessly into each other.
//!
//! 3. **Cache Never Stale**: The board recomputes its sets inside every
//!    operation that changes a slot.
//!
//! 4. **Deterministic**: All randomness comes from an injected, seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: RNG and board configuration
//! - `cards`: Attributes, registry, card codec
//! - `rules`: Set validation
//! - `board`: Grid, undealt pool, board engine
//! - `render`: Text glyphs for cards and boards
//! - `game`: Session counters, hints, player commands
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod rules;
pub mod board;
pub mod render;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{BoardConfig, GameRng, GameRngState};

pub use crate::cards::{Attribute, AttributeRegistry, Card, CardNumber, CardValues};

pub use crate::rules::{SetCandidate, Validation, SET_SIZE};

pub use crate::board::{Board, BoardSnapshot, Cell, ClaimOutcome, UndealtPool};

pub use crate::game::{Command, HintTracker, Session, SessionStats, SessionStatus};

pub use crate::error::{BoardError, CardError, ClaimError, ConfigError, Error, ParseError};

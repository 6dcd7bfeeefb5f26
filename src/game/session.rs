//! A single-player game session.
//!
//! Wraps a `Board` with the bookkeeping a player sees: counters, play
//! time, and hint continuation. All rules live in the board engine.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::hints::HintTracker;
use crate::board::{Board, Cell, ClaimOutcome};
use crate::cards::{AttributeRegistry, Card};
use crate::core::{BoardConfig, GameRng};
use crate::error::{BoardError, ClaimError};

/// Counters kept for the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Well-formed claims, valid or not.
    pub proposed_sets: u32,
    /// Claims that formed a set.
    pub valid_sets: u32,
    /// Hint requests.
    pub hints_asked: u32,
    /// Board redraws.
    pub board_redrawn: u32,
}

/// Point-in-time summary for the `status` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    /// Counters at the time of the request.
    pub stats: SessionStats,
    /// Whole minutes since the session started.
    pub elapsed_minutes: u64,
    /// Cards not yet dealt.
    pub remaining_undealt: usize,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "proposed sets: {}", self.stats.proposed_sets)?;
        writeln!(f, "valid sets: {}", self.stats.valid_sets)?;
        writeln!(f, "hints asked: {}", self.stats.hints_asked)?;
        writeln!(f, "board redrawn: {}", self.stats.board_redrawn)?;
        writeln!(f, "Played for {} minute(s).", self.elapsed_minutes)?;
        write!(f, "There are {} unplayed cards left.", self.remaining_undealt)
    }
}

/// One player's game.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    stats: SessionStats,
    hints: HintTracker,
    hint_rng: GameRng,
    started: Instant,
}

impl Session {
    /// Start a game on a fresh board.
    ///
    /// Dealing and hints use independent streams derived from `seed`.
    pub fn new(
        registry: Arc<AttributeRegistry>,
        config: BoardConfig,
        seed: u64,
    ) -> Result<Self, BoardError> {
        let root = GameRng::new(seed);
        let board = Board::new(registry, config, root.for_context("deal"))?;
        info!(seed, rows = config.rows, columns = config.columns, "session started");
        Ok(Self::with_board(board, root.for_context("hint")))
    }

    /// Start a game on an existing board.
    #[must_use]
    pub fn with_board(board: Board, hint_rng: GameRng) -> Self {
        Self {
            board,
            stats: SessionStats::default(),
            hints: HintTracker::new(),
            hint_rng,
            started: Instant::now(),
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Propose three cells as a set.
    ///
    /// Malformed claims are not counted.
    pub fn propose(&mut self, cells: &[Cell]) -> Result<ClaimOutcome, ClaimError> {
        let outcome = self.board.claim(cells)?;
        self.stats.proposed_sets += 1;
        if outcome.valid {
            self.stats.valid_sets += 1;
        }
        info!(valid = outcome.valid, proposed = self.stats.proposed_sets, "set proposed");
        Ok(outcome)
    }

    /// Discard the board and deal a new one.
    pub fn redraw(&mut self) {
        self.stats.board_redrawn += 1;
        self.board.redraw();
    }

    /// Number of sets on the board.
    #[must_use]
    pub fn sets_available(&self) -> usize {
        self.board.sets_on_board().len()
    }

    /// Reveal one more card of a set on the board.
    ///
    /// Returns `None` when the board holds no set.
    pub fn hint(&mut self) -> Option<Card> {
        self.stats.hints_asked += 1;
        self.hints.next(&self.board, &mut self.hint_rng)
    }

    /// Cards revealed from the current hint set.
    #[must_use]
    pub fn hinted(&self) -> &[Card] {
        self.hints.hinted()
    }

    /// Counters so far.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Time since the session started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Summary of the session.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            stats: self.stats,
            elapsed_minutes: self.elapsed().as_secs() / 60,
            remaining_undealt: self.board.remaining_undealt_count(),
        }
    }

    /// True once the deck is dealt out and the board holds no set.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_complete()
    }
}

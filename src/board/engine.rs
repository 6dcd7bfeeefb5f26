//! The board engine.
//!
//! Owns the undealt pool, the grid of card slots, and the cached list of
//! sets currently on the board. Every operation that changes a slot
//! recomputes the cache before returning, so `sets_on_board` is never
//! observed out of sync with the cells.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use set_game::board::Board;
//! use set_game::cards::AttributeRegistry;
//! use set_game::core::{BoardConfig, GameRng};
//!
//! let registry = Arc::new(AttributeRegistry::standard());
//! let board = Board::new(registry, BoardConfig::new(), GameRng::new(42)).unwrap();
//!
//! assert_eq!(board.occupied_count(), 9);
//! assert_eq!(board.remaining_undealt_count(), 72);
//! assert!(!board.is_complete());
//! ```

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::grid::Cell;
use super::pool::UndealtPool;
use crate::cards::{AttributeRegistry, Card, CardNumber};
use crate::core::{BoardConfig, GameRng};
use crate::error::{BoardError, CardError, ClaimError};
use crate::rules::{cards_form_set, SetCandidate, SET_SIZE};

/// Result of a well-formed claim.
///
/// An invalid triple is a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Whether the claimed cards formed a set.
    pub valid: bool,
    /// Incompatible attribute names when `valid` is false.
    pub invalid_attributes: Vec<String>,
    /// The claimed cards, as they were on the board.
    pub set: SetCandidate,
}

/// Plain-data view of a board, for comparison and logging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Card number per slot, row-major.
    pub cells: Vec<Option<CardNumber>>,
    /// Undealt card numbers, ascending.
    pub undealt: Vec<CardNumber>,
    /// Sets on the board, in enumeration order.
    pub sets: Vec<Vec<CardNumber>>,
}

/// A `rows x columns` grid of cards dealt from one deck.
#[derive(Clone, Debug)]
pub struct Board {
    registry: Arc<AttributeRegistry>,
    config: BoardConfig,
    /// Slots, row-major. `None` once the pool ran dry.
    cells: Vec<Option<Card>>,
    pool: UndealtPool,
    /// Claimed or redrawn cards. Never returned to the pool.
    discarded: Vec<CardNumber>,
    sets_on_board: Vec<SetCandidate>,
    rng: GameRng,
}

impl Board {
    /// Create a board with a full deck and deal it.
    pub fn new(
        registry: Arc<AttributeRegistry>,
        config: BoardConfig,
        rng: GameRng,
    ) -> Result<Self, BoardError> {
        let cell_count = check_shape(&registry, config)?;

        let pool = UndealtPool::full(registry.total_cards());
        let mut board = Self {
            registry,
            config,
            cells: vec![None; cell_count],
            pool,
            discarded: Vec::new(),
            sets_on_board: Vec::new(),
            rng,
        };
        board.deal();
        Ok(board)
    }

    /// Create a board from an explicit layout and pool.
    ///
    /// `layout` holds one optional card number per slot, row-major.
    /// Cards that are neither on the board nor in `undealt` count as
    /// already discarded. Nothing is dealt.
    pub fn with_layout(
        registry: Arc<AttributeRegistry>,
        config: BoardConfig,
        layout: &[Option<usize>],
        undealt: &[usize],
        rng: GameRng,
    ) -> Result<Self, BoardError> {
        let cell_count = check_shape(&registry, config)?;
        if layout.len() != cell_count {
            return Err(BoardError::LayoutSize {
                expected: cell_count,
                found: layout.len(),
            });
        }

        let cells = layout
            .iter()
            .map(|slot| slot.map(|n| Card::from_number(&registry, n)).transpose())
            .collect::<Result<Vec<_>, _>>()?;

        let total = registry.total_cards();
        let mut seen = FxHashSet::default();
        let placed = cells.iter().flatten().map(|c| c.number().raw());
        for number in placed.chain(undealt.iter().copied()) {
            if number >= total {
                return Err(CardError::CardNumberOutOfRange { number, total }.into());
            }
            if !seen.insert(number) {
                return Err(BoardError::DuplicateCard { number });
            }
        }

        let discarded = (0..total)
            .filter(|n| !seen.contains(n))
            .map(CardNumber)
            .collect();

        let mut board = Self {
            registry,
            config,
            cells,
            pool: UndealtPool::from_numbers(undealt.iter().copied().map(CardNumber)),
            discarded,
            sets_on_board: Vec::new(),
            rng,
        };
        board.refresh_sets();
        Ok(board)
    }

    // === Mutation ===

    /// Fill empty slots from the pool, in slot order.
    ///
    /// Stops early when the pool runs out. Returns the number of cards dealt.
    pub fn deal(&mut self) -> usize {
        let mut dealt = 0;
        for index in 0..self.cells.len() {
            if self.cells[index].is_some() {
                continue;
            }
            let Some(card) = self.draw_card() else {
                break;
            };
            self.cells[index] = Some(card);
            dealt += 1;
        }

        self.refresh_sets();
        debug!(
            dealt,
            undealt = self.pool.len(),
            sets = self.sets_on_board.len(),
            "dealt cards"
        );
        dealt
    }

    /// Claim three cells as a set.
    ///
    /// Malformed input is rejected with no change to the board. A
    /// well-formed claim is checked against the cards on the board right
    /// now; a valid set is replaced from the pool (or its slots emptied
    /// when the pool is exhausted).
    pub fn claim(&mut self, cells: &[Cell]) -> Result<ClaimOutcome, ClaimError> {
        if cells.len() != SET_SIZE {
            return Err(ClaimError::WrongArity {
                expected: SET_SIZE,
                found: cells.len(),
            });
        }
        if let Some(cell) = cells.iter().find(|c| !c.in_bounds(self.config.rows, self.config.columns)) {
            return Err(ClaimError::CellOutOfBounds(*cell));
        }
        for (i, cell) in cells.iter().enumerate() {
            if cells[..i].contains(cell) {
                return Err(ClaimError::DuplicateCell(*cell));
            }
        }

        let cards = cells
            .iter()
            .map(|&cell| self.card_at(cell).cloned().ok_or(ClaimError::EmptyCell(cell)))
            .collect::<Result<Vec<_>, _>>()?;
        let set = SetCandidate::new(cards)?;
        let validation = set.validate();

        if !validation.valid {
            debug!(?cells, invalid = ?validation.invalid_attributes, "rejected claim");
            return Ok(ClaimOutcome {
                valid: false,
                invalid_attributes: validation.invalid_attributes,
                set,
            });
        }

        for cell in cells {
            let index = cell.flatten(self.config.columns);
            if let Some(old) = self.cells[index].take() {
                self.discarded.push(old.number());
            }
            self.cells[index] = self.draw_card();
        }
        self.refresh_sets();

        debug!(
            ?cells,
            undealt = self.pool.len(),
            sets = self.sets_on_board.len(),
            "accepted claim"
        );
        Ok(ClaimOutcome {
            valid: true,
            invalid_attributes: Vec::new(),
            set,
        })
    }

    /// Discard every card on the board and deal a fresh grid.
    ///
    /// The discarded cards do not go back into the pool. Returns the
    /// number of cards dealt.
    pub fn redraw(&mut self) -> usize {
        for slot in &mut self.cells {
            if let Some(old) = slot.take() {
                self.discarded.push(old.number());
            }
        }
        debug!(discarded = self.discarded.len(), "redrawing board");
        self.deal()
    }

    // === Queries ===

    /// Enumerate the sets among the occupied slots.
    ///
    /// Triples are visited in ascending slot order `(i, j, k)`, `i < j < k`,
    /// and the result keeps that order.
    #[must_use]
    pub fn find_sets(&self) -> Vec<SetCandidate> {
        let occupied: Vec<&Card> = self.cells.iter().flatten().collect();
        let mut found = Vec::new();

        for i in 0..occupied.len() {
            for j in (i + 1)..occupied.len() {
                for k in (j + 1)..occupied.len() {
                    let triple = [occupied[i], occupied[j], occupied[k]];
                    if cards_form_set(&triple) {
                        found.push(SetCandidate::from_triple(triple.map(Card::clone)));
                    }
                }
            }
        }

        found
    }

    /// Sets on the board, as of the last mutation.
    #[must_use]
    pub fn sets_on_board(&self) -> &[SetCandidate] {
        &self.sets_on_board
    }

    /// True when the pool is empty and no set remains on the board.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pool.is_empty() && self.sets_on_board.is_empty()
    }

    /// The card in a slot, `None` if empty or off the grid.
    #[must_use]
    pub fn card_at(&self, cell: Cell) -> Option<&Card> {
        if !cell.in_bounds(self.config.rows, self.config.columns) {
            return None;
        }
        self.cells.get(cell.flatten(self.config.columns))?.as_ref()
    }

    /// Occupied slots with their cards, row-major.
    #[must_use]
    pub fn occupied_cells(&self) -> Vec<(Cell, &Card)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| {
                slot.as_ref()
                    .map(|card| (Cell::from_index(i, self.config.columns), card))
            })
            .collect()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Check if every given card is currently on the board.
    #[must_use]
    pub fn contains_cards(&self, cards: &[Card]) -> bool {
        cards
            .iter()
            .all(|card| self.cells.iter().flatten().any(|c| c == card))
    }

    /// Number of cards not yet dealt.
    #[must_use]
    pub fn remaining_undealt_count(&self) -> usize {
        self.pool.len()
    }

    /// The undealt pool.
    #[must_use]
    pub fn undealt(&self) -> &UndealtPool {
        &self.pool
    }

    /// Cards taken off the board by claims and redraws.
    #[must_use]
    pub fn discarded(&self) -> &[CardNumber] {
        &self.discarded
    }

    /// The registry cards are decoded against.
    #[must_use]
    pub fn registry(&self) -> &Arc<AttributeRegistry> {
        &self.registry
    }

    /// Grid shape.
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Raw slots, row-major.
    #[must_use]
    pub fn slots(&self) -> &[Option<Card>] {
        &self.cells
    }

    /// Plain-data copy of the board state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self
                .cells
                .iter()
                .map(|slot| slot.as_ref().map(Card::number))
                .collect(),
            undealt: self.pool.numbers().to_vec(),
            sets: self
                .sets_on_board
                .iter()
                .map(|s| s.cards().iter().map(Card::number).collect())
                .collect(),
        }
    }

    // === Internal ===

    fn draw_card(&mut self) -> Option<Card> {
        let number = self.pool.draw(&mut self.rng)?;
        trace!(%number, undealt = self.pool.len(), "drew card");
        Some(Card::decode(&self.registry, number))
    }

    fn refresh_sets(&mut self) {
        self.sets_on_board = self.find_sets();
    }
}

/// Validate the grid shape and return its cell count.
fn check_shape(registry: &AttributeRegistry, config: BoardConfig) -> Result<usize, BoardError> {
    if config.rows == 0 || config.columns == 0 {
        return Err(BoardError::EmptyBoard);
    }
    match config.cell_count() {
        Some(cells) if cells <= registry.total_cards() => Ok(cells),
        _ => Err(BoardError::BoardTooLarge {
            rows: config.rows,
            columns: config.columns,
            total: registry.total_cards(),
        }),
    }
}

//! The undealt pool: card numbers not yet placed on the board.
//!
//! Kept in ascending order so a given RNG state always draws the same
//! card. Drawing removes the card; nothing is ever put back.

use serde::{Deserialize, Serialize};

use crate::cards::CardNumber;
use crate::core::GameRng;

/// Card numbers still available for dealing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndealtPool {
    numbers: Vec<CardNumber>,
}

impl UndealtPool {
    /// A pool holding the whole deck `0..total`.
    #[must_use]
    pub fn full(total: usize) -> Self {
        Self {
            numbers: (0..total).map(CardNumber).collect(),
        }
    }

    /// A pool holding exactly the given numbers.
    #[must_use]
    pub fn from_numbers(numbers: impl IntoIterator<Item = CardNumber>) -> Self {
        let mut numbers: Vec<CardNumber> = numbers.into_iter().collect();
        numbers.sort_unstable();
        numbers.dedup();
        Self { numbers }
    }

    /// Draw one number uniformly at random and remove it.
    ///
    /// Returns `None` when the pool is empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<CardNumber> {
        let index = rng.gen_index(self.numbers.len())?;
        Some(self.numbers.remove(index))
    }

    /// Check if a number is still undealt.
    #[must_use]
    pub fn contains(&self, number: CardNumber) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Undealt numbers, ascending.
    #[must_use]
    pub fn numbers(&self) -> &[CardNumber] {
        &self.numbers
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Check if every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

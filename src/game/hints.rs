//! Hint continuation.
//!
//! A hint reveals one card of a set on the board. Consecutive hints walk
//! through the same set until all of its cards are revealed; a fresh set
//! is sampled when there is no current set, when it has been fully
//! revealed, or when any of its cards has left the board.

use crate::board::Board;
use crate::cards::Card;
use crate::core::GameRng;
use crate::rules::SetCandidate;

/// State of the hints given so far.
#[derive(Clone, Debug, Default)]
pub struct HintTracker {
    set: Option<SetCandidate>,
    hinted: Vec<Card>,
}

impl HintTracker {
    /// Create a tracker with no hint given yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal the next hinted card.
    ///
    /// Returns `None` when the board holds no set.
    pub fn next(&mut self, board: &Board, rng: &mut GameRng) -> Option<Card> {
        if self.can_continue(board) {
            let set = self.set.as_ref()?;
            let remaining: Vec<&Card> = set
                .cards()
                .iter()
                .filter(|c| !self.hinted.contains(c))
                .collect();
            let card = (*rng.choose(&remaining)?).clone();
            self.hinted.push(card.clone());
            return Some(card);
        }

        let set = rng.choose(board.sets_on_board())?.clone();
        let card = rng.choose(set.cards())?.clone();
        self.set = Some(set);
        self.hinted = vec![card.clone()];
        Some(card)
    }

    /// Cards revealed from the current hint set.
    #[must_use]
    pub fn hinted(&self) -> &[Card] {
        &self.hinted
    }

    /// The set the current hints are drawn from.
    #[must_use]
    pub fn current_set(&self) -> Option<&SetCandidate> {
        self.set.as_ref()
    }

    fn can_continue(&self, board: &Board) -> bool {
        match &self.set {
            Some(set) => self.hinted.len() < set.cards().len() && board.contains_cards(set.cards()),
            None => false,
        }
    }
}

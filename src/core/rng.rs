//! Deterministic random number generation for dealing and hints.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Injectable**: The board takes its `GameRng` by value, so tests pick the seed
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use set_game::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same draws
//! assert_eq!(rng1.gen_index(81), rng2.gen_index(81));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Odd 64-bit constant spreading seeds across the word.
const GOLDEN_RATIO: u64 = 0x9E37_79B9_7F4A_7C15;

/// 64-bit FNV prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Deterministic RNG backing every random choice in a game.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Separates randomness domains (dealing vs hints) so that asking for
    /// a hint never changes which cards are dealt next. The derived seed
    /// is a fixed FNV-1a mix of the seed and the context bytes, so it is
    /// stable across builds and toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let seed = context
            .bytes()
            .fold(self.seed.wrapping_mul(GOLDEN_RATIO), |acc, byte| {
                (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
            });
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniformly random index in `0..len`.
    ///
    /// Returns `None` when `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let mut deal = rng.for_context("deal");
        let mut hint = rng.for_context("hint");
        let mut deal_again = GameRng::new(42).for_context("deal");

        let seq1: Vec<_> = (0..10).map(|_| deal.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| hint.gen_index(1000)).collect();
        let seq3: Vec<_> = (0..10).map(|_| deal_again.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
        assert_eq!(seq1, seq3);
    }

    #[test]
    fn test_context_seeds_are_fixed() {
        assert_eq!(GameRng::new(42).for_context("deal").seed(), 0x0C03_FEE2_04CD_DB60);
        assert_eq!(GameRng::new(42).for_context("hint").seed(), 0x7A84_F505_9849_90FF);
        assert_eq!(GameRng::new(0).for_context("deal").seed(), 0x23F0_503F_C6E6_9976);
    }

    #[test]
    fn test_gen_index_bounds() {
        let mut rng = GameRng::new(7);

        assert_eq!(rng.gen_index(0), None);
        assert_eq!(rng.gen_index(1), Some(0));
        for _ in 0..200 {
            let i = rng.gen_index(5).unwrap();
            assert!(i < 5);
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_index(81);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index(81)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index(81)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}

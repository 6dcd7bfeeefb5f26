//! Board engine tests.
//!
//! These tests verify the board across whole games:
//! - the cached sets always equal a brute-force enumeration
//! - every card is on the board, undealt, or discarded, exactly once
//! - rejected claims leave the board untouched
//! - games always reach the terminal state

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use set_game::board::{Board, BoardSnapshot, Cell};
use set_game::cards::{AttributeRegistry, Card};
use set_game::core::{BoardConfig, GameRng};
use set_game::error::BoardError;
use set_game::rules::validate;

fn registry() -> Arc<AttributeRegistry> {
    Arc::new(AttributeRegistry::standard())
}

/// Every triple of occupied slots that validates, as sorted card numbers.
fn brute_force_sets(board: &Board) -> HashSet<Vec<usize>> {
    let cards: Vec<&Card> = board.slots().iter().flatten().collect();
    let mut found = HashSet::new();
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            for k in (j + 1)..cards.len() {
                let triple = [cards[i].clone(), cards[j].clone(), cards[k].clone()];
                if validate(&triple).unwrap().valid {
                    let mut numbers: Vec<usize> = triple.iter().map(|c| c.number().raw()).collect();
                    numbers.sort_unstable();
                    found.insert(numbers);
                }
            }
        }
    }
    found
}

fn cached_sets(board: &Board) -> HashSet<Vec<usize>> {
    board
        .sets_on_board()
        .iter()
        .map(|set| {
            let mut numbers: Vec<usize> = set.cards().iter().map(|c| c.number().raw()).collect();
            numbers.sort_unstable();
            numbers
        })
        .collect()
}

/// Board + undealt + discarded partition the deck.
fn assert_conserved(board: &Board) {
    let mut seen = HashSet::new();
    let on_board = board.slots().iter().flatten().map(|c| c.number().raw());
    let undealt = board.undealt().numbers().iter().map(|n| n.raw());
    let discarded = board.discarded().iter().map(|n| n.raw());

    for number in on_board.chain(undealt).chain(discarded) {
        assert!(seen.insert(number), "card {number} appears twice");
    }
    assert_eq!(seen.len(), board.registry().total_cards());
}

/// Cells holding the cards of the first set on the board.
fn first_set_cells(board: &Board) -> Option<Vec<Cell>> {
    let set = board.sets_on_board().first()?;
    Some(
        board
            .occupied_cells()
            .into_iter()
            .filter(|(_, card)| set.contains(card))
            .map(|(cell, _)| cell)
            .collect(),
    )
}

/// Play by claiming the first set or redrawing, checking invariants each step.
fn play_to_completion(mut board: Board) -> Board {
    for _ in 0..200 {
        assert_conserved(&board);
        assert_eq!(cached_sets(&board), brute_force_sets(&board));

        if board.is_complete() {
            return board;
        }
        match first_set_cells(&board) {
            Some(cells) => assert!(board.claim(&cells).unwrap().valid),
            None => {
                board.redraw();
            }
        }
    }
    panic!("game did not finish");
}

/// Games from many seeds all finish with an empty pool and no set.
#[test]
fn test_games_finish() {
    for seed in 0..20 {
        let board = Board::new(registry(), BoardConfig::new(), GameRng::new(seed)).unwrap();
        let board = play_to_completion(board);

        assert_eq!(board.remaining_undealt_count(), 0);
        assert!(board.sets_on_board().is_empty());
        assert!(board.find_sets().is_empty());
    }
}

/// The terminal check holds on non-default shapes too.
#[test]
fn test_games_finish_other_shapes() {
    for (rows, columns) in [(3, 4), (1, 3), (4, 5)] {
        let config = BoardConfig::new().with_rows(rows).with_columns(columns);
        let board = Board::new(registry(), config, GameRng::new(99)).unwrap();
        let board = play_to_completion(board);
        assert!(board.is_complete());
    }
}

/// A freshly dealt 3x3 board always has cards left to deal.
#[test]
fn test_fresh_board_not_complete() {
    for seed in 0..50 {
        let board = Board::new(registry(), BoardConfig::new(), GameRng::new(seed)).unwrap();
        assert!(!board.is_complete());
        assert_eq!(board.occupied_count() + board.remaining_undealt_count(), 81);
    }
}

/// A claim reads the cards on the board now, not a remembered set.
#[test]
fn test_claim_reads_live_cards() {
    let layout: Vec<Option<usize>> = (0..9).map(Some).collect();
    let undealt: Vec<usize> = (40..50).collect();
    let mut board =
        Board::with_layout(registry(), BoardConfig::new(), &layout, &undealt, GameRng::new(6)).unwrap();

    let row = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
    let first = board.claim(&row).unwrap();
    assert!(first.valid);

    let live: Vec<Card> = row.iter().map(|&c| board.card_at(c).unwrap().clone()).collect();
    let again = board.claim(&row).unwrap();
    assert_eq!(again.set.cards(), live.as_slice());
    assert!(again.set.cards().iter().all(|c| !first.set.contains(c)));
}

/// Invalid and malformed claims change nothing, including the RNG.
#[test]
fn test_rejections_are_atomic() {
    let layout: Vec<Option<usize>> = (0..9).map(Some).collect();
    let undealt: Vec<usize> = (20..30).collect();
    let mut board =
        Board::with_layout(registry(), BoardConfig::new(), &layout, &undealt, GameRng::new(8)).unwrap();
    let mut twin = board.clone();
    let before = board.snapshot();

    // 0, 1, 3: fill and shape each take two values.
    assert!(!board.claim(&[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]).unwrap().valid);
    assert!(board.claim(&[Cell::new(0, 0), Cell::new(9, 9), Cell::new(1, 0)]).is_err());
    assert!(board.claim(&[Cell::new(0, 0), Cell::new(0, 0), Cell::new(1, 0)]).is_err());
    assert!(board.claim(&[]).is_err());
    assert_eq!(board.snapshot(), before);

    // Same draws afterwards as a board that saw no rejected claims.
    let row = [Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)];
    board.claim(&row).unwrap();
    twin.claim(&row).unwrap();
    assert_eq!(board.snapshot(), twin.snapshot());
}

/// A restored RNG deals the same board as the one it was saved from.
#[test]
fn test_restored_rng_deals_same_board() {
    let mut rng = GameRng::new(77);
    for _ in 0..10 {
        rng.gen_index(81);
    }
    let saved = rng.state();

    let original = Board::new(registry(), BoardConfig::new(), rng).unwrap();
    let restored = Board::new(registry(), BoardConfig::new(), GameRng::from_state(&saved)).unwrap();
    assert_eq!(original.snapshot(), restored.snapshot());
}

/// Shapes whose cell count overflows are too large, not empty.
#[test]
fn test_overflowing_shape_rejected() {
    let config = BoardConfig::new().with_rows(1 << 32).with_columns(1 << 32);
    assert_eq!(config.cell_count(), None);

    let err = Board::new(registry(), config, GameRng::new(0)).unwrap_err();
    assert_eq!(
        err,
        BoardError::BoardTooLarge {
            rows: 1 << 32,
            columns: 1 << 32,
            total: 81,
        }
    );
}

/// Snapshots serialize for logging and comparison.
#[test]
fn test_snapshot_serializes() {
    let board = Board::new(registry(), BoardConfig::new(), GameRng::new(12)).unwrap();
    let json = serde_json::to_string(&board.snapshot()).unwrap();
    let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(board.snapshot(), back);
}

proptest! {
    #[test]
    fn prop_cached_sets_match_brute_force(
        numbers in prop::sample::subsequence((0usize..81).collect::<Vec<_>>(), 0..=12)
            .prop_shuffle()
    ) {
        let config = BoardConfig::new().with_rows(3).with_columns(4);
        let mut layout: Vec<Option<usize>> = numbers.into_iter().map(Some).collect();
        layout.resize(12, None);

        let board = Board::with_layout(registry(), config, &layout, &[], GameRng::new(0)).unwrap();
        prop_assert_eq!(cached_sets(&board), brute_force_sets(&board));
        let found = board.find_sets();
        prop_assert_eq!(found.as_slice(), board.sets_on_board());
    }

    #[test]
    fn prop_deal_is_deterministic(seed in any::<u64>()) {
        let a = Board::new(registry(), BoardConfig::new(), GameRng::new(seed)).unwrap();
        let b = Board::new(registry(), BoardConfig::new(), GameRng::new(seed)).unwrap();
        prop_assert_eq!(a.snapshot(), b.snapshot());
        assert_conserved(&a);
    }
}

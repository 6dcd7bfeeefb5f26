//! Text rendering of cards and boards.
//!
//! A card renders as its color initial followed by its symbol repeated
//! `count` times, padded to a fixed width: three green squares with dots
//! render as `g▣▣▣`, one red empty circle as `r◯  `.
//!
//! Only the color, count, shape and fill values are read. Cards from a
//! registry without those attributes render with `?` placeholders.

use crate::board::{Board, Cell};
use crate::cards::{Card, COLOR, COUNT, FILL, SHAPE};
use crate::rules::SetCandidate;

/// Symbols are padded to this many columns.
pub const GLYPH_WIDTH: usize = 3;

/// Placeholder for an empty slot.
pub const EMPTY_SLOT: &str = "·   ";

/// Symbol per shape, indexed by fill in `FILLS` order.
const SHAPES: [(&str, [char; 3]); 3] = [
    ("square", ['▢', '▣', '■']),
    ("triangle", ['△', '◬', '▲']),
    ("circle", ['◯', '◉', '●']),
];

const FILLS: [&str; 3] = ["empty", "dots", "filled"];

/// Symbol for a (shape, fill) pair.
#[must_use]
pub fn symbol(shape: &str, fill: &str) -> Option<char> {
    let (_, symbols) = SHAPES.iter().find(|(s, _)| *s == shape)?;
    let fill_index = FILLS.iter().position(|f| *f == fill)?;
    Some(symbols[fill_index])
}

/// Render a single card.
///
/// ```
/// use std::sync::Arc;
/// use set_game::cards::{AttributeRegistry, Card, CardValues};
/// use set_game::render::card_glyph;
///
/// let registry = Arc::new(AttributeRegistry::standard());
/// let values = CardValues::new()
///     .with("color", "green")
///     .with("count", "3")
///     .with("fill", "dots")
///     .with("shape", "square");
/// let card = Card::from_values(&registry, &values).unwrap();
///
/// assert_eq!(card_glyph(&card), "g▣▣▣");
/// ```
#[must_use]
pub fn card_glyph(card: &Card) -> String {
    let color = card
        .value(COLOR)
        .and_then(|c| c.chars().next())
        .unwrap_or('?');
    let count = card
        .value(COUNT)
        .and_then(|c| c.parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, GLYPH_WIDTH);
    let mark = match (card.value(SHAPE), card.value(FILL)) {
        (Some(shape), Some(fill)) => symbol(shape, fill).unwrap_or('?'),
        _ => '?',
    };

    let mut glyph = String::with_capacity(1 + GLYPH_WIDTH * 3);
    glyph.push(color);
    glyph.extend(std::iter::repeat(mark).take(count));
    glyph.extend(std::iter::repeat(' ').take(GLYPH_WIDTH - count));
    glyph
}

/// Render a candidate set on one line.
#[must_use]
pub fn set_glyphs(set: &SetCandidate) -> String {
    set.cards()
        .iter()
        .map(card_glyph)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the board as a grid with row and column labels.
#[must_use]
pub fn board_grid(board: &Board) -> String {
    let config = board.config();
    let mut out = String::new();

    let header: Vec<String> = (0..config.columns).map(|c| c.to_string()).collect();
    out.push_str(&format!(" \t{}\n", header.join("\t")));

    for row in 0..config.rows {
        let cells: Vec<String> = (0..config.columns)
            .map(|column| {
                board
                    .card_at(Cell::new(row, column))
                    .map_or_else(|| EMPTY_SLOT.to_string(), card_glyph)
            })
            .collect();
        out.push_str(&format!("{}\t{}\n", row, cells.join("\t")));
    }

    out
}

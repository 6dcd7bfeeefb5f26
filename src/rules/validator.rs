//! Set validation.
//!
//! An attribute is compatible across a group of cards when the cards
//! either all share its value or all differ on it. A group is a set when
//! every attribute is compatible. For three cards, two distinct values
//! is the only failing case.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::cards::Card;
use crate::error::ClaimError;

/// Number of cards in a set.
pub const SET_SIZE: usize = 3;

/// Check one attribute column: all equal or pairwise distinct.
///
/// ```
/// use set_game::rules::is_compatible;
///
/// assert!(is_compatible(&[0, 0, 0]));
/// assert!(is_compatible(&[1, 0, 2]));
/// assert!(!is_compatible(&[0, 0, 2]));
/// ```
#[must_use]
pub fn is_compatible(column: &[usize]) -> bool {
    let mut distinct: SmallVec<[usize; SET_SIZE]> = column.iter().copied().collect();
    distinct.sort_unstable();
    distinct.dedup();
    distinct.len() == 1 || distinct.len() == column.len()
}

/// Check that every card was decoded against the same registry.
fn share_registry<'a>(mut cards: impl Iterator<Item = &'a Card>) -> bool {
    let Some(first) = cards.next() else {
        return true;
    };
    cards.all(|c| Arc::ptr_eq(first.registry(), c.registry()) || first.registry() == c.registry())
}

/// Check a group of cards without building a candidate.
///
/// Used by board-wide enumeration, which tests many more groups than
/// it keeps. Cards from different registries never form a set.
#[must_use]
pub fn cards_form_set(cards: &[&Card]) -> bool {
    if !share_registry(cards.iter().copied()) {
        return false;
    }
    let width = cards.first().map_or(0, |c| c.indices().len());
    (0..width).all(|p| {
        let column: SmallVec<[usize; SET_SIZE]> = cards.iter().map(|c| c.indices()[p]).collect();
        is_compatible(&column)
    })
}

/// Result of checking a candidate set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    /// Whether every attribute is compatible.
    pub valid: bool,
    /// Names of incompatible attributes, in registry order.
    pub invalid_attributes: Vec<String>,
}

/// A candidate triple of cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SetCandidate {
    cards: SmallVec<[Card; SET_SIZE]>,
}

impl SetCandidate {
    /// Create a candidate from exactly three cards of one registry.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self, ClaimError> {
        let cards: SmallVec<[Card; SET_SIZE]> = cards.into_iter().collect();
        if cards.len() != SET_SIZE {
            return Err(ClaimError::WrongArity {
                expected: SET_SIZE,
                found: cards.len(),
            });
        }
        if !share_registry(cards.iter()) {
            return Err(ClaimError::MixedRegistries);
        }
        Ok(Self { cards })
    }

    /// Create a candidate from a triple the caller knows shares a registry.
    #[must_use]
    pub(crate) fn from_triple(cards: [Card; SET_SIZE]) -> Self {
        Self {
            cards: SmallVec::from_buf(cards),
        }
    }

    /// The cards, in the order given.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Check if a card is part of this candidate.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Per-attribute columns of index values, one list per attribute.
    ///
    /// E.g. three cards colored red, red and blue give `[2, 2, 0]` for color.
    #[must_use]
    pub fn columns(&self) -> Vec<SmallVec<[usize; SET_SIZE]>> {
        let width = self.cards.first().map_or(0, |c| c.indices().len());
        (0..width)
            .map(|p| self.cards.iter().map(|c| c.indices()[p]).collect())
            .collect()
    }

    /// Whether the cards form a set.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.columns().iter().all(|col| is_compatible(col))
    }

    /// Names of the attributes that are not compatible.
    #[must_use]
    pub fn invalid_attributes(&self) -> Vec<String> {
        let Some(first) = self.cards.first() else {
            return Vec::new();
        };
        let registry = first.registry();

        self.columns()
            .iter()
            .enumerate()
            .filter(|(_, col)| !is_compatible(col))
            .filter_map(|(p, _)| registry.attribute_at(p).map(|a| a.name().to_string()))
            .collect()
    }

    /// Validity plus diagnostics in one pass.
    #[must_use]
    pub fn validate(&self) -> Validation {
        let invalid_attributes = self.invalid_attributes();
        Validation {
            valid: invalid_attributes.is_empty(),
            invalid_attributes,
        }
    }
}

impl std::fmt::Display for SetCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Check three cards in one call.
pub fn validate(cards: &[Card]) -> Result<Validation, ClaimError> {
    Ok(SetCandidate::new(cards.iter().cloned())?.validate())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{AttributeRegistry, CardValues};

    fn card(registry: &Arc<AttributeRegistry>, color: &str, count: &str, shape: &str, fill: &str) -> Card {
        let values = CardValues::new()
            .with("color", color)
            .with("count", count)
            .with("shape", shape)
            .with("fill", fill);
        Card::from_values(registry, &values).unwrap()
    }

    #[test]
    fn test_is_compatible() {
        assert!(is_compatible(&[2, 2, 2]));
        assert!(is_compatible(&[0, 1, 2]));
        assert!(!is_compatible(&[0, 0, 1]));
        assert!(!is_compatible(&[1, 0, 1]));
    }

    #[test]
    fn test_is_compatible_other_sizes() {
        assert!(is_compatible(&[3, 1, 0, 2]));
        assert!(is_compatible(&[1, 1, 1, 1]));
        assert!(!is_compatible(&[0, 1, 2, 2]));
        assert!(!is_compatible(&[0, 0, 1, 1]));
    }

    #[test]
    fn test_counts_differ_is_valid() {
        let r = Arc::new(AttributeRegistry::standard());
        let set = SetCandidate::new([
            card(&r, "red", "1", "square", "empty"),
            card(&r, "red", "2", "square", "empty"),
            card(&r, "red", "3", "square", "empty"),
        ])
        .unwrap();

        assert!(set.is_valid());
        assert!(set.invalid_attributes().is_empty());
    }

    #[test]
    fn test_invalid_reports_count() {
        let r = Arc::new(AttributeRegistry::standard());
        let set = SetCandidate::new([
            card(&r, "red", "1", "square", "empty"),
            card(&r, "red", "2", "square", "empty"),
            card(&r, "blue", "1", "circle", "filled"),
        ])
        .unwrap();

        let validation = set.validate();
        assert!(!validation.valid);
        assert_eq!(validation.invalid_attributes, vec!["color", "count", "fill", "shape"]);
    }

    #[test]
    fn test_columns() {
        let r = Arc::new(AttributeRegistry::standard());
        let set = SetCandidate::new([
            card(&r, "red", "1", "square", "empty"),
            card(&r, "red", "2", "square", "empty"),
            card(&r, "blue", "3", "circle", "dots"),
        ])
        .unwrap();

        let columns = set.columns();
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0].as_slice(), &[2, 2, 0]);
        assert_eq!(columns[1].as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_wrong_arity() {
        let r = Arc::new(AttributeRegistry::standard());
        let a = Card::from_number(&r, 0).unwrap();
        let b = Card::from_number(&r, 1).unwrap();

        assert_eq!(
            SetCandidate::new([a.clone(), b.clone()]),
            Err(ClaimError::WrongArity { expected: 3, found: 2 })
        );
        assert!(validate(&[a, b]).is_err());
    }

    #[test]
    fn test_mixed_registries_rejected() {
        use crate::cards::Attribute;

        let standard = Arc::new(AttributeRegistry::standard());
        let narrow = Arc::new(
            AttributeRegistry::new(vec![Attribute::new("color", ["blue", "green", "red"]).unwrap()]).unwrap(),
        );
        let a = Card::from_number(&standard, 0).unwrap();
        let b = Card::from_number(&standard, 1).unwrap();
        let c = Card::from_number(&narrow, 2).unwrap();

        assert_eq!(
            validate(&[a.clone(), b.clone(), c.clone()]),
            Err(ClaimError::MixedRegistries)
        );
        assert_eq!(
            validate(&[c.clone(), a.clone(), b.clone()]),
            Err(ClaimError::MixedRegistries)
        );
        assert!(!cards_form_set(&[&a, &b, &c]));
        assert!(!cards_form_set(&[&c, &a, &b]));
    }

    #[test]
    fn test_equal_registries_mix() {
        let r1 = Arc::new(AttributeRegistry::standard());
        let r2 = Arc::new(AttributeRegistry::standard());
        let a = Card::from_number(&r1, 0).unwrap();
        let b = Card::from_number(&r2, 1).unwrap();
        let c = Card::from_number(&r1, 2).unwrap();

        assert!(validate(&[a.clone(), b.clone(), c.clone()]).unwrap().valid);
        assert!(cards_form_set(&[&a, &b, &c]));
    }
}

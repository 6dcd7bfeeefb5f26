//! Cards and the card codec.
//!
//! A card has three equivalent representations:
//!
//! - **values**: attribute name → option, e.g. `color = red`
//! - **indices**: one option index per attribute, in registry order
//! - **number**: the mixed-radix encoding of the indices in `[0, total_cards)`
//!
//! Position 0 of the index vector is the most significant digit of the
//! number, so the deck `0..total_cards` walks the cards in the same
//! order as nested loops over the attributes in registry order.
//!
//! ```
//! use std::sync::Arc;
//! use set_game::cards::{AttributeRegistry, Card, CardValues};
//!
//! let registry = Arc::new(AttributeRegistry::standard());
//! let values = CardValues::new()
//!     .with("color", "red")
//!     .with("count", "2")
//!     .with("fill", "empty")
//!     .with("shape", "square");
//!
//! let card = Card::from_values(&registry, &values).unwrap();
//! assert_eq!(card.indices(), &[2, 1, 1, 1]);
//! assert_eq!(card.number().raw(), 67);
//! assert_eq!(Card::from_number(&registry, 67).unwrap(), card);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::AttributeRegistry;
use crate::error::CardError;

/// Index vector of a card, one entry per attribute.
pub type CardIndices = SmallVec<[usize; 4]>;

/// Dense card identifier in `[0, total_cards)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardNumber(pub usize);

impl CardNumber {
    /// Create a new card number.
    #[must_use]
    pub const fn new(number: usize) -> Self {
        Self(number)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A complete attribute → value assignment, the input of `Card::from_values`.
///
/// Keys are kept sorted, so iteration follows registry order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardValues(BTreeMap<String, String>);

impl CardValues {
    /// Create an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value (builder pattern).
    #[must_use]
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    /// Set a value, returning the previous one.
    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(attribute.into(), value.into())
    }

    /// Get the value of an attribute.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }

    /// Attribute names present.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate `(attribute, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes assigned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CardValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// An immutable card.
///
/// Carries a shared handle to the registry it was decoded against, so
/// values can be read back without passing the registry around.
/// Two cards are equal iff their index vectors are equal.
#[derive(Clone)]
pub struct Card {
    registry: Arc<AttributeRegistry>,
    indices: CardIndices,
    number: CardNumber,
}

impl Card {
    /// Build a card from a complete attribute assignment.
    ///
    /// The assignment must name exactly the registry's attributes.
    pub fn from_values(registry: &Arc<AttributeRegistry>, values: &CardValues) -> Result<Self, CardError> {
        let missing: Vec<String> = registry
            .attributes()
            .iter()
            .map(|a| a.name())
            .filter(|name| values.get(name).is_none())
            .map(str::to_string)
            .collect();
        let unexpected: Vec<String> = values
            .names()
            .filter(|name| registry.position_of(name).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(CardError::IncompleteCard { missing, unexpected });
        }

        let indices = registry
            .attributes()
            .iter()
            .map(|attr| {
                let value = values.get(attr.name()).unwrap_or_default();
                attr.value_to_index(value)
            })
            .collect::<Result<CardIndices, _>>()?;

        Ok(Self::assemble(registry, indices))
    }

    /// Build a card from its index vector.
    pub fn from_indices(registry: &Arc<AttributeRegistry>, indices: &[usize]) -> Result<Self, CardError> {
        if indices.len() != registry.len() {
            return Err(CardError::WrongIndexCount {
                expected: registry.len(),
                found: indices.len(),
            });
        }

        for (attr, &index) in registry.attributes().iter().zip(indices) {
            attr.index_to_value(index)?;
        }

        Ok(Self::assemble(registry, indices.iter().copied().collect()))
    }

    /// Build a card from its number.
    pub fn from_number(registry: &Arc<AttributeRegistry>, number: usize) -> Result<Self, CardError> {
        if number >= registry.total_cards() {
            return Err(CardError::CardNumberOutOfRange {
                number,
                total: registry.total_cards(),
            });
        }
        Ok(Self::decode(registry, CardNumber(number)))
    }

    /// Decode a number the caller knows is in range.
    pub(crate) fn decode(registry: &Arc<AttributeRegistry>, number: CardNumber) -> Self {
        let mut indices: CardIndices = SmallVec::from_elem(0, registry.len());
        registry.decode_into(number.0, &mut indices);
        Self {
            registry: Arc::clone(registry),
            indices,
            number,
        }
    }

    fn assemble(registry: &Arc<AttributeRegistry>, indices: CardIndices) -> Self {
        let number = CardNumber(registry.encode(&indices));
        Self {
            registry: Arc::clone(registry),
            indices,
            number,
        }
    }

    /// The card number.
    #[must_use]
    pub fn number(&self) -> CardNumber {
        self.number
    }

    /// The index vector, in registry order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The registry this card was decoded against.
    #[must_use]
    pub fn registry(&self) -> &Arc<AttributeRegistry> {
        &self.registry
    }

    /// Value of one attribute, `None` if the attribute is not registered.
    #[must_use]
    pub fn value(&self, attribute: &str) -> Option<&str> {
        let position = self.registry.position_of(attribute)?;
        self.registry
            .attribute_at(position)?
            .options()
            .get(self.indices[position])
            .map(String::as_str)
    }

    /// All values of the card.
    #[must_use]
    pub fn values(&self) -> CardValues {
        self.registry
            .attributes()
            .iter()
            .zip(&self.indices)
            .filter_map(|(attr, &i)| Some((attr.name(), attr.options().get(i)?.as_str())))
            .collect()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.indices == other.indices
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.indices.hash(state);
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("number", &self.number.0)
            .field("indices", &self.indices.as_slice())
            .finish()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.values();
        let parts: Vec<&str> = values.iter().map(|(_, v)| v).collect();
        write!(f, "({})", parts.join(", "))
    }
}

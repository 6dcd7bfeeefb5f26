//! Card attributes and the attribute registry.
//!
//! Each card is a total assignment of one option per attribute. The
//! registry fixes the attributes and their order, and that order gives
//! meaning to every index vector and card number in the crate.
//!
//! ## Registry Order
//!
//! Attributes are kept sorted by name, options sorted within each
//! attribute. For the standard deck this gives:
//!
//! | position | attribute | options                  |
//! |----------|-----------|--------------------------|
//! | 0        | color     | blue, green, red         |
//! | 1        | count     | 1, 2, 3                  |
//! | 2        | fill      | dots, empty, filled      |
//! | 3        | shape     | circle, square, triangle |

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, ConfigError};

/// Standard attribute name: card color.
pub const COLOR: &str = "color";
/// Standard attribute name: number of symbols on the card.
pub const COUNT: &str = "count";
/// Standard attribute name: symbol fill.
pub const FILL: &str = "fill";
/// Standard attribute name: symbol shape.
pub const SHAPE: &str = "shape";

/// A named categorical dimension with a fixed, sorted list of options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    options: Vec<String>,
}

impl Attribute {
    /// Create an attribute. Options are sorted; duplicates are rejected.
    pub fn new<I, S>(name: impl Into<String>, options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(ConfigError::EmptyOptions { attribute: name });
        }

        options.sort();
        if let Some(pair) = options.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConfigError::DuplicateOption {
                attribute: name,
                option: pair[0].clone(),
            });
        }

        Ok(Self { name, options })
    }

    /// Attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sorted options.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of options.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Convert a value to its index, e.g. "green" to 1 for colors.
    pub fn value_to_index(&self, value: &str) -> Result<usize, CardError> {
        self.options
            .binary_search_by(|o| o.as_str().cmp(value))
            .map_err(|_| CardError::InvalidValue {
                attribute: self.name.clone(),
                value: value.to_string(),
            })
    }

    /// Convert an index to its value, e.g. 2 to "red" for colors.
    pub fn index_to_value(&self, index: usize) -> Result<&str, CardError> {
        self.options
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CardError::IndexOutOfRange {
                attribute: self.name.clone(),
                index,
                options: self.options.len(),
            })
    }
}

/// The fixed set of attributes of a deck.
///
/// Built once and shared by `Arc` with every card and board. The
/// derived constants (`option_counts`, `total_cards`, strides) are
/// computed at construction and never recomputed.
///
/// ## Example
///
/// ```
/// use set_game::cards::AttributeRegistry;
///
/// let registry = AttributeRegistry::standard();
/// assert_eq!(registry.attribute_names(), vec!["color", "count", "fill", "shape"]);
/// assert_eq!(registry.option_counts(), &[3, 3, 3, 3]);
/// assert_eq!(registry.total_cards(), 81);
/// assert_eq!(registry.value_to_index("color", "green").unwrap(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeRegistry {
    attributes: Vec<Attribute>,
    positions: FxHashMap<String, usize>,
    option_counts: Vec<usize>,
    /// Mixed-radix place values, position 0 most significant.
    strides: Vec<usize>,
    total_cards: usize,
}

impl AttributeRegistry {
    /// Build a registry. Attributes are ordered by name.
    pub fn new(mut attributes: Vec<Attribute>) -> Result<Self, ConfigError> {
        if attributes.is_empty() {
            return Err(ConfigError::NoAttributes);
        }

        attributes.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(pair) = attributes.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(ConfigError::DuplicateAttribute {
                attribute: pair[0].name.clone(),
            });
        }

        let positions = attributes
            .iter()
            .enumerate()
            .map(|(i, a)| (a.name.clone(), i))
            .collect();
        let option_counts: Vec<usize> = attributes.iter().map(Attribute::option_count).collect();

        let total_cards = option_counts
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or(ConfigError::DeckTooLarge)?;

        // Every stride divides `total_cards`, so these cannot overflow.
        let mut strides = vec![1; option_counts.len()];
        for i in (0..option_counts.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * option_counts[i + 1];
        }

        Ok(Self {
            attributes,
            positions,
            option_counts,
            strides,
            total_cards,
        })
    }

    /// The standard 81-card deck: color, count, fill, shape.
    #[must_use]
    pub fn standard() -> Self {
        let built = [
            (COLOR, ["red", "blue", "green"]),
            (FILL, ["empty", "dots", "filled"]),
            (SHAPE, ["square", "triangle", "circle"]),
            (COUNT, ["1", "2", "3"]),
        ]
        .into_iter()
        .map(|(name, options)| Attribute::new(name, options))
        .collect::<Result<Vec<_>, _>>()
        .and_then(Self::new);

        match built {
            Ok(registry) => registry,
            // Fixed tables above are distinct and non-empty.
            Err(e) => unreachable!("standard registry is well-formed: {e}"),
        }
    }

    /// Attributes in registry order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute names in registry order.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.iter().map(Attribute::name).collect()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always false; a registry has at least one attribute.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Position of an attribute in registry order.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Attribute at a registry position.
    #[must_use]
    pub fn attribute_at(&self, position: usize) -> Option<&Attribute> {
        self.attributes.get(position)
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Result<&Attribute, CardError> {
        self.position_of(name)
            .map(|i| &self.attributes[i])
            .ok_or_else(|| CardError::UnknownAttribute {
                attribute: name.to_string(),
            })
    }

    /// Option count per attribute, in registry order.
    #[must_use]
    pub fn option_counts(&self) -> &[usize] {
        &self.option_counts
    }

    /// Number of distinct cards (product of option counts).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Convert an attribute value to its index.
    pub fn value_to_index(&self, attribute: &str, value: &str) -> Result<usize, CardError> {
        self.attribute(attribute)?.value_to_index(value)
    }

    /// Convert an attribute index to its value.
    pub fn index_to_value(&self, attribute: &str, index: usize) -> Result<&str, CardError> {
        self.attribute(attribute)?.index_to_value(index)
    }

    /// Mixed-radix encoding of an index vector. Caller guarantees the
    /// vector is in range.
    pub(crate) fn encode(&self, indices: &[usize]) -> usize {
        indices.iter().zip(&self.strides).map(|(i, s)| i * s).sum()
    }

    /// Inverse of `encode`: div/mod from the least significant position.
    pub(crate) fn decode_into(&self, mut number: usize, out: &mut [usize]) {
        for (slot, &count) in out.iter_mut().zip(&self.option_counts).rev() {
            *slot = number % count;
            number /= count;
        }
    }
}

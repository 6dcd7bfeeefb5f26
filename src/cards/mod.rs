//! Card system: attributes, registry, and the card codec.
//!
//! ## Key Types
//!
//! - `Attribute`: A named dimension with sorted options
//! - `AttributeRegistry`: The attributes of a deck, in fixed order
//! - `Card`: An immutable card with values, indices and number
//! - `CardNumber`: Dense identifier in `[0, total_cards)`
//! - `CardValues`: Attribute → value assignment

pub mod attributes;
pub mod card;

pub use attributes::{Attribute, AttributeRegistry, COLOR, COUNT, FILL, SHAPE};
pub use card::{Card, CardIndices, CardNumber, CardValues};

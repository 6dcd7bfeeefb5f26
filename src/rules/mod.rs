//! Game rules: what makes three cards a set.
//!
//! The predicate is pure and stateless. The board engine calls it for
//! claims and for enumerating the sets on the board.

pub mod validator;

pub use validator::{cards_form_set, is_compatible, validate, SetCandidate, Validation, SET_SIZE};

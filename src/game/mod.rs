//! Game session layer: counters, hints, and player commands.
//!
//! ## Key Types
//!
//! - `Session`: A board plus the player's counters and hint state
//! - `HintTracker`: Hint continuation over the sets on the board
//! - `Command`: Commands accepted at the prompt

pub mod command;
pub mod hints;
pub mod session;

pub use command::{help_text, parse_cells, Command};
pub use hints::HintTracker;
pub use session::{Session, SessionStats, SessionStatus};

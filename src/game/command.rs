//! Player commands and coordinate input.

use std::str::FromStr;

use crate::board::Cell;
use crate::error::ParseError;

/// A command typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Enter a set.
    Set,
    /// Redraw the board.
    Redraw,
    /// Report the number of sets on the board.
    Info,
    /// Reveal a card of a set.
    Hint,
    /// Report counters and time.
    Status,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 6] = [
        Command::Set,
        Command::Redraw,
        Command::Info,
        Command::Hint,
        Command::Status,
        Command::Quit,
    ];

    /// The word typed to run the command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Command::Set => "set",
            Command::Redraw => "redraw",
            Command::Info => "info",
            Command::Hint => "hint",
            Command::Status => "status",
            Command::Quit => "quit",
        }
    }

    /// One-line help.
    #[must_use]
    pub const fn help(self) -> &'static str {
        match self {
            Command::Set => "to enter a set.",
            Command::Redraw => "redraw the current board.",
            Command::Info => "report number of available sets.",
            Command::Hint => "get a hint.",
            Command::Status => "report current game status.",
            Command::Quit => "exit the game.",
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        Command::ALL
            .into_iter()
            .find(|c| c.name() == word)
            .ok_or_else(|| ParseError::UnknownCommand(word.to_string()))
    }
}

/// The menu shown at game start.
#[must_use]
pub fn help_text() -> String {
    let mut text = String::from("Play options:\n");
    for command in Command::ALL {
        text.push_str(&format!("\t - {}: {}\n", command.name(), command.help()));
    }
    text
}

/// Parse `(row, column)` tuples, e.g. `(0, 1), (1, 1), (2, 1)`.
///
/// Whitespace is ignored and the list may be wrapped in brackets. The
/// number of tuples is not checked here; claims enforce it.
///
/// ```
/// use set_game::board::Cell;
/// use set_game::game::parse_cells;
///
/// let cells = parse_cells("(0, 1), (1, 1), (2, 1)").unwrap();
/// assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)]);
/// ```
pub fn parse_cells(input: &str) -> Result<Vec<Cell>, ParseError> {
    let malformed = || ParseError::Malformed(input.trim().to_string());

    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let body = compact
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(&compact);
    if body.is_empty() {
        return Err(malformed());
    }

    let mut cells = Vec::new();
    let mut rest = body;
    loop {
        let open = rest.strip_prefix('(').ok_or_else(malformed)?;
        let (inner, after) = open.split_once(')').ok_or_else(malformed)?;
        let (row, column) = inner.split_once(',').ok_or_else(malformed)?;
        cells.push(Cell::new(parse_index(row)?, parse_index(column)?));

        if after.is_empty() {
            break;
        }
        rest = after.strip_prefix(',').ok_or_else(malformed)?;
        if rest.is_empty() {
            break;
        }
    }

    Ok(cells)
}

fn parse_index(s: &str) -> Result<usize, ParseError> {
    s.parse().map_err(|_| ParseError::NotANumber(s.to_string()))
}

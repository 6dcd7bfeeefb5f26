//! Set - terminal game
//!
//! Deals a board and reads commands from stdin until the player quits
//! or the deck and board run out of sets.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use set_game::cards::AttributeRegistry;
use set_game::core::{BoardConfig, DEFAULT_COLUMNS, DEFAULT_ROWS};
use set_game::game::{help_text, parse_cells, Command, Session};
use set_game::render::{board_grid, card_glyph, set_glyphs};

#[derive(Parser, Debug)]
#[command(name = "set-game")]
#[command(about = "Play the card game Set in the terminal", long_about = None)]
struct Cli {
    /// Board rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// RNG seed (defaults to the system clock)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is the game.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(clock_seed);
    let config = BoardConfig::new()
        .with_rows(cli.rows)
        .with_columns(cli.columns);

    let mut session = Session::new(Arc::new(AttributeRegistry::standard()), config, seed)?;
    let mut lines = io::stdin().lock().lines();
    let mut stdout = io::stdout();

    println!("Welcome to set! Let's start with the current board:");
    println!("{}", board_grid(session.board()));
    println!("{}", help_text());

    while !session.is_over() {
        prompt(&mut stdout)?;
        let Some(line) = lines.next() else {
            break;
        };

        match line?.parse::<Command>() {
            Ok(Command::Set) => enter_set(&mut session, &mut lines, &mut stdout)?,
            Ok(Command::Redraw) => {
                session.redraw();
                println!("{}", board_grid(session.board()));
            }
            Ok(Command::Info) => {
                println!("There are {} sets on this board.", session.sets_available());
            }
            Ok(Command::Hint) => match session.hint() {
                Some(_) => {
                    let hinted: Vec<String> = session.hinted().iter().map(card_glyph).collect();
                    println!("There is a set on this board that contains {}", hinted.join(", "));
                }
                None => println!("There are no sets on this board."),
            },
            Ok(Command::Status) => println!("{}", session.status()),
            Ok(Command::Quit) => {
                println!("{}", session.status());
                info!(stats = ?session.stats(), "player quit");
                return Ok(());
            }
            Err(_) => println!("Unknown input."),
        }
    }

    if session.is_over() {
        println!("No sets left on the board and no cards left to deal.");
        println!("{}", session.status());
    }
    info!(stats = ?session.stats(), "session finished");
    Ok(())
}

fn enter_set<I>(session: &mut Session, lines: &mut I, stdout: &mut io::Stdout) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("Enter the set in comma-separated tuples, row-column order.");
    prompt(stdout)?;
    let Some(line) = lines.next() else {
        return Ok(());
    };

    let cells = match parse_cells(&line?) {
        Ok(cells) => cells,
        Err(e) => {
            println!("Invalid input: {e}");
            return Ok(());
        }
    };

    match session.propose(&cells) {
        Ok(outcome) if outcome.valid => {
            println!("Proposed set {} is valid.", set_glyphs(&outcome.set));
            println!("{}", board_grid(session.board()));
        }
        Ok(outcome) => {
            println!(
                "The following attribute(s) are not compatible: {}",
                outcome.invalid_attributes.join(", ")
            );
            println!("Proposed set {} is invalid.", set_glyphs(&outcome.set));
        }
        Err(e) => println!("Invalid input: {e}"),
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    print!("> ");
    stdout.flush()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

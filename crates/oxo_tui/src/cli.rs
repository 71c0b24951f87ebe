//! Command-line interface for oxo.

use crate::app::FirstMover;
use clap::{Parser, ValueEnum};
use oxo_engine::Mark;

/// Play tic-tac-toe against an unbeatable minimax opponent.
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe with an unbeatable AI opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mark to play as (skips the in-game selection)
    #[arg(short, long, value_enum)]
    pub symbol: Option<SymbolChoice>,

    /// Who takes the first turn (skips the in-game selection)
    #[arg(short, long, value_enum)]
    pub first: Option<FirstChoice>,

    /// File to write logs to (keeps tracing output off the terminal UI)
    #[arg(long, default_value = "oxo.log")]
    pub log_file: std::path::PathBuf,
}

/// Mark selection for `--symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SymbolChoice {
    /// Play as X.
    X,
    /// Play as O.
    O,
}

impl From<SymbolChoice> for Mark {
    fn from(choice: SymbolChoice) -> Self {
        match choice {
            SymbolChoice::X => Mark::X,
            SymbolChoice::O => Mark::O,
        }
    }
}

/// First-mover selection for `--first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstChoice {
    /// The human takes the first turn.
    Human,
    /// The AI takes the first turn.
    Ai,
}

impl From<FirstChoice> for FirstMover {
    fn from(choice: FirstChoice) -> Self {
        match choice {
            FirstChoice::Human => FirstMover::Human,
            FirstChoice::Ai => FirstMover::Ai,
        }
    }
}

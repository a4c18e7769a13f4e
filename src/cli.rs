//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts::Mode;

/// Tic-tac-toe against an unbeatable minimax opponent, or a friend
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Starting mode (overrides the config file)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Analyze a position and print the computer's move
    Suggest {
        /// Board as nine cells, row-major: X, O, or '.' for empty (e.g. "X.. .O. ...")
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Mode names accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Play X against the computer
    Computer,
    /// Two humans share the keyboard
    TwoPlayer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Computer => Mode::ComputerOpponent,
            ModeArg::TwoPlayer => Mode::TwoPlayer,
        }
    }
}

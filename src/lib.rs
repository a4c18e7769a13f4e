//! noughts library - terminal tic-tac-toe with a minimax opponent
//!
//! The game rules and the search live in [`noughts_core`]; this crate adds
//! the presentation layer around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for the starting mode and log file
//! - **Suggest**: headless analysis of a single position
//! - **TUI**: ratatui front end that owns a [`GameSession`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod suggest;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Startup errors
pub use error::{EnvironmentError, check_environment};

// Crate-level exports - Analysis
pub use suggest::{SuggestError, Suggestion, suggest};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Tally, digit_position, move_cursor, run_tui};

// Crate-level exports - Game types
pub use noughts_core::{
    Board, GameSession, Mode, Move, MoveError, NotationError, Outcome, Player, Position,
    ScoredMove, Square, TurnReport, TurnState, rules, search,
};

//! Tic-tac-toe rules and exhaustive minimax search.
//!
//! - [`rules`]: move application and win/draw evaluation
//! - [`search`]: unpruned minimax for the O side
//! - [`GameSession`]: board, mode, and turn state machine for one game
//!
//! ```
//! use noughts_core::{GameSession, Mode, Outcome, Position};
//!
//! let mut session = GameSession::new(Mode::ComputerOpponent);
//! let report = session.play(Position::TopLeft)?;
//! assert_eq!(report.reply.map(|m| m.position), Some(Position::Center));
//! assert_eq!(report.outcome, Outcome::InProgress);
//! # Ok::<(), noughts_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod notation;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use notation::NotationError;
pub use position::Position;
pub use search::ScoredMove;
pub use session::{GameSession, Mode, TurnReport, TurnState};
pub use types::{Board, Outcome, Player, Square};

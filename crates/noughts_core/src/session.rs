//! Game session: board, mode, and the turn state machine.
//!
//! A [`GameSession`] is owned by the presentation layer and passed by
//! reference into every call. In [`Mode::ComputerOpponent`] a human move by X
//! synchronously triggers the computer's reply for O before `play` returns, so
//! the caller never observes [`TurnState::WaitingForPlayerO`] in that mode.

use super::action::{Move, MoveError};
use super::rules::{apply_move, evaluate};
use super::search;
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// O is chosen by minimax search.
    #[default]
    #[strum(to_string = "vs Computer")]
    ComputerOpponent,
    /// Both sides are human.
    #[strum(to_string = "Two Player")]
    TwoPlayer,
}

/// Turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// X to move.
    WaitingForPlayerX,
    /// O to move.
    WaitingForPlayerO,
    /// Game ended; holds the final (terminal) outcome.
    GameOver(Outcome),
}

impl TurnState {
    /// The player to move, or `None` once the game is over.
    pub fn to_move(self) -> Option<Player> {
        match self {
            TurnState::WaitingForPlayerX => Some(Player::X),
            TurnState::WaitingForPlayerO => Some(Player::O),
            TurnState::GameOver(_) => None,
        }
    }

    fn waiting_for(player: Player) -> Self {
        match player {
            Player::X => TurnState::WaitingForPlayerX,
            Player::O => TurnState::WaitingForPlayerO,
        }
    }
}

/// What happened during one call to [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The move the caller made.
    pub played: Move,
    /// The computer's reply, if one was made.
    pub reply: Option<Move>,
    /// Outcome after all moves in this turn.
    pub outcome: Outcome,
}

/// A single game in progress plus the selected mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    mode: Mode,
    state: TurnState,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a session with an empty board, X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            mode,
            state: TurnState::WaitingForPlayerX,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        self.state.to_move()
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Moves played since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has ended and awaits acknowledgement.
    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// In computer mode, X's move is immediately answered by O. On error the
    /// session is unchanged.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn play(&mut self, pos: Position) -> Result<TurnReport, MoveError> {
        let player = self.to_move().ok_or(MoveError::GameOver)?;

        apply_move(&mut self.board, pos, player)?;
        let played = Move::new(player, pos);
        self.history.push(played);
        debug!(%played, "Move applied");

        let mut outcome = self.advance(player);

        let mut reply = None;
        if self.mode == Mode::ComputerOpponent && self.state == TurnState::WaitingForPlayerO {
            if let Some(position) = search::best_move(&mut self.board) {
                let computer = Move::new(Player::O, position);
                self.history.push(computer);
                reply = Some(computer);
                info!(%computer, "Computer replied");
            }
            outcome = self.advance(Player::O);
        }

        Ok(TurnReport {
            played,
            reply,
            outcome,
        })
    }

    /// Plays at zero-based `(row, col)`.
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<TurnReport, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.play(pos)
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) {
        info!(%mode, "Mode selected");
        self.mode = mode;
        self.reset();
    }

    /// Empties the board; X moves next.
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.board = Board::new();
        self.history.clear();
        self.state = TurnState::WaitingForPlayerX;
    }

    /// Acknowledges a finished game and resets it.
    ///
    /// Returns the outcome that was acknowledged, or `None` (and does nothing)
    /// if the game is still running.
    pub fn acknowledge(&mut self) -> Option<Outcome> {
        match self.state {
            TurnState::GameOver(outcome) => {
                self.reset();
                Some(outcome)
            }
            TurnState::WaitingForPlayerX | TurnState::WaitingForPlayerO => None,
        }
    }

    /// Re-evaluates after `mover` played and updates the turn state.
    fn advance(&mut self, mover: Player) -> Outcome {
        let outcome = evaluate(&self.board);
        self.state = if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game over");
            TurnState::GameOver(outcome)
        } else {
            TurnState::waiting_for(mover.opponent())
        };
        outcome
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

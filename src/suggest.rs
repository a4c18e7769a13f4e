//! Headless position analysis for the `suggest` command.

use noughts_core::{Board, NotationError, Outcome, Player, ScoredMove, search};
use serde::Serialize;
use tracing::instrument;

/// Analysis of a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Board in compact notation.
    pub board: String,
    /// Current outcome.
    pub outcome: Outcome,
    /// Side to move, if the game is still running.
    pub to_move: Option<Player>,
    /// Minimax value for the side to move (+1 O wins, -1 X wins, 0 draw).
    pub value: i32,
    /// Scores of each O move, row-major. Empty unless O is to move.
    pub candidates: Vec<ScoredMove>,
    /// The move the computer would play.
    pub best: Option<ScoredMove>,
}

/// Error analyzing a position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SuggestError {
    /// The board text could not be parsed.
    #[display("Invalid board: {}", _0)]
    Notation(NotationError),

    /// Mark counts that alternating play starting with X cannot produce.
    #[display("Unreachable position: X={}, O={} (X must equal O or lead by one)", x, o)]
    UnreachableCounts {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for SuggestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuggestError::Notation(e) => Some(e),
            SuggestError::UnreachableCounts { .. } => None,
        }
    }
}

impl From<NotationError> for SuggestError {
    fn from(err: NotationError) -> Self {
        SuggestError::Notation(err)
    }
}

/// Parses `notation` and runs the search for the side to move.
#[instrument]
pub fn suggest(notation: &str) -> Result<Suggestion, SuggestError> {
    let mut board = Board::from_notation(notation)?;
    let side = board.side_to_move().ok_or(SuggestError::UnreachableCounts {
        x: board.count(Player::X),
        o: board.count(Player::O),
    })?;

    let outcome = noughts_core::rules::evaluate(&board);
    let to_move = (!outcome.is_terminal()).then_some(side);
    let value = search::score(&mut board, side == Player::O);

    let candidates = if to_move == Some(Player::O) {
        search::evaluate_moves(&mut board)
    } else {
        Vec::new()
    };
    let best = search::select(&candidates);

    Ok(Suggestion {
        board: board.to_notation(),
        outcome,
        to_move,
        value,
        candidates,
        best,
    })
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Board::from_notation(&self.board) {
            Ok(board) => writeln!(f, "{}\n", board)?,
            Err(_) => writeln!(f, "{}\n", self.board)?,
        }
        writeln!(f, "Outcome: {}", self.outcome)?;
        match self.to_move {
            Some(player) => writeln!(f, "To move: {} (value {:+})", player, self.value)?,
            None => return Ok(()),
        }
        if self.to_move == Some(Player::X) {
            writeln!(f, "The computer plays O; play X's move first.")?;
        }
        for candidate in &self.candidates {
            writeln!(f, "  {:<24} {:+}", candidate.position.to_string(), candidate.score)?;
        }
        if let Some(best) = self.best {
            writeln!(f, "Best move: {}", best.position)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::Position;

    #[test]
    fn test_suggest_reply_to_corner() {
        let suggestion = suggest("X.. ... ...").unwrap();
        assert_eq!(suggestion.to_move, Some(Player::O));
        assert_eq!(suggestion.value, 0);
        assert_eq!(suggestion.candidates.len(), 8);
        assert_eq!(suggestion.best.map(|b| b.position), Some(Position::Center));
    }

    #[test]
    fn test_suggest_x_to_move_has_no_candidates() {
        let suggestion = suggest(".........").unwrap();
        assert_eq!(suggestion.to_move, Some(Player::X));
        assert!(suggestion.candidates.is_empty());
        assert_eq!(suggestion.best, None);
        assert!(suggestion.to_string().contains("play X's move first"));
    }

    #[test]
    fn test_suggest_finished_game() {
        let suggestion = suggest("XXX OO. ...").unwrap();
        assert_eq!(suggestion.outcome, Outcome::Win(Player::X));
        assert_eq!(suggestion.to_move, None);
        assert_eq!(suggestion.value, -1);
        assert_eq!(suggestion.best, None);
    }

    #[test]
    fn test_suggest_rejects_unreachable_counts() {
        assert_eq!(
            suggest("OO. ... ..."),
            Err(SuggestError::UnreachableCounts { x: 0, o: 2 })
        );
    }

    #[test]
    fn test_suggest_rejects_bad_notation() {
        assert!(matches!(suggest("abc"), Err(SuggestError::Notation(_))));
    }

    #[test]
    fn test_suggestion_serializes() {
        let suggestion = suggest("XX. .O. ...").unwrap();
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["best"]["position"], "TopRight");
        assert_eq!(json["to_move"], "O");
    }
}

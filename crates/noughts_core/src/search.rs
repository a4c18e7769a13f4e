//! Exhaustive minimax search for the computer side.
//!
//! O is the maximizing side and X the minimizing side: a won line scores +1
//! for O, -1 for X, and a draw 0. The search is deliberately plain: no pruning,
//! no transposition table, no depth preference. Every continuation is visited
//! by placing a mark on the single shared board, recursing, and clearing the
//! square again, so the board is bit-for-bit unchanged when a call returns.
//!
//! Candidate squares are scanned row-major and only a strictly greater score
//! replaces the current best, so ties go to the first square in scan order.

use super::rules::evaluate;
use super::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a won game for O.
pub const O_WIN: i32 = 1;
/// Score of a won game for X.
pub const X_WIN: i32 = -1;
/// Score of a drawn game.
pub const DRAW: i32 = 0;

/// A candidate move for O and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Square O would take.
    pub position: Position,
    /// Minimax value of the position after the move (X to move).
    pub score: i32,
}

/// Recursive walker; counts visited nodes for diagnostics.
#[derive(Debug, Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn score(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        match evaluate(board) {
            Outcome::Win(Player::O) => return O_WIN,
            Outcome::Win(Player::X) => return X_WIN,
            Outcome::Draw => return DRAW,
            Outcome::InProgress => {}
        }

        let (mark, mut best) = if maximizing {
            (Player::O, i32::MIN)
        } else {
            (Player::X, i32::MAX)
        };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(mark));
            let score = self.score(board, !maximizing);
            board.set(pos, Square::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    fn candidates(&mut self, board: &mut Board) -> Vec<ScoredMove> {
        let mut scored = Vec::with_capacity(9);
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(Player::O));
            let score = self.score(board, false);
            board.set(pos, Square::Empty);
            scored.push(ScoredMove {
                position: pos,
                score,
            });
        }
        scored
    }
}

/// Minimax value of `board` with O to move when `maximizing`, X otherwise.
///
/// The board is probed in place and restored before returning.
pub fn score(board: &mut Board, maximizing: bool) -> i32 {
    Minimax::default().score(board, maximizing)
}

/// Scores every empty square as a move for O, in row-major order.
///
/// Nothing is applied; the board is restored before returning.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn evaluate_moves(board: &mut Board) -> Vec<ScoredMove> {
    let mut search = Minimax::default();
    let scored = search.candidates(board);
    debug!(candidates = scored.len(), nodes = search.nodes, "Scored candidate moves");
    scored
}

/// Picks O's best move without applying it.
///
/// Returns `None` if the board has no empty square.
pub fn find_best_move(board: &mut Board) -> Option<ScoredMove> {
    select(&evaluate_moves(board))
}

/// Picks the highest-scoring candidate; on ties the earliest one wins.
pub fn select(candidates: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for &candidate in candidates {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best
}

/// Picks O's best move and plays it on `board`.
///
/// Returns the chosen square, or `None` if the board has no empty square.
#[instrument(skip(board), fields(board = %board.to_notation()))]
pub fn best_move(board: &mut Board) -> Option<Position> {
    let chosen = find_best_move(board)?;
    board.set(chosen.position, Square::Occupied(Player::O));
    debug!(position = %chosen.position, score = chosen.score, "Computer chose move");
    Some(chosen.position)
}

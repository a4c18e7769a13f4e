//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage so
//! the search and the session can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, MoveError, Outcome, Player, Position, Square};
use tracing::instrument;

/// Places `mark` at `pos`, failing if the square is taken.
///
/// The board is mutated in place; on error it is left untouched.
#[instrument(skip(board))]
pub fn apply_move(board: &mut Board, pos: Position, mark: Player) -> Result<(), MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }
    board.set(pos, Square::Occupied(mark));
    Ok(())
}

/// Evaluates the board.
///
/// Every line is checked for a win before a full board is called a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_square() {
        let mut board = Board::new();
        apply_move(&mut board, Position::Center, Player::X).unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut board = Board::new();
        apply_move(&mut board, Position::Center, Player::X).unwrap();
        let before = board;
        let result = apply_move(&mut board, Position::Center, Player::O);
        assert_eq!(result, Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_evaluate_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        // X O X / O X O / O X X: full board, X completes the main diagonal.
        let board = Board::from_notation("XOX OXO OXX").unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
    }
}

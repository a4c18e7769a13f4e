//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw; callers must check for a winner
/// first.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Outcome, Player, Position};
    use super::super::evaluate;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_notation("XOX/OXX/OXO").unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_boards_without_lines_are_draws() {
        for notation in ["XXO OOX XOX", "OXO XXO XOX", "XOX XOO OXX"] {
            let board = Board::from_notation(notation).unwrap();
            assert_eq!(evaluate(&board), Outcome::Draw, "{}", notation);
        }
    }
}

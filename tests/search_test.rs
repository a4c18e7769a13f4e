//! Properties of the rules and the minimax search.

use noughts::{Board, Outcome, Player, Position, Square, rules, search};

/// Board holding only `line`, all marked by `player`.
fn board_with_line(line: [Position; 3], player: Player) -> Board {
    let mut board = Board::new();
    for pos in line {
        board.set(pos, Square::Occupied(player));
    }
    board
}

/// Walks every position reachable by alternating play from `board`,
/// calling `visit` on each.
fn walk(board: &mut Board, to_move: Player, visit: &mut impl FnMut(&mut Board)) {
    visit(board);
    if rules::evaluate(board).is_terminal() {
        return;
    }
    for pos in Position::ALL {
        if board.is_empty(pos) {
            board.set(pos, Square::Occupied(to_move));
            walk(board, to_move.opponent(), visit);
            board.set(pos, Square::Empty);
        }
    }
}

#[test]
fn test_every_complete_line_is_a_win() {
    for line in rules::LINES {
        for player in [Player::X, Player::O] {
            let board = board_with_line(line, player);
            assert_eq!(rules::evaluate(&board), Outcome::Win(player));
        }
    }
}

#[test]
fn test_full_boards_without_a_line_are_draws() {
    let mut full = 0;
    walk(&mut Board::new(), Player::X, &mut |board: &mut Board| {
        if rules::is_full(board) && rules::check_winner(board).is_none() {
            full += 1;
            assert_eq!(rules::evaluate(board), Outcome::Draw);
        }
    });
    // Number of drawn games in the full game tree.
    assert_eq!(full, 46080);
}

#[test]
fn test_score_restores_every_early_position() {
    let mut checked = 0;
    walk(&mut Board::new(), Player::X, &mut |board: &mut Board| {
        let occupied = 9 - board.empty_positions().count();
        if occupied == 3 {
            let before = *board;
            let maximizing = board.side_to_move() == Some(Player::O);
            search::score(board, maximizing);
            assert_eq!(*board, before);
            checked += 1;
        }
    });
    assert_eq!(checked, 504);
}

#[test]
fn test_best_move_on_empty_board_is_corner_or_center() {
    let mut board = Board::new();
    let pos = search::best_move(&mut board).expect("empty board has moves");
    assert!(pos.is_corner() || pos == Position::Center);
    assert_eq!(board.get(pos), Square::Occupied(Player::O));
    assert_eq!(board.empty_positions().count(), 8);
}

#[test]
fn test_best_move_blocks_open_x_pair() {
    let cases = [
        // Row
        ("XX. .O. ...", Position::TopRight),
        // Column
        ("X.. XO. ...", Position::BottomLeft),
        // Diagonal
        ("O.X .X. ...", Position::BottomLeft),
    ];
    for (notation, block) in cases {
        let mut board = Board::from_notation(notation).unwrap();
        assert_eq!(search::best_move(&mut board), Some(block), "{}", notation);
        assert_eq!(rules::evaluate(&board), Outcome::InProgress);
    }
}

#[test]
fn test_best_move_takes_win_over_block() {
    // O can win at bottom-left; X threatens top-right, which comes first in scan order.
    let mut board = Board::from_notation("XX. ..X .OO").unwrap();
    assert_eq!(search::best_move(&mut board), Some(Position::BottomLeft));
    assert_eq!(rules::evaluate(&board), Outcome::Win(Player::O));
}

#[test]
fn test_reply_to_corner_does_not_lose() {
    let mut board = Board::from_notation("X.. ... ...").unwrap();
    let chosen = search::find_best_move(&mut board).unwrap();
    assert!(chosen.score >= search::DRAW);
    board.set(chosen.position, Square::Occupied(Player::O));
    assert!(search::score(&mut board, false) >= search::DRAW);
}

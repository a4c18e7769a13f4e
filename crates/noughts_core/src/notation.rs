//! Compact text notation for boards.
//!
//! A board is nine cells in row-major order: `X`, `O` (either case), or one of
//! `.`, `-`, `_` for an empty cell. Whitespace, `|` and `/` may separate rows
//! and are ignored, so `"X.O/.X./..O"` and `"X.O .X. ..O"` are the same board.

use super::{Board, Player, Square};

/// Error parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// A character that is not a mark, empty marker, or separator.
    #[display("invalid character '{}' at offset {}", character, offset)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset in the input.
        offset: usize,
    },

    /// Not exactly nine cells.
    #[display("expected 9 cells, got {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for NotationError {}

impl Board {
    /// Parses a board from its text notation.
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        let mut squares = Vec::with_capacity(9);
        for (offset, character) in s.char_indices() {
            let square = match character {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                _ => return Err(NotationError::InvalidCharacter { character, offset }),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| NotationError::WrongLength(v.len()))?;
        Ok(Board::from_squares(squares))
    }

    /// Renders the board as a single-line notation string (`"X.O/.X./..O"`).
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(11);
        for (i, square) in self.squares().iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                out.push('/');
            }
            out.push(square.mark().map_or('.', Player::symbol));
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares().iter().enumerate() {
            let symbol = square.mark().map_or(' ', Player::symbol);
            write!(f, " {} ", symbol)?;
            match i % 3 {
                2 if i < 8 => writeln!(f, "\n---+---+---")?,
                2 => {}
                _ => write!(f, "|")?,
            }
        }
        Ok(())
    }
}

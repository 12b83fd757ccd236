//! Core domain types for tic-tac-toe boards.

use super::error::BoardError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Maps a raw marking symbol to a square.
    ///
    /// `x` and `o` are matched case-insensitively; every other
    /// character is treated as empty, so this never fails.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol.to_ascii_lowercase() {
            'x' => Square::Occupied(Player::X),
            'o' => Square::Occupied(Player::O),
            _ => Square::Empty,
        }
    }

    /// Returns true if the square carries the given player's mark.
    pub fn is(self, player: Player) -> bool {
        self == Square::Occupied(player)
    }
}

/// Square board of arbitrary side length.
///
/// Squares are stored in row-major order: index `i` lives at
/// row `i / side`, column `i % side`. A board is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares in row-major order.
    squares: Vec<Square>,
    /// Side length, `side * side == squares.len()`.
    side: usize,
}

impl Board {
    /// Builds a board from a sequence of raw marking symbols.
    ///
    /// Fails with [`BoardError::InvalidShape`] unless the number of
    /// symbols is a positive perfect square.
    #[instrument(skip(symbols))]
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Result<Self, BoardError> {
        let squares: Vec<Square> = symbols.into_iter().map(Square::from_symbol).collect();
        let length = squares.len();
        let side = length.isqrt();

        if side == 0 || side * side != length {
            debug!(length, "Rejected board shape");
            return Err(BoardError::InvalidShape { length });
        }

        debug!(side, "Board constructed");
        Ok(Self { squares, side })
    }

    /// Parses a board from a string, one symbol per character.
    #[instrument]
    pub fn parse(board: &str) -> Result<Self, BoardError> {
        Self::from_symbols(board.chars())
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Converts a (row, column) pair to a row-major index.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.side && col < self.side).then(|| row * self.side + col)
    }

    /// Gets the square at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.index(row, col).map(|idx| self.squares[idx])
    }

    /// Checks if the square at the given row and column holds `player`.
    pub fn is_marked(&self, row: usize, col: usize, player: Player) -> bool {
        self.get(row, col).is_some_and(|square| square.is(player))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_mapping_is_case_insensitive() {
        assert_eq!(Square::from_symbol('x'), Square::from_symbol('X'));
        assert_eq!(Square::from_symbol('o'), Square::from_symbol('O'));
        assert_eq!(Square::from_symbol('X'), Square::Occupied(Player::X));
        assert_eq!(Square::from_symbol('O'), Square::Occupied(Player::O));
    }

    #[test]
    fn test_other_symbols_are_empty() {
        for symbol in ['-', ' ', 'm', '0', '.', '?', 'é'] {
            assert_eq!(Square::from_symbol(symbol), Square::Empty);
        }
    }

    #[test]
    fn test_side_is_derived_from_length() {
        assert_eq!(Board::parse("x").unwrap().side(), 1);
        assert_eq!(Board::parse("xo-x").unwrap().side(), 2);
        assert_eq!(Board::parse("---------").unwrap().side(), 3);
        assert_eq!(Board::parse(&"-".repeat(25)).unwrap().side(), 5);
    }

    #[test]
    fn test_invalid_lengths_rejected() {
        for length in [0, 2, 3, 5, 8, 10, 11, 15, 17, 24] {
            let result = Board::parse(&"-".repeat(length));
            assert_eq!(result, Err(BoardError::InvalidShape { length }));
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Four two-byte characters still form a 2x2 board.
        let board = Board::parse("éééé").unwrap();
        assert_eq!(board.side(), 2);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_row_major_indexing() {
        let board = Board::parse("x---o---x").unwrap();
        assert_eq!(board.get(0, 0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(1, 1), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(2, 2), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(0, 1), Some(Square::Empty));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.index(2, 1), Some(7));
        assert_eq!(board.index(1, 3), None);
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: Board = "xxoooxxxo".parse().unwrap();
        assert_eq!(parsed, Board::parse("XXOOOXXXO").unwrap());
    }
}

//! Marker counts and line flags gathered in one pass per player.

use super::super::{Board, Player};
use super::{count_marks, has_line};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Everything reachability needs to know about a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tally {
    /// Number of X marks.
    pub x_count: usize,
    /// Number of O marks.
    pub o_count: usize,
    /// Whether X holds a line.
    pub x_won: bool,
    /// Whether O holds a line.
    pub o_won: bool,
}

impl Tally {
    /// Counts marks and detects lines for both players.
    #[instrument(skip(board), fields(side = board.side()))]
    pub fn of(board: &Board) -> Self {
        let tally = Self {
            x_count: count_marks(board, Player::X),
            o_count: count_marks(board, Player::O),
            x_won: has_line(board, Player::X),
            o_won: has_line(board, Player::O),
        };
        debug!(?tally, "Tallied board");
        tally
    }

    /// Returns the mark count for `player`.
    pub fn count(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_count,
            Player::O => self.o_count,
        }
    }

    /// Returns whether `player` holds a line.
    pub fn won(&self, player: Player) -> bool {
        match player {
            Player::X => self.x_won,
            Player::O => self.o_won,
        }
    }
}

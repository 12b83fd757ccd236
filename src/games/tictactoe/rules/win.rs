//! Line detection for tic-tac-toe.
//!
//! A line is a full row, a full column, the main diagonal or the
//! anti-diagonal. Every scan is parameterized over the board side.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns true if any full row holds `player`'s mark.
pub fn has_row(board: &Board, player: Player) -> bool {
    let side = board.side();
    (0..side).any(|row| (0..side).all(|col| board.is_marked(row, col, player)))
}

/// Returns true if any full column holds `player`'s mark.
pub fn has_column(board: &Board, player: Player) -> bool {
    let side = board.side();
    (0..side).any(|col| (0..side).all(|row| board.is_marked(row, col, player)))
}

/// Returns true if the main diagonal, cells `(i, i)`, holds `player`'s mark.
pub fn has_diagonal(board: &Board, player: Player) -> bool {
    (0..board.side()).all(|i| board.is_marked(i, i, player))
}

/// Returns true if the anti-diagonal, cells `(i, side - 1 - i)`, holds
/// `player`'s mark.
pub fn has_anti_diagonal(board: &Board, player: Player) -> bool {
    let side = board.side();
    (0..side).all(|i| board.is_marked(i, side - 1 - i, player))
}

/// Checks whether `player` has completed at least one line.
#[instrument(skip(board), fields(side = board.side()))]
pub fn has_line(board: &Board, player: Player) -> bool {
    has_row(board, player)
        || has_column(board, player)
        || has_diagonal(board, player)
        || has_anti_diagonal(board, player)
}

/// Checks if there is a winner on the board.
///
/// Returns X if X holds a line, otherwise O if O holds one, otherwise
/// `None`. This does not judge legality; a board where both players
/// hold a line reports X.
#[instrument(skip(board), fields(side = board.side()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    if has_line(board, Player::X) {
        Some(Player::X)
    } else if has_line(board, Player::O) {
        Some(Player::O)
    } else {
        None
    }
}

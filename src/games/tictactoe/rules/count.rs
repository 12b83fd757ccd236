//! Marker counting.

use super::super::{Board, Player};
use tracing::instrument;

/// Counts the squares bearing `player`'s mark.
#[instrument(skip(board), fields(side = board.side()))]
pub fn count_marks(board: &Board, player: Player) -> usize {
    board.squares().iter().filter(|s| s.is(player)).count()
}

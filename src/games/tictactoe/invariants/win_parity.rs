//! Win parity invariants: a line must be completed on its owner's move.

use super::super::rules::Tally;
use super::Invariant;

/// Invariant: if X holds a line, X has exactly one more mark than O.
///
/// X's winning mark is the last one placed, so O has not replied.
pub struct XWinParityInvariant;

impl Invariant<Tally> for XWinParityInvariant {
    fn holds(tally: &Tally) -> bool {
        !tally.x_won || tally.x_count == tally.o_count + 1
    }

    fn description() -> &'static str {
        "If X completed a line, X has exactly one more mark than O"
    }
}

/// Invariant: if O holds a line, X and O have the same number of marks.
pub struct OWinParityInvariant;

impl Invariant<Tally> for OWinParityInvariant {
    fn holds(tally: &Tally) -> bool {
        !tally.o_won || tally.o_count == tally.x_count
    }

    fn description() -> &'static str {
        "If O completed a line, X and O have the same number of marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Board;

    fn tally(s: &str) -> Tally {
        Tally::of(&Board::parse(s).unwrap())
    }

    #[test]
    fn test_x_win_with_lead_holds() {
        assert!(XWinParityInvariant::holds(&tally("xxxoo----")));
    }

    #[test]
    fn test_x_win_with_equal_counts_fails() {
        assert!(!XWinParityInvariant::holds(&tally("xxxo---oo")));
    }

    #[test]
    fn test_o_win_with_equal_counts_holds() {
        assert!(OWinParityInvariant::holds(&tally("oooxx-x--")));
    }

    #[test]
    fn test_o_win_after_x_moved_fails() {
        assert!(!OWinParityInvariant::holds(&tally("oooxx-xx-")));
    }

    #[test]
    fn test_no_line_always_holds() {
        let t = tally("xx-------");
        assert!(XWinParityInvariant::holds(&t));
        assert!(OWinParityInvariant::holds(&t));
    }
}

//! Single winner invariant: at most one player holds a line.

use super::super::rules::Tally;
use super::Invariant;

/// Invariant: X and O do not both hold a line.
///
/// Play stops on the move that completes a line.
pub struct SingleWinnerInvariant;

impl Invariant<Tally> for SingleWinnerInvariant {
    fn holds(tally: &Tally) -> bool {
        !(tally.x_won && tally.o_won)
    }

    fn description() -> &'static str {
        "X and O have not both completed a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Board;

    fn holds(s: &str) -> bool {
        SingleWinnerInvariant::holds(&Tally::of(&Board::parse(s).unwrap()))
    }

    #[test]
    fn test_no_lines_hold() {
        assert!(holds("xxoooxxxo"));
    }

    #[test]
    fn test_one_line_holds() {
        assert!(holds("xxxoo----"));
        assert!(holds("oooxx-x--"));
    }

    #[test]
    fn test_both_lines_fail() {
        assert!(!holds("xxx---ooo"));
        assert!(!holds("xxxooo---"));
    }
}

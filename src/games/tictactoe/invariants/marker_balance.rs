//! Marker balance invariant: X leads O by zero or one mark.

use super::super::rules::Tally;
use super::Invariant;

/// Invariant: X's mark count equals O's or exceeds it by exactly one.
///
/// X moves first, so O can never be ahead and X can never be two ahead.
pub struct MarkerBalanceInvariant;

impl Invariant<Tally> for MarkerBalanceInvariant {
    fn holds(tally: &Tally) -> bool {
        tally.x_count == tally.o_count || tally.x_count == tally.o_count + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}

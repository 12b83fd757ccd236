//! First-class reachability invariants for tic-tac-toe.
//!
//! A board is reachable when it could have arisen from a legal game in
//! which X and O alternate, X moves first, and play stops as soon as a
//! line is completed. Each condition is an independent invariant over a
//! [`Tally`], and the full set decides reachability.

use super::rules::Tally;
use tracing::debug;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        debug!(invariant = $inv::description(), "Invariant violated");
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod marker_balance;
pub mod single_winner;
pub mod win_parity;

pub use marker_balance::MarkerBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use win_parity::{OWinParityInvariant, XWinParityInvariant};

/// All reachability invariants as a composable set.
pub type ReachabilityInvariants = (
    MarkerBalanceInvariant,
    SingleWinnerInvariant,
    OWinParityInvariant,
    XWinParityInvariant,
);

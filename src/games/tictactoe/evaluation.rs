//! Top-level board evaluation.
//!
//! Reachability gates winner lookup: a board that could not arise from a
//! legal game is [`Evaluation::Unreachable`] whatever lines it shows.

use super::invariants::{InvariantSet, ReachabilityInvariants};
use super::rules::{Tally, check_winner};
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Evaluation {
    /// Legal board with no completed line.
    #[display("no winner")]
    NoWinner,
    /// Legal board won by X.
    #[display("X wins")]
    XWins,
    /// Legal board won by O.
    #[display("O wins")]
    OWins,
    /// Board that no legal game can produce.
    #[display("unreachable")]
    Unreachable,
}

impl Evaluation {
    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Evaluation::XWins => Some(Player::X),
            Evaluation::OWins => Some(Player::O),
            Evaluation::NoWinner | Evaluation::Unreachable => None,
        }
    }

    /// Returns false only for [`Evaluation::Unreachable`].
    pub fn is_reachable(self) -> bool {
        self != Evaluation::Unreachable
    }
}

impl From<Option<Player>> for Evaluation {
    fn from(winner: Option<Player>) -> Self {
        match winner {
            Some(Player::X) => Evaluation::XWins,
            Some(Player::O) => Evaluation::OWins,
            None => Evaluation::NoWinner,
        }
    }
}

/// Diagnostic breakdown of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Analysis {
    /// Final outcome.
    evaluation: Evaluation,
    /// Board side length.
    side: usize,
    /// Mark counts and line flags.
    tally: Tally,
    /// Descriptions of violated reachability invariants.
    violations: Vec<String>,
}

impl Board {
    /// Checks whether the board could arise from a legal game.
    #[instrument(skip(self), fields(side = self.side()))]
    pub fn is_reachable(&self) -> bool {
        ReachabilityInvariants::check_all(&Tally::of(self)).is_ok()
    }

    /// Evaluates the board.
    ///
    /// Pure: repeated calls on the same board return the same outcome.
    #[instrument(skip(self), fields(side = self.side()))]
    pub fn evaluate(&self) -> Evaluation {
        let evaluation = if self.is_reachable() {
            Evaluation::from(check_winner(self))
        } else {
            Evaluation::Unreachable
        };
        debug!(%evaluation, "Evaluated board");
        evaluation
    }

    /// Evaluates the board and reports why it was judged as it was.
    #[instrument(skip(self), fields(side = self.side()))]
    pub fn analyze(&self) -> Analysis {
        let tally = Tally::of(self);
        let (evaluation, violations) = match ReachabilityInvariants::check_all(&tally) {
            Ok(()) => (Evaluation::from(check_winner(self)), Vec::new()),
            Err(violations) => (
                Evaluation::Unreachable,
                violations.into_iter().map(|v| v.description).collect(),
            ),
        };
        debug!(%evaluation, violations = violations.len(), "Analyzed board");

        Analysis {
            evaluation,
            side: self.side(),
            tally,
            violations,
        }
    }
}

/// Evaluates `board`; equivalent to [`Board::evaluate`].
pub fn evaluate(board: &Board) -> Evaluation {
    board.evaluate()
}

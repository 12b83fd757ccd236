//! Per-board result lines for the command-line evaluator.

use crate::games::tictactoe::{Analysis, Board};
use serde::Serialize;
use tracing::instrument;

/// Outcome of evaluating one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// The input formed a board and was analyzed.
    Analyzed(Analysis),
    /// The input could not form a board.
    Rejected {
        /// Why construction failed.
        error: String,
    },
}

/// A board input paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardReport {
    /// Raw input as given.
    board: String,
    #[serde(flatten)]
    outcome: Outcome,
}

impl BoardReport {
    /// Parses and analyzes a single board input.
    #[instrument]
    pub fn evaluate(input: &str) -> Self {
        let outcome = match Board::parse(input) {
            Ok(board) => Outcome::Analyzed(board.analyze()),
            Err(e) => Outcome::Rejected {
                error: e.to_string(),
            },
        };
        Self {
            board: input.to_string(),
            outcome,
        }
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns true if the input was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, Outcome::Rejected { .. })
    }

    /// Renders a single text line, plus violation lines when `explain` is set.
    pub fn to_text(&self, explain: bool) -> String {
        match &self.outcome {
            Outcome::Analyzed(analysis) => {
                let mut text = format!("{}: {}", self.board, analysis.evaluation());
                if explain {
                    for violation in analysis.violations() {
                        text.push_str("\n  - ");
                        text.push_str(violation);
                    }
                }
                text
            }
            Outcome::Rejected { error } => format!("{}: error: {}", self.board, error),
        }
    }

    /// Renders the report as a single-line JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

//! Tic-tac-toe board evaluation for square boards of any side length.

mod error;
mod evaluation;
pub mod invariants;
pub mod rules;
mod types;

pub use error::BoardError;
pub use evaluation::{Analysis, Evaluation, evaluate};
pub use types::{Board, Player, Square};

//! Board construction errors.

use derive_more::{Display, Error};

/// Error raised when a marking sequence cannot form a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum BoardError {
    /// Sequence length is zero or not a perfect square.
    #[display("Invalid board shape: {} symbols is not a positive perfect square", length)]
    InvalidShape {
        /// Number of symbols supplied.
        length: usize,
    },
}

impl BoardError {
    /// Returns the offending sequence length.
    pub fn length(&self) -> usize {
        match self {
            BoardError::InvalidShape { length } => *length,
        }
    }
}

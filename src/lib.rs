//! Strictly Boards - legality and winner evaluation for tic-tac-toe boards
//!
//! Boards are square with any side length and are given as a flattened,
//! row-major string of marks. `x` and `o` (either case) are the players'
//! marks; every other character is an empty square. X always moves first.
//!
//! # Architecture
//!
//! - **Board**: immutable N×N grid, shape-checked at construction
//! - **Rules**: mark counting and row/column/diagonal line detection
//! - **Invariants**: reachability conditions a legal game must satisfy
//! - **Evaluation**: reachability gates winner lookup
//!
//! # Example
//!
//! ```
//! use strictly_boards::{Board, Evaluation};
//!
//! # fn example() -> Result<(), strictly_boards::BoardError> {
//! let board = Board::parse("xxxooxxoo")?;
//! assert_eq!(board.evaluate(), Evaluation::XWins);
//!
//! // O is ahead of X, which no legal game allows.
//! assert_eq!(Board::parse("XOO------")?.evaluate(), Evaluation::Unreachable);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod report;

// Crate-level exports - Configuration
pub use config::{CliConfig, ConfigError, OutputFormat};

// Crate-level exports - Reporting
pub use report::{BoardReport, Outcome};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Analysis, Board, BoardError, Evaluation, Player, Square, evaluate, invariants, rules,
};

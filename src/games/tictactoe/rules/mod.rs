//! Board rules for tic-tac-toe.
//!
//! This module contains pure functions for inspecting a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the reachability invariants can compose them.

pub mod count;
pub mod tally;
pub mod win;

pub use count::count_marks;
pub use tally::Tally;
pub use win::{check_winner, has_anti_diagonal, has_column, has_diagonal, has_line, has_row};

//! Board games supported by the evaluator.

pub mod tictactoe;

//! Command-line interface for strictly_boards.

use clap::Parser;
use std::path::PathBuf;
use strictly_boards::OutputFormat;

/// Strictly Boards - judge tic-tac-toe boards for legality and winner
#[derive(Parser, Debug)]
#[command(name = "strictly_boards")]
#[command(about = "Evaluate square tic-tac-toe boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Boards in row-major order; read one per line from stdin when omitted.
    /// Options go before the first board, since boards may start with `-`.
    #[arg(allow_hyphen_values = true)]
    pub boards: Vec<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// List the violated reachability rules for unreachable boards
    #[arg(short, long)]
    pub explain: bool,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

//! Strictly Boards - command-line evaluator
//!
//! Prints one result per board on stdout; logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::{BufRead, Write};
use std::process::ExitCode;
use strictly_boards::{BoardReport, CliConfig, OutputFormat};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    }
    .with_format(cli.format);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    info!(format = %config.format(), "Starting Strictly Boards evaluator");

    let boards = if cli.boards.is_empty() {
        read_stdin_boards()?
    } else {
        cli.boards
    };

    run(&boards, *config.format(), cli.explain)
}

/// Reads one board per non-empty line of stdin.
#[instrument]
fn read_stdin_boards() -> Result<Vec<String>> {
    let mut boards = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim_end_matches('\r');
        if !trimmed.is_empty() {
            boards.push(trimmed.to_string());
        }
    }
    debug!(count = boards.len(), "Read boards from stdin");
    Ok(boards)
}

/// Evaluates every board and prints its report.
#[instrument(skip(boards), fields(count = boards.len()))]
fn run(boards: &[String], format: OutputFormat, explain: bool) -> Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();
    let mut rejected = 0usize;

    for input in boards {
        let report = BoardReport::evaluate(input);
        if report.is_rejected() {
            warn!(board = %input, "Rejected board");
            rejected += 1;
        }

        let line = match format {
            OutputFormat::Text => report.to_text(explain),
            OutputFormat::Json => report.to_json()?,
        };
        writeln!(stdout, "{}", line)?;
    }

    info!(evaluated = boards.len(), rejected, "Finished evaluating boards");

    if rejected == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

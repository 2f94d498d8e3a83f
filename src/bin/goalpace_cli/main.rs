// ABOUTME: goalpace CLI - goal analytics over exported day store snapshots
// ABOUTME: Renders goal reports, validates goal form input, and parses weight entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Goal view for today
//! goalpace-cli report --snapshot days.json
//!
//! # Goal view for a fixed day, as JSON
//! goalpace-cli report --snapshot days.json --now 2025-03-15 --format json
//!
//! # Validate goal form input against the recorded weights
//! goalpace-cli goal --target-weight "72,5" --target-date 2025-06-30 --snapshot days.json
//!
//! # Parse a weight entry the way the input field does
//! goalpace-cli parse-weight "80,4"
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use goalpace::config::AppConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "goalpace-cli",
    about = "Weight goal analytics",
    long_about = "Plan-vs-actual trajectory, pace, trend, plateau, ETA and tips for a weight goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the goal report for a day store snapshot
    Report {
        /// Snapshot file (JSON export of the day store)
        #[arg(long)]
        snapshot: PathBuf,

        /// Day to compute the report for (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        now: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Turn goal form input into a goal descriptor
    Goal {
        /// Target weight as typed, comma or dot decimal
        #[arg(long)]
        target_weight: String,

        /// Target date as typed (YYYY-MM-DD)
        #[arg(long)]
        target_date: String,

        /// Snapshot providing the start weight
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Parse a weight entry, accepting a decimal comma
    ParseWeight {
        /// Weight as typed
        text: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.logging = config.logging.verbose();
    }
    config.logging.init()?;

    let outcome = match cli.command {
        Command::Report {
            snapshot,
            now,
            format,
        } => commands::report::run(&config, &snapshot, now.as_deref(), &format),
        Command::Goal {
            target_weight,
            target_date,
            snapshot,
        } => commands::goal::run(&target_weight, &target_date, snapshot.as_deref()),
        Command::ParseWeight { text } => {
            commands::goal::parse_weight(&text);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!(code = ?e.code, "{e}");
        eprintln!("Error: {e}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

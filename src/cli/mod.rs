//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reviewbot - forwards homework review status changes to Telegram.
#[derive(Parser, Debug)]
#[command(name = "reviewbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the review API and send status changes (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `reviewbot check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and credentials without polling
    Config,
    /// Perform one request against the review API
    Connection,
    /// Send a test message to the configured chat
    #[cfg(feature = "telegram")]
    Telegram,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Log messages instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Override the poll interval in seconds
    #[arg(long)]
    pub interval_secs: Option<u64>,
}

// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

/// Command-line arguments for `stepdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepdag",
    version,
    about = "Order dependent steps and simulate a pool of workers completing them.",
    long_about = None
)]
pub struct CliArgs {
    /// File of constraint lines ("Step X must be finished before step Y can begin.").
    #[arg(long, value_name = "PATH", default_value = "input.txt")]
    pub input: String,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Stepdag.toml` is used when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Number of workers; overrides `[scheduler].max_workers`.
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Flat time added to every step; overrides `[scheduler].base_worktime`.
    #[arg(long, value_name = "N")]
    pub base_worktime: Option<u32>,

    /// Print the per-tick worker table after the result.
    #[arg(long)]
    pub trace: bool,

    /// Parse and validate, print the step graph, but don't simulate.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STEPDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

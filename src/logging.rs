// src/logging.rs

//! `tracing` subscriber setup for the `stepdag` binary.
//!
//! `--log-level` sets one global level. Without it, `STEPDAG_LOG` is read as
//! a full `EnvFilter` directive string, so per-module filters such as
//! `stepdag::dag=trace,info` work. Anything unparsable falls back to `info`.
//!
//! Logs go to STDERR; the result and trace table go to STDOUT.

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "STEPDAG_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = build_filter(cli_level, std::env::var(LOG_ENV).ok().as_deref());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    Ok(())
}

/// Pick the filter: CLI level, then env directives, then `info`.
pub fn build_filter(cli_level: Option<LogLevel>, env_directives: Option<&str>) -> EnvFilter {
    if let Some(lvl) = cli_level {
        return EnvFilter::new(LevelFilter::from(lvl).to_string());
    }

    env_directives
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

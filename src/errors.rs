// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Only recoverable failures live here (bad input, bad config, IO).
//! Scheduler invariant violations are bugs and panic instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepdagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed constraint on line {line}: {text:?}")]
    MalformedConstraint { line: usize, text: String },

    #[error("Invalid step name: {0:?} (expected a letter A-Z)")]
    InvalidStepName(char),

    #[error("Cycle detected in step graph: {0}")]
    DagCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StepdagError>;

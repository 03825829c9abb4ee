// src/input/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::input::parse::{Constraint, parse_constraints};

/// Read a constraint file and parse every non-blank line.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Constraint>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let constraints = parse_constraints(&contents)?;
    debug!(path = ?path, constraints = constraints.len(), "loaded constraints");
    Ok(constraints)
}

// src/input/mod.rs

//! Constraint input: parsing sentences, reading files, pre-checking for
//! cycles.

pub mod loader;
pub mod parse;
pub mod validate;

pub use loader::load_from_path;
pub use parse::{Constraint, parse_constraint, parse_constraints};
pub use validate::ensure_acyclic;

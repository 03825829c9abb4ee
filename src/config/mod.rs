// src/config/mod.rs

//! Configuration loading and validation for stepdag.
//!
//! - `model.rs`: the TOML-backed data model and the core's
//!   [`SchedulerConfig`].
//! - `loader.rs`: reading the file (optional when not explicitly requested).
//! - `validate.rs`: raw → validated conversion.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, RawConfigFile, SchedulerConfig, SchedulerSection};
pub use validate::validate_scheduler_config;

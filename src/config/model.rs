// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [scheduler]
/// max_workers = 5
/// base_worktime = 60
/// trace = false
/// ```
///
/// Every field is optional. This is the unvalidated form; convert it into a
/// [`ConfigFile`] with `TryFrom`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub scheduler: SchedulerSection,
}

/// `[scheduler]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerSection {
    /// Size of the worker pool. Must be at least 1.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Flat time added to every step before the name-derived offset.
    #[serde(default)]
    pub base_worktime: u32,

    /// Record a per-tick trace table.
    #[serde(default)]
    pub trace: bool,
}

fn default_max_workers() -> usize {
    1
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
            base_worktime: 0,
            trace: false,
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub scheduler: SchedulerConfig,
}

impl ConfigFile {
    /// Wrap an already validated scheduler config.
    pub(crate) fn new_unchecked(scheduler: SchedulerConfig) -> Self {
        Self { scheduler }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(SchedulerConfig::default())
    }
}

/// Settings the simulation core accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub max_workers: usize,
    pub base_worktime: u32,
    pub record_trace: bool,
}

impl SchedulerConfig {
    pub fn new(max_workers: usize, base_worktime: u32) -> Self {
        Self {
            max_workers,
            base_worktime,
            record_trace: false,
        }
    }

    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new(default_max_workers(), 0)
    }
}

// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile, SchedulerConfig};
use crate::errors::{Result, StepdagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = StepdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        let s = raw.scheduler;
        Ok(ConfigFile::new_unchecked(
            SchedulerConfig::new(s.max_workers, s.base_worktime).with_trace(s.trace),
        ))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_scheduler_section(cfg)?;
    Ok(())
}

fn validate_scheduler_section(cfg: &RawConfigFile) -> Result<()> {
    if cfg.scheduler.max_workers == 0 {
        return Err(StepdagError::ConfigError(
            "[scheduler].max_workers must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

/// Check a config assembled outside of the TOML path (e.g. from CLI flags).
pub fn validate_scheduler_config(cfg: &SchedulerConfig) -> Result<()> {
    if cfg.max_workers == 0 {
        return Err(StepdagError::ConfigError(
            "worker count must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

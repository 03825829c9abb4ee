// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{SchedulerConfig, load_or_default, validate_scheduler_config};
use crate::dag::{DependencyGraph, Execution, WorkerScheduler};
use crate::input::{Constraint, ensure_acyclic};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - reading and checking the constraint file
/// - the simulation
/// - printing the result (and trace, if requested)
pub fn run(args: CliArgs) -> Result<()> {
    let scheduler_cfg = resolve_scheduler_config(&args)?;

    let constraints = input::load_from_path(&args.input)?;
    info!(
        input = %args.input,
        constraints = constraints.len(),
        "loaded constraints"
    );

    if args.dry_run {
        ensure_acyclic(&constraints)?;
        print!("{}", render_dry_run(&constraints, &scheduler_cfg));
        debug!("dry-run complete (no simulation)");
        return Ok(());
    }

    let execution = solve(&constraints, &scheduler_cfg)?;
    print!("{}", render_report(&execution));
    Ok(())
}

/// Load the config file (or defaults), apply CLI overrides and validate.
///
/// With no `--config`, a missing `Stepdag.toml` falls back to defaults.
pub fn resolve_scheduler_config(args: &CliArgs) -> Result<SchedulerConfig> {
    let cfg = load_or_default(args.config.as_deref().map(Path::new))?;
    let scheduler_cfg = apply_overrides(cfg.scheduler, args);
    validate_scheduler_config(&scheduler_cfg)?;
    debug!(?scheduler_cfg, "effective scheduler config");
    Ok(scheduler_cfg)
}

/// Check `constraints` for cycles, then simulate them to completion.
pub fn solve(constraints: &[Constraint], config: &SchedulerConfig) -> errors::Result<Execution> {
    ensure_acyclic(constraints)?;
    Ok(WorkerScheduler::from_constraints(constraints, config).execute())
}

/// Human-readable summary of a finished run.
pub fn render_report(execution: &Execution) -> String {
    let mut out = format!(
        "order: {}\nticks: {}\n",
        execution.order, execution.ticks
    );
    if let Some(trace) = &execution.trace {
        out.push('\n');
        out.push_str(&trace.to_string());
    }
    out
}

/// CLI flags win over the config file.
fn apply_overrides(mut cfg: SchedulerConfig, args: &CliArgs) -> SchedulerConfig {
    if let Some(workers) = args.workers {
        cfg.max_workers = workers;
    }
    if let Some(base) = args.base_worktime {
        cfg.base_worktime = base;
    }
    if args.trace {
        cfg.record_trace = true;
    }
    cfg
}

/// Dry-run listing: config plus one line per step and its predecessors.
pub fn render_dry_run(constraints: &[Constraint], cfg: &SchedulerConfig) -> String {
    let graph = DependencyGraph::from_constraints(constraints, cfg.base_worktime);

    format!(
        "stepdag dry-run\n  scheduler.max_workers = {}\n  scheduler.base_worktime = {}\n\nsteps ({}):\n{graph}",
        cfg.max_workers,
        cfg.base_worktime,
        graph.len()
    )
}

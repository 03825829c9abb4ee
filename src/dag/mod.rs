// src/dag/mod.rs

//! Step graph and worker simulation.
//!
//! - [`step`] defines step names, durations and per-step state.
//! - [`graph`] holds the arena of steps and their unfinished predecessors.
//! - [`scheduler`] runs the tick-by-tick multi-worker simulation.
//! - [`trace`] records what each worker did on each tick.

pub mod graph;
pub mod scheduler;
pub mod step;
pub mod trace;

pub use graph::DependencyGraph;
pub use scheduler::{Execution, WorkerScheduler};
pub use step::{Step, StepName, WorkerId};
pub use trace::{Trace, TraceRow};

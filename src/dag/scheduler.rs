// src/dag/scheduler.rs

//! Tick-by-tick simulation of a worker pool draining the graph.

use tracing::{debug, info, trace};

use crate::config::SchedulerConfig;
use crate::dag::graph::DependencyGraph;
use crate::dag::step::{StepName, WorkerId};
use crate::dag::trace::{Trace, TraceRow};
use crate::errors::Result;
use crate::input::Constraint;

/// Outcome of a complete simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Step names in the order they finished.
    pub order: String,
    /// Ticks elapsed until the graph became empty.
    pub ticks: u64,
    /// Per-tick table, present only when tracing was enabled.
    pub trace: Option<Trace>,
}

/// Discrete-time simulation of a fixed pool of workers draining a
/// [`DependencyGraph`].
///
/// Each tick:
/// 1. idle workers, lowest id first, each take the alphabetically first
///    ready step;
/// 2. every in-progress step advances by one unit of work;
/// 3. steps with no work left are completed (in name order), their workers
///    return to the idle pool and their dependents are unblocked.
///
/// The scheduler owns the graph and consumes it: [`WorkerScheduler::execute`]
/// takes `self`.
///
/// A cyclic graph never produces a ready step, so `execute` never returns
/// for one. Check inputs with [`crate::input::ensure_acyclic`] first.
#[derive(Debug)]
pub struct WorkerScheduler {
    graph: DependencyGraph,
    max_workers: usize,
    idle_workers: Vec<WorkerId>,
    record_trace: bool,
}

impl WorkerScheduler {
    /// Wrap an existing graph.
    ///
    /// Step durations are fixed when the graph is built, so the graph should
    /// have been created with the same `base_worktime` as `config`.
    pub fn new(graph: DependencyGraph, config: &SchedulerConfig) -> Self {
        assert!(config.max_workers >= 1, "worker pool must not be empty");
        Self {
            graph,
            max_workers: config.max_workers,
            idle_workers: (1..=config.max_workers).collect(),
            record_trace: config.record_trace,
        }
    }

    /// Build the graph from `constraints` using `config.base_worktime`.
    pub fn from_constraints(constraints: &[Constraint], config: &SchedulerConfig) -> Self {
        let graph = DependencyGraph::from_constraints(constraints, config.base_worktime);
        Self::new(graph, config)
    }

    /// Parse constraint text and build a scheduler over it.
    pub fn from_text(text: &str, config: &SchedulerConfig) -> Result<Self> {
        let graph = DependencyGraph::from_text(text, config.base_worktime)?;
        Ok(Self::new(graph, config))
    }

    /// Run the simulation until every step has completed.
    pub fn execute(mut self) -> Execution {
        info!(
            steps = self.graph.len(),
            workers = self.max_workers,
            "starting simulation"
        );

        let mut order = String::with_capacity(self.graph.len());
        let mut trace = self.record_trace.then(|| Trace::new(self.max_workers));
        let mut tick: u64 = 0;

        while !self.graph.is_empty() {
            self.assign_work(tick);
            let assignments = trace.as_ref().map(|_| self.assignments());
            self.do_work();
            for name in self.finish_work(tick) {
                order.push(name.as_char());
            }

            if let (Some(trace), Some(assignments)) = (trace.as_mut(), assignments) {
                trace.push(TraceRow {
                    tick,
                    assignments,
                    done: order.clone(),
                });
            }

            tick += 1;
        }

        if let Some(trace) = trace.as_mut() {
            trace.push(TraceRow {
                tick,
                assignments: vec![None; self.max_workers],
                done: order.clone(),
            });
        }

        info!(order = %order, ticks = tick, "simulation finished");

        Execution {
            order,
            ticks: tick,
            trace,
        }
    }

    /// Pair idle workers (ascending id) with ready steps (ascending name).
    fn assign_work(&mut self, tick: u64) {
        self.idle_workers.sort_unstable();

        let mut still_idle = Vec::with_capacity(self.idle_workers.len());
        for &worker in &self.idle_workers {
            match self.graph.next_ready_step() {
                Some(name) => {
                    self.graph.assign(name, worker);
                    debug!(tick, worker, step = %name, "worker picked up step");
                }
                None => still_idle.push(worker),
            }
        }
        self.idle_workers = still_idle;
    }

    fn do_work(&mut self) {
        for name in self.graph.active_steps() {
            self.graph.do_work(name);
            trace!(step = %name, "worked one tick");
        }
    }

    /// Complete every finished step and release its worker.
    fn finish_work(&mut self, tick: u64) -> Vec<StepName> {
        let finished = self.graph.finished_steps();
        for &name in &finished {
            let step = self.graph.complete_step(name);
            if let Some(worker) = step.worker {
                self.idle_workers.push(worker);
            }
            debug!(tick, step = %name, worker = ?step.worker, "step finished");
        }
        finished
    }

    /// Step held by each worker `1..=max_workers`.
    fn assignments(&self) -> Vec<Option<StepName>> {
        let mut slots = vec![None; self.max_workers];
        for name in self.graph.active_steps() {
            if let Some(worker) = self.graph.worker_of(name) {
                slots[worker - 1] = Some(name);
            }
        }
        slots
    }
}

// src/dag/graph.rs

//! Dependency graph of steps keyed by name.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::dag::step::{Step, StepName, WorkerId};
use crate::errors::Result;
use crate::input::{Constraint, parse_constraints};

/// Arena of steps keyed by name.
///
/// Dependents are not linked to their predecessors by reference; each step
/// only stores the *names* of the predecessors it is still waiting on, and
/// completing a step strips that name from every set it appears in.
///
/// `BTreeMap` keeps iteration in name order, which is what every query below
/// relies on for its alphabetical tie-break.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    steps: BTreeMap<StepName, Step>,
}

impl DependencyGraph {
    /// Build a graph from parsed constraints.
    ///
    /// Steps are created on first mention, whether as predecessor or as
    /// dependent. Cycles are not checked here.
    pub fn from_constraints(constraints: &[Constraint], base_worktime: u32) -> Self {
        let mut steps: BTreeMap<StepName, Step> = BTreeMap::new();

        for c in constraints {
            steps
                .entry(c.before)
                .or_insert_with(|| Step::new(c.before, base_worktime));
            steps
                .entry(c.after)
                .or_insert_with(|| Step::new(c.after, base_worktime))
                .predecessors
                .insert(c.before);
        }

        debug!(steps = steps.len(), "built dependency graph");
        Self { steps }
    }

    /// Parse constraint text (one sentence per line) and build a graph.
    pub fn from_text(text: &str, base_worktime: u32) -> Result<Self> {
        let constraints = parse_constraints(text)?;
        Ok(Self::from_constraints(&constraints, base_worktime))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, name: StepName) -> Option<&Step> {
        self.steps.get(&name)
    }

    /// All remaining step names, in name order.
    pub fn names(&self) -> impl Iterator<Item = StepName> + '_ {
        self.steps.keys().copied()
    }

    pub fn is_blocked(&self, name: StepName) -> bool {
        self.steps.get(&name).is_some_and(Step::is_blocked)
    }

    pub fn is_in_progress(&self, name: StepName) -> bool {
        self.steps.get(&name).is_some_and(Step::is_in_progress)
    }

    /// Worker currently holding `name`, if any.
    pub fn worker_of(&self, name: StepName) -> Option<WorkerId> {
        self.steps.get(&name).and_then(|s| s.worker)
    }

    /// Alphabetically first step that is neither blocked nor in progress.
    pub fn next_ready_step(&self) -> Option<StepName> {
        self.steps
            .values()
            .find(|s| !s.is_blocked() && !s.is_in_progress())
            .map(|s| s.name)
    }

    /// Steps currently assigned to a worker, in name order.
    pub fn active_steps(&self) -> Vec<StepName> {
        self.steps
            .values()
            .filter(|s| s.is_in_progress())
            .map(|s| s.name)
            .collect()
    }

    /// In-progress steps with no work left, in name order.
    pub fn finished_steps(&self) -> Vec<StepName> {
        self.steps
            .values()
            .filter(|s| s.is_in_progress() && s.remaining_work == 0)
            .map(|s| s.name)
            .collect()
    }

    /// Hand `name` to `worker`.
    ///
    /// Panics if the step is unknown, blocked or already in progress.
    pub fn assign(&mut self, name: StepName, worker: WorkerId) {
        let step = self.step_mut(name);
        assert!(!step.is_blocked(), "step {name} assigned while blocked");
        assert!(
            !step.is_in_progress(),
            "step {name} assigned while already in progress"
        );
        step.worker = Some(worker);
        debug!(step = %name, worker, "assigned step");
    }

    /// Advance an in-progress step by one tick of work.
    pub fn do_work(&mut self, name: StepName) {
        self.step_mut(name).do_work();
    }

    /// Mark `name` as done: unblock its dependents and drop it from the graph.
    ///
    /// Returns the removed step record. Panics if the step is unknown or
    /// still has unfinished predecessors.
    pub fn complete_step(&mut self, name: StepName) -> Step {
        assert!(
            !self.step_mut(name).is_blocked(),
            "step {name} completed while still blocked"
        );

        for dependent in self.steps.values_mut().filter(|s| s.is_blocked_by(name)) {
            dependent.predecessors.remove(&name);
            if !dependent.is_blocked() {
                debug!(step = %dependent.name, unblocked_by = %name, "step unblocked");
            }
        }

        let Some(step) = self.steps.remove(&name) else {
            unreachable!("step {name} vanished while completing");
        };
        step
    }

    fn step_mut(&mut self, name: StepName) -> &mut Step {
        match self.steps.get_mut(&name) {
            Some(step) => step,
            None => panic!("unknown step {name}"),
        }
    }
}

impl fmt::Display for DependencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.steps.values() {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

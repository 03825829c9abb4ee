// src/dag/step.rs

//! Step names and per-step simulation state.

use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{Result, StepdagError};

/// Identifier of a logical worker slot (`1..=max_workers`).
pub type WorkerId = usize;

/// Name of a step: a single uppercase ASCII letter.
///
/// The derived `Ord` is alphabetical and is the only tie-break the
/// scheduler uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepName(char);

impl StepName {
    /// Position of the letter in the alphabet: `A = 1`, ..., `Z = 26`.
    pub fn ordinal(self) -> u32 {
        self.0 as u32 - 'A' as u32 + 1
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for StepName {
    type Error = StepdagError;

    fn try_from(c: char) -> Result<Self> {
        if c.is_ascii_uppercase() {
            Ok(StepName(c))
        } else {
            Err(StepdagError::InvalidStepName(c))
        }
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of the dependency graph together with its simulation state.
#[derive(Debug, Clone)]
pub struct Step {
    pub name: StepName,
    /// Unfinished predecessors. Only ever shrinks.
    pub predecessors: BTreeSet<StepName>,
    /// Ticks of work left before the step is finished.
    ///
    /// Wider than `base_worktime` so that `base + ordinal` cannot overflow.
    pub remaining_work: u64,
    /// Worker currently executing this step, if any.
    pub worker: Option<WorkerId>,
}

impl Step {
    pub fn new(name: StepName, base_worktime: u32) -> Self {
        Self {
            name,
            predecessors: BTreeSet::new(),
            remaining_work: u64::from(base_worktime) + u64::from(name.ordinal()),
            worker: None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        !self.predecessors.is_empty()
    }

    pub fn is_in_progress(&self) -> bool {
        self.worker.is_some()
    }

    pub fn is_blocked_by(&self, name: StepName) -> bool {
        self.predecessors.contains(&name)
    }

    /// Advance this step by one tick of work.
    ///
    /// Panics if the step is not assigned, is still blocked, or has no work
    /// left.
    pub fn do_work(&mut self) {
        assert!(
            self.is_in_progress() && !self.is_blocked(),
            "step {} worked while idle or blocked",
            self.name
        );
        assert!(self.remaining_work > 0, "step {} has no work left", self.name);
        self.remaining_work -= 1;
    }
}

impl fmt::Display for Step {
    /// `X -> P1,P2` with predecessors in name order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preds: Vec<String> = self.predecessors.iter().map(|p| p.to_string()).collect();
        write!(f, "{} -> {}", self.name, preds.join(","))
    }
}

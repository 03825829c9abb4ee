// src/dag/trace.rs

//! Per-tick record of a simulation, for diagnostics.

use std::fmt;

use crate::dag::step::StepName;

/// Snapshot of one tick: who worked on what, and what is done so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRow {
    pub tick: u64,
    /// Index `i` holds the step worker `i + 1` is executing, `None` if idle.
    pub assignments: Vec<Option<StepName>>,
    /// Cumulative completion order at the end of the tick.
    pub done: String,
}

/// Table of [`TraceRow`]s for a whole run.
///
/// Renders as a tab-delimited table:
///
/// ```text
/// Second  Worker 1  Worker 2  Done
/// 0       C         .
/// 1       C         .
/// ...
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub workers: usize,
    pub rows: Vec<TraceRow>,
}

impl Trace {
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: TraceRow) {
        debug_assert_eq!(row.assignments.len(), self.workers);
        self.rows.push(row);
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Second\t")?;
        for worker in 1..=self.workers {
            write!(f, "Worker {worker}\t")?;
        }
        writeln!(f, "Done")?;

        for row in &self.rows {
            write!(f, "{}\t", row.tick)?;
            for slot in &row.assignments {
                match slot {
                    Some(name) => write!(f, "{name}\t")?,
                    None => write!(f, ".\t")?,
                }
            }
            writeln!(f, "{}", row.done)?;
        }
        Ok(())
    }
}

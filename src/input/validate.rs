// src/input/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::StepName;
use crate::errors::{Result, StepdagError};
use crate::input::parse::Constraint;

/// Reject constraint sets that contain a cycle.
///
/// The simulation itself does not look for cycles (it would simply never
/// finish), so callers that accept arbitrary input run this first.
pub fn ensure_acyclic(constraints: &[Constraint]) -> Result<()> {
    // Edge direction: before -> after.
    let mut graph: DiGraphMap<StepName, ()> = DiGraphMap::new();
    for c in constraints {
        graph.add_edge(c.before, c.after, ());
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(StepdagError::DagCycle(format!(
            "cycle detected involving step '{}'",
            cycle.node_id()
        ))),
    }
}

#![allow(dead_code)]

use stepdag::config::SchedulerConfig;
use stepdag::dag::StepName;
use stepdag::input::Constraint;

/// The worked example from the puzzle statement.
pub const SAMPLE_INPUT: &str = "\
Step C must be finished before step A can begin.
Step C must be finished before step F can begin.
Step A must be finished before step B can begin.
Step A must be finished before step D can begin.
Step B must be finished before step E can begin.
Step D must be finished before step E can begin.
Step F must be finished before step E can begin.
";

/// Shorthand for a known-valid step name.
pub fn step(c: char) -> StepName {
    StepName::try_from(c).expect("test step names are A-Z")
}

/// Builder for constraint sets, producing either parsed [`Constraint`]s or
/// the equivalent input text.
#[derive(Debug, Clone, Default)]
pub struct ConstraintSetBuilder {
    pairs: Vec<(char, char)>,
}

impl ConstraintSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `before` must be finished before `after` can begin.
    pub fn edge(mut self, before: char, after: char) -> Self {
        self.pairs.push((before, after));
        self
    }

    /// A straight chain: `a -> b -> c ...`.
    pub fn chain(mut self, names: &str) -> Self {
        let chars: Vec<char> = names.chars().collect();
        for w in chars.windows(2) {
            self.pairs.push((w[0], w[1]));
        }
        self
    }

    pub fn build(&self) -> Vec<Constraint> {
        self.pairs
            .iter()
            .map(|&(b, a)| Constraint::new(step(b), step(a)))
            .collect()
    }

    pub fn to_text(&self) -> String {
        self.pairs
            .iter()
            .map(|(b, a)| format!("Step {b} must be finished before step {a} can begin.\n"))
            .collect()
    }
}

/// Builder for [`SchedulerConfig`].
#[derive(Debug, Clone)]
pub struct SchedulerConfigBuilder {
    config: SchedulerConfig,
}

impl SchedulerConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    pub fn workers(mut self, n: usize) -> Self {
        self.config.max_workers = n;
        self
    }

    pub fn base_worktime(mut self, t: u32) -> Self {
        self.config.base_worktime = t;
        self
    }

    pub fn trace(mut self, on: bool) -> Self {
        self.config.record_trace = on;
        self
    }

    pub fn build(self) -> SchedulerConfig {
        self.config
    }
}

impl Default for SchedulerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

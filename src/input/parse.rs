// src/input/parse.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::dag::StepName;
use crate::errors::{Result, StepdagError};

static CONSTRAINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Step (\S+) must be finished before step (\S+) can begin\.$")
        .expect("constraint pattern is a valid regex")
});

/// "`before` must be finished before `after` can begin."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Constraint {
    pub before: StepName,
    pub after: StepName,
}

impl Constraint {
    pub fn new(before: StepName, after: StepName) -> Self {
        Self { before, after }
    }
}

/// Parse a single constraint sentence.
///
/// A line that does not have the sentence shape, or names a step with more
/// than one character, is `MalformedConstraint`. A single-character name
/// outside `A`-`Z` is `InvalidStepName`. `line_no` is 1-based and only used
/// for error reporting.
pub fn parse_constraint(line: &str, line_no: usize) -> Result<Constraint> {
    let malformed = || StepdagError::MalformedConstraint {
        line: line_no,
        text: line.to_string(),
    };

    let caps = CONSTRAINT_RE.captures(line.trim()).ok_or_else(malformed)?;
    let before = letter(&caps[1]).ok_or_else(malformed)?;
    let after = letter(&caps[2]).ok_or_else(malformed)?;

    Ok(Constraint::new(
        StepName::try_from(before)?,
        StepName::try_from(after)?,
    ))
}

/// Parse every non-blank line of `text`. Stops at the first malformed line.
pub fn parse_constraints(text: &str) -> Result<Vec<Constraint>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_constraint(line, idx + 1))
        .collect()
}

/// The only character of `s`, if it has exactly one.
fn letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

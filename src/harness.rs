//! Demonstration harness
//!
//! Runs each case through build -> serialize -> invert -> serialize and
//! keeps the before/after snapshots for display.

use std::fmt;

use tracing::instrument;

use crate::level_order::LevelOrder;
use crate::tree::{build_tree, invert_tree, serialize};

const SEPARATOR: &str = "--------------------";

/// Built-in cases run when no trees are given on the command line
pub fn default_cases() -> Vec<LevelOrder> {
    [
        vec![Some(5), Some(3), Some(8), Some(1), Some(7), Some(2), Some(6)],
        vec![Some(6), Some(8), Some(9)],
        vec![
            Some(5),
            Some(3),
            Some(8),
            Some(1),
            Some(7),
            Some(2),
            Some(6),
            Some(100),
            Some(3),
            Some(-1),
        ],
        // Edge cases
        vec![],
        vec![None],
        vec![Some(1)],
        vec![Some(1), Some(2)],
        vec![Some(1), None, Some(2)],
    ]
    .into_iter()
    .map(LevelOrder::from)
    .collect()
}

/// Before and after snapshots of one inverted tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// One-based case number
    pub index: usize,

    /// Serialized tree before inversion
    pub input: LevelOrder,

    /// Serialized tree after inversion
    pub output: LevelOrder,
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f)?;
        writeln!(f, "Test Case {}", self.index)?;
        writeln!(f, "input tree: {}", self.input)?;
        write!(f, "output tree: {}", self.output)
    }
}

/// Build, snapshot, invert and snapshot a single case
///
/// The input snapshot is taken from the built tree rather than copied from
/// `values`, so it is already in canonical form.
#[instrument(level = "trace", skip(values), fields(len = values.len()))]
pub fn run_case(index: usize, values: &[Option<i64>]) -> CaseReport {
    let tree = build_tree(values);
    let input = LevelOrder::from(serialize(tree.as_deref()));

    let tree = invert_tree(tree);
    let output = LevelOrder::from(serialize(tree.as_deref()));

    CaseReport {
        index,
        input,
        output,
    }
}

/// Run every case in order, numbering them from one
pub fn run_all(cases: &[LevelOrder]) -> Vec<CaseReport> {
    cases
        .iter()
        .enumerate()
        .map(|(idx, case)| run_case(idx + 1, case))
        .collect()
}

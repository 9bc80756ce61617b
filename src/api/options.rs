//! Engine configuration.

use crate::fold::DEFAULT_MAX_DEPTH;

/// Knobs for evaluation and extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum recursion depth when walking a tree. Guards the call stack
    /// against adversarially nested formulas.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

use std::collections::{BTreeSet, HashSet};

/// Answers whether a line is a lazy continuation of an enclosing container.
///
/// The table is owned by the block-structure layer around the recognizers;
/// recognizers only ever read it.
pub trait LazinessOracle {
    fn is_lazy(&self, line: usize) -> bool;
}

/// An oracle for input without containers: no line is lazy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLaziness;

impl LazinessOracle for NoLaziness {
    fn is_lazy(&self, _line: usize) -> bool {
        false
    }
}

impl LazinessOracle for HashSet<usize> {
    fn is_lazy(&self, line: usize) -> bool {
        self.contains(&line)
    }
}

impl LazinessOracle for BTreeSet<usize> {
    fn is_lazy(&self, line: usize) -> bool {
        self.contains(&line)
    }
}

impl<F> LazinessOracle for F
where
    F: Fn(usize) -> bool,
{
    fn is_lazy(&self, line: usize) -> bool {
        self(line)
    }
}

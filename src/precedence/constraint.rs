// src/precedence/constraint.rs

use std::fmt;

/// A single ordering constraint: `before` must be visited before `after`.
///
/// In UI terms this is "`after` must go after `before`".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint<N> {
    pub before: N,
    pub after: N,
}

impl<N> Constraint<N> {
    pub fn new(before: N, after: N) -> Self {
        Self { before, after }
    }

    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.before == self.after
    }
}

impl<N> From<(N, N)> for Constraint<N> {
    fn from((before, after): (N, N)) -> Self {
        Self { before, after }
    }
}

impl<N: Clone> From<&(N, N)> for Constraint<N> {
    fn from(pair: &(N, N)) -> Self {
        Self {
            before: pair.0.clone(),
            after: pair.1.clone(),
        }
    }
}

impl<N: Clone> From<&Constraint<N>> for Constraint<N> {
    fn from(c: &Constraint<N>) -> Self {
        c.clone()
    }
}

impl<N: fmt::Display> fmt::Display for Constraint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.before, self.after)
    }
}

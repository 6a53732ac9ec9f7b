// src/precedence/mod.rs

//! "Must go after" constraints between selected locations.
//!
//! - [`constraint`] holds the `before -> after` pair type.
//! - [`graph`] builds the derived graph and runs Kahn's algorithm over it.
//! - [`diagnose`] names the nodes on each cycle for error messages.
//!
//! The graph is rebuilt from scratch on every check and dropped afterwards;
//! nothing here keeps state between calls.

pub mod constraint;
pub mod diagnose;
pub mod graph;

use std::hash::Hash;

pub use constraint::Constraint;
pub use diagnose::{cycle_groups, describe_cycles};
pub use graph::{Cycle, PrecedenceGraph};

/// Returns `true` if the constraints contain at least one cycle.
///
/// A self-loop `(x, x)` counts as a cycle. The empty set is acyclic.
/// Duplicate pairs and input order do not change the answer.
pub fn has_cycle<N, I, C>(constraints: I) -> bool
where
    N: Eq + Hash + Clone,
    I: IntoIterator<Item = C>,
    C: Into<Constraint<N>>,
{
    PrecedenceGraph::from_constraints(constraints)
        .topological_order()
        .is_err()
}

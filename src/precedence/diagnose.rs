// src/precedence/diagnose.rs

//! Cycle diagnostics for error messages.
//!
//! Kahn's algorithm only says *that* the constraints are unsatisfiable, and
//! its leftover set also contains nodes merely downstream of a cycle. Here we
//! use strongly connected components to name the nodes that actually sit on
//! a cycle.

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::{DiGraphMap, NodeTrait};

use super::constraint::Constraint;

/// Groups of nodes that form cycles, each group sorted, groups sorted.
///
/// A self-loop yields a single-node group. Returns an empty list for an
/// acyclic constraint set.
pub fn cycle_groups<N, I>(constraints: I) -> Vec<Vec<N>>
where
    N: NodeTrait,
    I: IntoIterator<Item = Constraint<N>>,
{
    let mut graph: DiGraphMap<N, ()> = DiGraphMap::new();
    for c in constraints {
        graph.add_edge(c.before, c.after, ());
    }

    let mut groups: Vec<Vec<N>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
        .map(|mut scc| {
            scc.sort();
            scc
        })
        .collect();
    groups.sort();
    groups
}

/// Human-readable form of [`cycle_groups`], e.g. `"a, b; c"`.
pub fn describe_cycles<N, I>(constraints: I) -> String
where
    N: NodeTrait + std::fmt::Display,
    I: IntoIterator<Item = Constraint<N>>,
{
    cycle_groups(constraints)
        .iter()
        .map(|group| {
            group
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("; ")
}

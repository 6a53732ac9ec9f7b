// src/planner/mod.rs

//! Minimum-cost visiting order over the selected locations.
//!
//! - [`matrix`] holds the square cost tables.
//! - [`held_karp`] is the bitmask DP used when only start and end are fixed.
//! - [`exhaustive`] is the backtracking search used for everything else
//!   (pinned slots, precedence constraints, open start or end).

pub mod exhaustive;
pub mod held_karp;
pub mod matrix;

use tracing::{debug, warn};

pub use matrix::{CostMatrix, DurationMatrix};

/// Largest number of locations either search will take on. Held-Karp needs
/// `2^(n-2)` table rows and the backtracking search is factorial.
pub const MAX_PLANNABLE_LOCATIONS: usize = 10;

/// Constraints on the visiting order, expressed in dense indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteConstraints {
    /// `fixed[slot] = Some(v)` pins node `v` to that position. May be shorter
    /// than the number of nodes; missing slots are free.
    pub fixed: Vec<Option<usize>>,
    /// `(before, after)` pairs: `before` must be visited earlier.
    pub precedence: Vec<(usize, usize)>,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl RouteConstraints {
    fn has_pins(&self) -> bool {
        self.fixed.iter().any(Option::is_some)
    }
}

/// Which search the planner runs for a given set of constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    HeldKarp,
    Exhaustive,
}

impl Strategy {
    pub fn for_constraints(constraints: &RouteConstraints) -> Self {
        if !constraints.has_pins()
            && constraints.precedence.is_empty()
            && constraints.start.is_some()
            && constraints.end.is_some()
        {
            Strategy::HeldKarp
        } else {
            Strategy::Exhaustive
        }
    }
}

/// A complete visiting order and its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub order: Vec<usize>,
    pub cost: u64,
}

impl Route {
    /// Sum of leg durations along this route.
    pub fn total_duration(&self, durations: &DurationMatrix) -> u64 {
        durations.path_cost(&self.order)
    }
}

/// Find the cheapest order visiting every node exactly once.
///
/// Returns `None` when no order satisfies the constraints, or when the matrix
/// has more than [`MAX_PLANNABLE_LOCATIONS`] nodes.
pub fn solve(matrix: &CostMatrix, constraints: &RouteConstraints) -> Option<Route> {
    if matrix.len() > MAX_PLANNABLE_LOCATIONS {
        warn!(
            nodes = matrix.len(),
            max = MAX_PLANNABLE_LOCATIONS,
            "refusing to plan: too many locations"
        );
        return None;
    }

    let strategy = Strategy::for_constraints(constraints);
    debug!(
        nodes = matrix.len(),
        ?strategy,
        precedence = constraints.precedence.len(),
        "solving route"
    );

    match strategy {
        Strategy::HeldKarp => {
            // Both are present by construction of the strategy.
            let (start, end) = (constraints.start?, constraints.end?);
            held_karp::solve(matrix, start, end)
        }
        Strategy::Exhaustive => {
            let slots = build_slots(matrix.len(), constraints)?;
            exhaustive::solve(matrix, &slots, &constraints.precedence)
        }
    }
}

/// Merge pins with start / end into one slot table.
///
/// Returns `None` for conflicting requests: a slot claimed by two nodes, a
/// node pinned to two slots, or an index out of range.
fn build_slots(n: usize, constraints: &RouteConstraints) -> Option<Vec<Option<usize>>> {
    if constraints.fixed.len() > n {
        return None;
    }
    let mut slots = vec![None; n];
    let mut seen = vec![false; n];

    let mut pin = |slot: usize, v: usize| -> Option<()> {
        if v >= n {
            return None;
        }
        match slots[slot] {
            Some(existing) if existing == v => return Some(()),
            Some(_) => return None,
            None => {}
        }
        if seen[v] {
            return None;
        }
        slots[slot] = Some(v);
        seen[v] = true;
        Some(())
    };

    for (slot, v) in constraints.fixed.iter().enumerate() {
        if let Some(v) = *v {
            pin(slot, v)?;
        }
    }
    if n > 0 {
        if let Some(start) = constraints.start {
            pin(0, start)?;
        }
        if let Some(end) = constraints.end {
            pin(n - 1, end)?;
        }
    }

    Some(slots)
}

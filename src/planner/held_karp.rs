// src/planner/held_karp.rs

//! Held-Karp dynamic programming for the fixed start / fixed end case.
//!
//! `dp[mask][i]` is the cheapest cost of leaving `start`, visiting exactly
//! the free nodes in `mask`, and stopping at `free[i]`.

use tracing::trace;

use super::matrix::CostMatrix;
use super::{Route, MAX_PLANNABLE_LOCATIONS};

const INF: u64 = u64::MAX;

/// Cheapest path `start -> (every other node) -> end`.
///
/// Returns `None` if `start` or `end` is out of range, if they are equal on a
/// multi-location matrix, or if the matrix has more than
/// [`MAX_PLANNABLE_LOCATIONS`] nodes.
pub fn solve(matrix: &CostMatrix, start: usize, end: usize) -> Option<Route> {
    let n = matrix.len();
    if n > MAX_PLANNABLE_LOCATIONS || start >= n || end >= n {
        return None;
    }
    if start == end {
        // Only a single-location trip can start and end at the same place.
        return (n == 1).then(|| Route {
            order: vec![start],
            cost: 0,
        });
    }

    let free: Vec<usize> = (0..n).filter(|&v| v != start && v != end).collect();
    let k = free.len();
    if k == 0 {
        return Some(Route {
            order: vec![start, end],
            cost: matrix.get(start, end),
        });
    }

    let full = (1usize << k) - 1;
    let mut dp = vec![vec![INF; k]; full + 1];
    let mut parent = vec![vec![usize::MAX; k]; full + 1];

    for (i, &v) in free.iter().enumerate() {
        dp[1 << i][i] = matrix.get(start, v);
    }

    for mask in 1..=full {
        for last in 0..k {
            if mask & (1 << last) == 0 {
                continue;
            }
            let prev_mask = mask ^ (1 << last);
            if prev_mask == 0 {
                continue;
            }
            for prev in 0..k {
                if prev_mask & (1 << prev) == 0 || dp[prev_mask][prev] == INF {
                    continue;
                }
                let cost = dp[prev_mask][prev].saturating_add(matrix.get(free[prev], free[last]));
                if cost < dp[mask][last] {
                    dp[mask][last] = cost;
                    parent[mask][last] = prev;
                }
            }
        }
    }

    let mut best: Option<(u64, usize)> = None;
    for last in 0..k {
        if dp[full][last] == INF {
            continue;
        }
        let cost = dp[full][last].saturating_add(matrix.get(free[last], end));
        if best.is_none_or(|(c, _)| cost < c) {
            best = Some((cost, last));
        }
    }
    let (cost, mut last) = best?;

    let mut middle = Vec::with_capacity(k);
    let mut mask = full;
    loop {
        middle.push(free[last]);
        let prev = parent[mask][last];
        mask ^= 1 << last;
        if mask == 0 {
            break;
        }
        last = prev;
    }
    middle.reverse();

    let mut order = Vec::with_capacity(n);
    order.push(start);
    order.extend(middle);
    order.push(end);

    trace!(?order, cost, "held-karp finished");
    Some(Route { order, cost })
}

// src/planner/exhaustive.rs

//! Backtracking search over every order that fits the pinned slots.
//!
//! Slots are filled left to right. A node may only be placed once all of
//! its required predecessors are already placed, so partial orders that
//! break a precedence constraint are cut immediately. Branches whose partial
//! cost already reaches the best complete cost are cut as well.

use super::matrix::CostMatrix;
use super::Route;

struct Search<'a> {
    matrix: &'a CostMatrix,
    slots: &'a [Option<usize>],
    free: Vec<usize>,
    preds: Vec<Vec<usize>>,
    placed: Vec<bool>,
    order: Vec<usize>,
    best: Option<Route>,
}

/// `slots[i] = Some(v)` pins node `v` to position `i`. Every node must appear
/// in at most one slot; unpinned nodes fill the `None` slots.
pub fn solve(
    matrix: &CostMatrix,
    slots: &[Option<usize>],
    precedence: &[(usize, usize)],
) -> Option<Route> {
    let n = matrix.len();
    let mut pinned = vec![false; n];
    for v in slots.iter().flatten() {
        pinned[*v] = true;
    }

    let mut preds = vec![Vec::new(); n];
    for &(before, after) in precedence {
        preds[after].push(before);
    }

    let mut search = Search {
        matrix,
        slots,
        free: (0..n).filter(|&v| !pinned[v]).collect(),
        preds,
        placed: vec![false; n],
        order: Vec::with_capacity(n),
        best: None,
    };
    search.fill(0, 0);
    search.best
}

impl Search<'_> {
    fn fill(&mut self, slot: usize, cost: u64) {
        if let Some(best) = &self.best {
            if cost >= best.cost {
                return;
            }
        }

        if slot == self.slots.len() {
            self.best = Some(Route {
                order: self.order.clone(),
                cost,
            });
            return;
        }

        match self.slots[slot] {
            Some(v) => self.try_place(v, slot, cost),
            None => {
                for i in 0..self.free.len() {
                    let v = self.free[i];
                    if !self.placed[v] {
                        self.try_place(v, slot, cost);
                    }
                }
            }
        }
    }

    fn try_place(&mut self, v: usize, slot: usize, cost: u64) {
        if !self.preds[v].iter().all(|&p| self.placed[p]) {
            return;
        }
        let step = match self.order.last() {
            Some(&prev) => self.matrix.get(prev, v),
            None => 0,
        };

        self.placed[v] = true;
        self.order.push(v);
        self.fill(slot + 1, cost.saturating_add(step));
        self.order.pop();
        self.placed[v] = false;
    }
}

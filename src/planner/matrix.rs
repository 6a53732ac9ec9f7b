// src/planner/matrix.rs

use crate::errors::{Result, TripdagError};

/// Square matrix of non-negative leg costs, indexed by dense location index.
///
/// `get(i, j)` is the cost of travelling from `i` to `j`. The matrix does not
/// need to be symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    n: usize,
    cells: Vec<u64>,
}

/// Same layout as [`CostMatrix`], holding seconds instead of metres.
pub type DurationMatrix = CostMatrix;

impl CostMatrix {
    /// All-zero `n x n` matrix.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Build from rows. Every row must have exactly `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(TripdagError::InvalidRequest(format!(
                    "cost matrix row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            cells.extend(row);
        }
        Ok(Self { n, cells })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.cells[from * self.n + to]
    }

    pub fn set(&mut self, from: usize, to: usize, cost: u64) {
        self.cells[from * self.n + to] = cost;
    }

    /// Sum of consecutive legs along `order`.
    pub fn path_cost(&self, order: &[usize]) -> u64 {
        order
            .windows(2)
            .map(|w| self.get(w[0], w[1]))
            .fold(0u64, u64::saturating_add)
    }
}

// src/precedence/graph.rs

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use super::constraint::Constraint;

/// Directed graph derived from a set of precedence constraints.
///
/// Nodes are the union of every constraint endpoint, kept in first-seen
/// order. Identifiers are interned to dense indices so the indegree and
/// adjacency tables are plain vectors.
#[derive(Debug, Clone)]
pub struct PrecedenceGraph<N> {
    ids: Vec<N>,
    index: HashMap<N, usize>,
    successors: Vec<Vec<usize>>,
    indegree: Vec<usize>,
    edges: usize,
}

/// Nodes that could not be ordered because their indegree never dropped to 0.
///
/// That covers every node on a cycle plus everything downstream of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<N> {
    pub blocked: Vec<N>,
}

impl<N: fmt::Display> fmt::Display for Cycle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.blocked.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl<N> PrecedenceGraph<N>
where
    N: Eq + Hash + Clone,
{
    /// Build the graph for one validation call.
    ///
    /// Edge direction: `before -> after`. Duplicate pairs add duplicate
    /// edges, which also add to the indegree, so the counts stay balanced.
    pub fn from_constraints<I, C>(constraints: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Constraint<N>>,
    {
        let mut graph = Self {
            ids: Vec::new(),
            index: HashMap::new(),
            successors: Vec::new(),
            indegree: Vec::new(),
            edges: 0,
        };

        for c in constraints {
            let Constraint { before, after } = c.into();
            let from = graph.intern(before);
            let to = graph.intern(after);
            graph.successors[from].push(to);
            graph.indegree[to] += 1;
            graph.edges += 1;
        }

        graph
    }

    fn intern(&mut self, id: N) -> usize {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.ids.len();
        self.index.insert(id.clone(), idx);
        self.ids.push(id);
        self.successors.push(Vec::new());
        self.indegree.push(0);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// All nodes in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.ids.iter()
    }

    pub fn contains(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    /// Number of incoming edges, or `None` for an unknown node.
    pub fn indegree_of(&self, id: &N) -> Option<usize> {
        self.index.get(id).map(|&idx| self.indegree[idx])
    }

    /// Immediate successors (nodes that must come after `id`).
    pub fn successors_of(&self, id: &N) -> Vec<&N> {
        self.index
            .get(id)
            .map(|&idx| self.successors[idx].iter().map(|&s| &self.ids[s]).collect())
            .unwrap_or_default()
    }

    /// Kahn's algorithm.
    ///
    /// The queue is FIFO and seeded in first-seen order, which makes the
    /// returned order deterministic. Only success vs. failure is meaningful
    /// for validation.
    pub fn topological_order(&self) -> Result<Vec<N>, Cycle<N>> {
        let mut indegree = self.indegree.clone();
        let mut queue: VecDeque<usize> = indegree
            .iter()
            .enumerate()
            .filter(|(_, deg)| **deg == 0)
            .map(|(i, _)| i)
            .collect();

        let mut order = Vec::with_capacity(self.ids.len());
        while let Some(node) = queue.pop_front() {
            order.push(self.ids[node].clone());
            for &next in &self.successors[node] {
                indegree[next] -= 1;
                if indegree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        if order.len() < self.ids.len() {
            let blocked = indegree
                .iter()
                .enumerate()
                .filter(|(_, deg)| **deg > 0)
                .map(|(i, _)| self.ids[i].clone())
                .collect();
            return Err(Cycle { blocked });
        }

        Ok(order)
    }
}

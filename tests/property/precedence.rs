use proptest::prelude::*;
use tripdag::precedence::{has_cycle, PrecedenceGraph};

// Acyclic by construction: every edge goes from a lower to a higher node.
fn dag_strategy(max_nodes: u8) -> impl Strategy<Value = Vec<(u8, u8)>> {
    (2..=max_nodes).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n), 0..24).prop_map(|raw| {
            raw.into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
                .collect()
        })
    })
}

fn any_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..8, 0u8..8), 0..20)
}

proptest! {
    #[test]
    fn forward_only_edges_never_form_a_cycle(edges in dag_strategy(10)) {
        prop_assert!(!has_cycle(edges.clone()));

        // The order Kahn produces respects every edge.
        let order = PrecedenceGraph::from_constraints(edges.clone())
            .topological_order()
            .expect("acyclic");
        let pos = |n: u8| order.iter().position(|&x| x == n).unwrap();
        for (a, b) in edges {
            prop_assert!(pos(a) < pos(b));
        }
    }

    #[test]
    fn result_is_invariant_under_permutation(
        edges in any_edges(),
        seed in any::<u64>(),
    ) {
        let mut shuffled = edges.clone();
        // Deterministic Fisher-Yates driven by the seed.
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % (i as u64 + 1)) as usize;
            shuffled.swap(i, j);
        }
        prop_assert_eq!(has_cycle(edges), has_cycle(shuffled));
    }

    #[test]
    fn duplicating_edges_does_not_change_the_result(edges in any_edges()) {
        let mut doubled = edges.clone();
        doubled.extend(edges.iter().copied());
        prop_assert_eq!(has_cycle(edges), has_cycle(doubled));
    }

    #[test]
    fn adding_edges_never_removes_a_cycle(
        edges in any_edges(),
        extra in any_edges(),
    ) {
        if has_cycle(edges.clone()) {
            let mut more = edges;
            more.extend(extra);
            prop_assert!(has_cycle(more));
        }
    }

    #[test]
    fn back_edge_to_an_ancestor_closes_a_cycle(len in 2u8..10) {
        let mut chain: Vec<(u8, u8)> = (0..len - 1).map(|i| (i, i + 1)).collect();
        prop_assert!(!has_cycle(chain.clone()));
        chain.push((len - 1, 0));
        prop_assert!(has_cycle(chain));
    }

    #[test]
    fn cycle_reports_a_non_empty_blocked_set(edges in any_edges()) {
        let graph = PrecedenceGraph::from_constraints(edges.clone());
        match graph.topological_order() {
            Ok(order) => prop_assert_eq!(order.len(), graph.node_count()),
            Err(cycle) => {
                prop_assert!(!cycle.blocked.is_empty());
                prop_assert!(cycle.blocked.len() <= graph.node_count());
            }
        }
    }
}

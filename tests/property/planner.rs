use proptest::prelude::*;
use tripdag::planner::{exhaustive, held_karp, solve, CostMatrix, RouteConstraints};

fn matrix_strategy(max_n: usize) -> impl Strategy<Value = CostMatrix> {
    (1..=max_n).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0u64..1_000, n), n).prop_map(
            |mut rows| {
                for (i, row) in rows.iter_mut().enumerate() {
                    row[i] = 0;
                }
                CostMatrix::from_rows(rows).unwrap()
            },
        )
    })
}

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut seen = vec![false; n];
    order.len() == n
        && order.iter().all(|&v| v < n && !std::mem::replace(&mut seen[v], true))
}

proptest! {
    #[test]
    fn held_karp_matches_exhaustive_search(
        matrix in matrix_strategy(6),
        s in 0usize..6,
        e in 0usize..6,
    ) {
        let n = matrix.len();
        let (start, end) = (s % n, e % n);
        prop_assume!(start != end || n == 1);

        let dp = held_karp::solve(&matrix, start, end).expect("always feasible");

        let mut slots = vec![None; n];
        slots[0] = Some(start);
        slots[n - 1] = Some(end);
        let brute = exhaustive::solve(&matrix, &slots, &[]).expect("always feasible");

        prop_assert_eq!(dp.cost, brute.cost);
        prop_assert_eq!(dp.cost, matrix.path_cost(&dp.order));
        prop_assert!(is_permutation(&dp.order, n));
        prop_assert_eq!(dp.order[0], start);
        prop_assert_eq!(dp.order[n - 1], end);
    }

    #[test]
    fn solved_routes_respect_every_constraint(
        matrix in matrix_strategy(6),
        raw_prec in proptest::collection::vec((0usize..6, 0usize..6), 0..4),
        pin in proptest::option::of((0usize..6, 0usize..6)),
    ) {
        let n = matrix.len();
        // Forward-only precedence so a solution exists whenever pins allow.
        let precedence: Vec<(usize, usize)> = raw_prec
            .into_iter()
            .map(|(a, b)| (a % n, b % n))
            .filter(|(a, b)| a < b)
            .collect();
        let mut fixed = vec![None; n];
        if let Some((slot, v)) = pin {
            fixed[slot % n] = Some(v % n);
        }
        let constraints = RouteConstraints { fixed: fixed.clone(), precedence: precedence.clone(), ..RouteConstraints::default() };

        if let Some(route) = solve(&matrix, &constraints) {
            prop_assert!(is_permutation(&route.order, n));
            prop_assert_eq!(route.cost, matrix.path_cost(&route.order));
            let pos = |v: usize| route.order.iter().position(|&x| x == v).unwrap();
            for (a, b) in precedence {
                prop_assert!(pos(a) < pos(b));
            }
            for (slot, v) in fixed.iter().enumerate() {
                if let Some(v) = v {
                    prop_assert_eq!(route.order[slot], *v);
                }
            }
        } else {
            // Only a pin can make forward-only precedence infeasible.
            prop_assert!(fixed.iter().any(Option::is_some));
        }
    }

    #[test]
    fn unconstrained_route_is_no_worse_than_identity(matrix in matrix_strategy(6)) {
        let n = matrix.len();
        let identity: Vec<usize> = (0..n).collect();
        let route = solve(&matrix, &RouteConstraints::default()).expect("always feasible");
        prop_assert!(route.cost <= matrix.path_cost(&identity));
    }
}

//! C5: nearest-neighbour incumbent producer (spec §4.5).

use crate::graph::CostGraph;

/// Runs nearest-neighbour from every start city in index order and returns
/// the first feasible tour found, together with its cost. Ties in the
/// "nearest" choice favour the lowest-index city, making the whole
/// procedure deterministic (spec §4.5).
///
/// Returns `None` if no start city yields a tour that can close back to
/// its origin (the all-infinite incumbent sentinel, spec §4.6).
pub fn nearest_neighbour_tour(graph: &impl CostGraph) -> Option<(Vec<usize>, u64)> {
    let n = graph.n();
    for start in 0..n {
        if let Some(route) = nearest_neighbour_from(graph, start) {
            if let Some(cost) = graph.route_cost(&route) {
                return Some((route, cost));
            }
        }
    }
    None
}

/// Builds one nearest-neighbour route starting from `start`, or `None` if
/// some step has no finite continuation (spec §4.5 "abort this start").
fn nearest_neighbour_from(graph: &impl CostGraph, start: usize) -> Option<Vec<usize>> {
    let n = graph.n();
    let mut visited = vec![false; n];
    visited[start] = true;
    let mut route = Vec::with_capacity(n);
    route.push(start);
    let mut cur = start;

    for _ in 0..n - 1 {
        let mut best: Option<(usize, u64)> = None;
        for j in 0..n {
            if visited[j] {
                continue;
            }
            if let Some(cost) = graph.cost(cur, j).finite() {
                if best.map_or(true, |(_, b)| cost < b) {
                    best = Some((j, cost));
                }
            }
        }
        let (next, _) = best?;
        visited[next] = true;
        route.push(next);
        cur = next;
    }

    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Cost;
    use crate::graph::DenseCostGraph;

    fn s1_graph() -> DenseCostGraph {
        let rows: [[u64; 4]; 4] = [[0, 7, 3, 12], [3, 0, 6, 14], [5, 8, 0, 6], [9, 3, 5, 0]];
        DenseCostGraph::new(4, |i, j| {
            if i == j {
                Cost::Infinite
            } else {
                Cost::Finite(rows[i][j])
            }
        })
        .unwrap()
    }

    #[test]
    fn finds_a_feasible_tour_on_a_fully_connected_graph() {
        let graph = s1_graph();
        let (route, cost) = nearest_neighbour_tour(&graph).unwrap();
        assert_eq!(route.len(), 4);
        assert_eq!(graph.route_cost(&route), Some(cost));
    }

    #[test]
    fn is_deterministic_across_repeated_runs() {
        let graph = s1_graph();
        let first = nearest_neighbour_tour(&graph).unwrap();
        let second = nearest_neighbour_tour(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn aborts_a_start_with_no_finite_continuation_and_tries_the_next() {
        // City 0 is a dead end once it reaches city 1 (no further finite
        // edges out of 1); city 0's own start must therefore be skipped
        // in favour of a later start that completes.
        let graph = DenseCostGraph::from_matrix(vec![
            vec![Cost::Infinite, Cost::Finite(1), Cost::Infinite],
            vec![Cost::Infinite, Cost::Infinite, Cost::Infinite],
            vec![Cost::Finite(1), Cost::Finite(1), Cost::Infinite],
        ])
        .unwrap();
        let result = nearest_neighbour_tour(&graph);
        assert!(result.is_none() || result.unwrap().0[0] != 0);
    }

    #[test]
    fn returns_none_when_every_start_fails_to_close() {
        // A path graph with no edges back to any start: every nearest
        // neighbour search dead-ends or cannot close the tour.
        let graph = DenseCostGraph::from_matrix(vec![
            vec![Cost::Infinite, Cost::Finite(1), Cost::Infinite],
            vec![Cost::Infinite, Cost::Infinite, Cost::Finite(1)],
            vec![Cost::Infinite, Cost::Infinite, Cost::Infinite],
        ])
        .unwrap();
        assert_eq!(nearest_neighbour_tour(&graph), None);
    }
}

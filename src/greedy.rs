//! Auxiliary entry point: greedy tour via the incumbent producer (spec
//! §6.2 `greedy`).

use std::time::Instant;

use crate::graph::CostGraph;
use crate::incumbent::nearest_neighbour_tour;
use crate::results::Results;

/// Wraps [`nearest_neighbour_tour`](crate::incumbent::nearest_neighbour_tour)
/// in the shared `Results` shape. `max`, `total`, and `pruned` are left
/// `None`: this is C5 run standalone, not the B&B driver (spec §6.2).
pub fn greedy(graph: &impl CostGraph) -> Results {
    let start = Instant::now();
    match nearest_neighbour_tour(graph) {
        Some((route, cost)) => Results {
            cost: Some(cost),
            time_millis: start.elapsed().as_millis(),
            count: 1,
            soln: Some(route),
            max_frontier: None,
            total_created: None,
            pruned: None,
        },
        None => Results::infeasible(start.elapsed().as_millis()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Cost;
    use crate::graph::DenseCostGraph;

    #[test]
    fn wraps_the_incumbent_producer_with_a_count_of_one() {
        let rows: [[u64; 4]; 4] = [[0, 7, 3, 12], [3, 0, 6, 14], [5, 8, 0, 6], [9, 3, 5, 0]];
        let graph = DenseCostGraph::new(4, |i, j| {
            if i == j {
                Cost::Infinite
            } else {
                Cost::Finite(rows[i][j])
            }
        })
        .unwrap();
        let results = greedy(&graph);
        assert_eq!(results.count, 1);
        assert!(results.cost.is_some());
        assert_eq!(results.max_frontier, None);
    }

    #[test]
    fn reports_infeasible_when_no_tour_closes() {
        let graph = DenseCostGraph::from_matrix(vec![
            vec![Cost::Infinite, Cost::Finite(1), Cost::Infinite],
            vec![Cost::Infinite, Cost::Infinite, Cost::Finite(1)],
            vec![Cost::Infinite, Cost::Infinite, Cost::Infinite],
        ])
        .unwrap();
        let results = greedy(&graph);
        assert_eq!(results.cost, None);
        assert_eq!(results.count, 0);
    }
}

//! Auxiliary entry point: random-permutation feasibility search (spec
//! §6.2 `defaultRandomTour`), ported from the reference `defaultRandomTour`.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::graph::CostGraph;
use crate::results::Results;

/// Repeatedly shuffles a permutation of `1..n` (city `0` is a fixed start)
/// until one closes into a finite-cost tour or `time_allowance_seconds`
/// elapses. `max`, `total`, and `pruned` are left `None`, matching the
/// reference's ad hoc feasibility search rather than the B&B driver (spec
/// §6.2).
pub fn default_random_tour(graph: &impl CostGraph, time_allowance_seconds: f64) -> Results {
    let start = Instant::now();
    let deadline = Duration::from_secs_f64(time_allowance_seconds.max(0.0));
    let n = graph.n();

    let mut rng = thread_rng();
    let mut rest: Vec<usize> = (1..n).collect();

    loop {
        rest.shuffle(&mut rng);
        let mut route = Vec::with_capacity(n);
        route.push(0);
        route.extend_from_slice(&rest);

        if let Some(cost) = graph.route_cost(&route) {
            return Results {
                cost: Some(cost),
                time_millis: start.elapsed().as_millis(),
                count: 1,
                soln: Some(route),
                max_frontier: None,
                total_created: None,
                pruned: None,
            };
        }

        if start.elapsed() >= deadline {
            return Results::infeasible(start.elapsed().as_millis());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Cost;
    use crate::graph::DenseCostGraph;

    #[test]
    fn finds_a_feasible_tour_on_a_fully_connected_graph() {
        let graph = DenseCostGraph::new(5, |i, j| {
            if i == j {
                Cost::Infinite
            } else {
                Cost::Finite((i + j) as u64 + 1)
            }
        })
        .unwrap();
        let results = default_random_tour(&graph, 2.0);
        assert!(results.cost.is_some());
        let route = results.soln.unwrap();
        assert_eq!(route[0], 0);
        assert_eq!(graph.route_cost(&route), results.cost);
    }

    #[test]
    fn reports_infeasible_sentinel_once_the_deadline_elapses() {
        // Every tour closing back through city 1 is broken: the route can
        // never close, so the deadline must fire and report infeasible.
        let graph = DenseCostGraph::from_matrix(vec![
            vec![Cost::Infinite, Cost::Finite(1), Cost::Finite(1)],
            vec![Cost::Infinite, Cost::Infinite, Cost::Finite(1)],
            vec![Cost::Infinite, Cost::Finite(1), Cost::Infinite],
        ])
        .unwrap();
        let results = default_random_tour(&graph, 0.05);
        assert_eq!(results.cost, None);
        assert_eq!(results.soln, None);
    }
}

//! C6: the branch-and-bound driver (spec §4.6) and the solver entry
//! points that share its `Results` shape (spec §6.1, §6.2).

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::cost::Cost;
use crate::error::SolverError;
use crate::frontier::Frontier;
use crate::graph::CostGraph;
use crate::incumbent::nearest_neighbour_tour;
use crate::matrix::Matrix;
use crate::node::SearchNode;
use crate::results::Results;

/// Running counters kept by [`Solver::branch_and_bound`] (spec §4.6
/// "Statistics"). Lives only on the driver's stack frame, never as
/// process-global state (spec §9 "Global node counter").
#[derive(Debug, Default, Clone, Copy)]
struct Stats {
    created: usize,
    pruned: usize,
    solutions: usize,
    max_frontier: usize,
}

/// A solver bound to one immutable cost graph (spec §6.1 `setup`).
pub struct Solver<G: CostGraph> {
    graph: G,
}

impl<G: CostGraph> Solver<G> {
    /// Binds a solver to `graph`. Rejects graphs with fewer than two
    /// cities (spec §7 "Degenerate input"); `n == 2` is accepted.
    pub fn setup(graph: G) -> Result<Self, SolverError> {
        if graph.n() < 2 {
            return Err(SolverError::DegenerateInstance { n: graph.n() });
        }
        Ok(Self { graph })
    }

    /// The bound cost graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Runs the branch-and-bound search for at most `time_allowance_seconds`
    /// of wall-clock time (spec §4.6). Always returns a `Results`, never an
    /// error: infeasibility and deadline exhaustion are outcomes, not
    /// failures (spec §7).
    pub fn branch_and_bound(&self, time_allowance_seconds: f64) -> Results {
        let start = Instant::now();
        let deadline = Duration::from_secs_f64(time_allowance_seconds.max(0.0));
        let n = self.graph.n();

        let seed = nearest_neighbour_tour(&self.graph);
        let mut incumbent_cost = seed.as_ref().map(|(_, cost)| *cost);
        let mut incumbent_route = seed.map(|(route, _)| route);
        info!(
            "seeded incumbent from nearest-neighbour: cost={:?}",
            incumbent_cost
        );

        let root_matrix = Matrix::from_graph(&self.graph);
        let root = SearchNode::root(root_matrix);

        let mut frontier = Frontier::new();
        frontier.push(root);

        let mut stats = Stats::default();
        // The root itself is a created node, not just its children; counting
        // it keeps `created >= pruned + solutions` true even when the root
        // is pop-pruned before any child is ever expanded (spec §8 property 6).
        stats.created = 1;

        while !frontier.is_empty() && start.elapsed() < deadline {
            stats.max_frontier = stats.max_frontier.max(frontier.len());
            let node = frontier.pop().expect("checked non-empty above");

            let incumbent_bound = incumbent_cost.map_or(Cost::Infinite, Cost::Finite);
            if node.bound() >= incumbent_bound {
                stats.pruned += 1;
                continue;
            }

            for child in node.expand() {
                stats.created += 1;
                let closes = child
                    .is_complete_tour(n)
                    .then(|| self.graph.cost(child.last_city(), 0))
                    .map(Cost::is_finite)
                    .unwrap_or(false);

                if closes {
                    let candidate_cost = self
                        .graph
                        .route_cost(child.path())
                        .expect("closing edge checked finite above");
                    let improves = incumbent_cost.is_none_or(|best| candidate_cost < best);
                    if improves {
                        incumbent_cost = Some(candidate_cost);
                        incumbent_route = Some(child.path().to_vec());
                        stats.solutions += 1;
                        debug!("improved incumbent: cost={candidate_cost}");
                    }
                    // A non-improving complete tour is neither pushed nor
                    // pruned (spec §4.6): it simply falls away.
                } else {
                    let pushable = match child.bound() {
                        Cost::Finite(b) => incumbent_cost.is_none_or(|best| b < best),
                        Cost::Infinite => false,
                    };
                    if pushable {
                        frontier.push(child);
                    } else {
                        stats.pruned += 1;
                    }
                }
            }
        }

        Results {
            cost: incumbent_cost,
            time_millis: start.elapsed().as_millis(),
            count: stats.solutions,
            soln: incumbent_route,
            max_frontier: Some(stats.max_frontier),
            total_created: Some(stats.created),
            pruned: Some(stats.pruned),
        }
    }
}

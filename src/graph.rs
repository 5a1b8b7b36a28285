//! C1: cost graph adapter (spec §4.1).

use crate::cost::Cost;
use crate::error::SolverError;

/// A read-only, asymmetric cost graph over `0..n` city indices (spec §3
/// "City", §6.3 "Scenario contract").
///
/// Implementations must guarantee `cost(i, i) == Cost::Infinite`; the
/// `Cost` domain has no representation for negative values, so
/// non-negativity is structural rather than a runtime check. The edge set
/// is fixed for the lifetime of the adapter.
pub trait CostGraph {
    /// Number of cities, always `>= 2` for a graph bound to a [`Solver`](crate::driver::Solver).
    fn n(&self) -> usize;

    /// Cost of the directed edge `i -> j`.
    fn cost(&self, i: usize, j: usize) -> Cost;

    /// Evaluates a route by summing consecutive edges and closing back to
    /// the first city, using this graph's costs rather than any reduced
    /// search-node matrix (spec §4.3, §9 "completeness after infinity
    /// masking"). Returns `None` if any traversed edge, including the
    /// closing edge, is infinite. Ported from
    /// `TSPSolution.enumerateEdges` in the original implementation.
    fn route_cost(&self, route: &[usize]) -> Option<u64> {
        if route.len() < 2 {
            return Some(0);
        }
        let mut total = 0u64;
        for pair in route.windows(2) {
            total = total.checked_add(self.cost(pair[0], pair[1]).finite()?)?;
        }
        let closing = self.cost(*route.last().expect("checked len >= 2"), route[0]);
        total.checked_add(closing.finite()?)
    }
}

/// A dense `n x n` cost matrix populated directly from an asymmetric cost
/// function. This is the concrete adapter the driver, CLI, and tests use;
/// nothing else in the core depends on its representation.
#[derive(Debug, Clone)]
pub struct DenseCostGraph {
    n: usize,
    costs: Vec<Cost>,
}

impl DenseCostGraph {
    /// Builds the graph by calling `cost_fn(i, j)` once for every ordered
    /// pair `i != j`; self-edges are forced to infinite regardless of what
    /// `cost_fn` reports (spec §4.1 "self-edges are ∞").
    pub fn new(n: usize, mut cost_fn: impl FnMut(usize, usize) -> Cost) -> Result<Self, SolverError> {
        if n < 2 {
            return Err(SolverError::DegenerateInstance { n });
        }
        let mut costs = vec![Cost::Infinite; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    costs[i * n + j] = cost_fn(i, j);
                }
            }
        }
        Ok(Self { n, costs })
    }

    /// Builds directly from a pre-populated row-major matrix; rejects a
    /// finite self-edge rather than silently overwriting it, since that
    /// usually indicates a caller bug.
    pub fn from_matrix(rows: Vec<Vec<Cost>>) -> Result<Self, SolverError> {
        let n = rows.len();
        if n < 2 {
            return Err(SolverError::DegenerateInstance { n });
        }
        let mut costs = vec![Cost::Infinite; n * n];
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SolverError::MalformedMatrix {
                    row: i,
                    found: row.len(),
                    expected: n,
                });
            }
            for (j, c) in row.into_iter().enumerate() {
                if i == j && c.is_finite() {
                    return Err(SolverError::SelfEdgeFinite { i });
                }
                costs[i * n + j] = c;
            }
        }
        Ok(Self { n, costs })
    }
}

impl CostGraph for DenseCostGraph {
    fn n(&self) -> usize {
        self.n
    }

    fn cost(&self, i: usize, j: usize) -> Cost {
        self.costs[i * self.n + j]
    }
}

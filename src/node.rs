//! C3: search node, a partial path, its residual matrix, and its lower
//! bound (spec §3 "Search node", §4.3).

use crate::cost::Cost;
use crate::matrix::Matrix;

/// A node in the branch-and-bound search tree.
///
/// Nodes are owned exclusively by whatever holds them (the frontier, or a
/// local variable during root expansion) and are dropped once popped and
/// expanded, per spec §3 "Lifecycle".
#[derive(Debug, Clone)]
pub struct SearchNode {
    matrix: Matrix,
    bound: Cost,
    path: Vec<usize>,
}

impl SearchNode {
    /// Builds the root node from the initial cost matrix: the root is
    /// reduced once, and its bound is exactly the reduction's `δ` (spec §3
    /// invariant 4).
    pub fn root(mut matrix: Matrix) -> Self {
        let delta = matrix.reduce();
        Self {
            matrix,
            bound: delta,
            path: vec![0],
        }
    }

    /// The lower bound `B_N` on the cost of any tour extending this node's
    /// partial path.
    pub fn bound(&self) -> Cost {
        self.bound
    }

    /// `level_N`: the length of the partial path minus one.
    pub fn level(&self) -> usize {
        self.path.len() - 1
    }

    /// The partial path `[p0, p1, ..., p_k]` visited so far.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// The last city visited, `p_k`.
    pub fn last_city(&self) -> usize {
        *self.path.last().expect("path always has at least the origin")
    }

    /// `true` once every city has been visited, i.e. `level_N = n - 1`.
    pub fn is_complete_tour(&self, n: usize) -> bool {
        self.level() == n - 1
    }

    /// Generates one child per city not yet on the path (spec §4.3
    /// "Expansion"). Each child's matrix is an independent copy: row
    /// `p_k` and column `j` are masked to infinite, the premature-closing
    /// edge `(j, p0)` is masked, and the result is reduced again. The
    /// child's bound is `B_N + cost(p_k, j) + δ`, computed with saturating
    /// arithmetic so infinity propagates (spec §9 "Open question - root
    /// bound contribution").
    pub fn expand(&self) -> Vec<SearchNode> {
        let n = self.matrix.n();
        let i = self.last_city();
        let origin = self.path[0];

        let mut children = Vec::with_capacity(n - self.path.len());
        for j in 0..n {
            if self.path.contains(&j) {
                continue;
            }

            let edge_cost = self.matrix.get(i, j);

            let mut child_matrix = self.matrix.clone();
            child_matrix.infinite_row(i);
            child_matrix.infinite_col(j);
            child_matrix.set(j, origin, Cost::Infinite);

            let delta = child_matrix.reduce();
            let bound = self.bound.saturating_add(edge_cost).saturating_add(delta);

            let mut path = self.path.clone();
            path.push(j);

            children.push(SearchNode {
                matrix: child_matrix,
                bound,
                path,
            });
        }
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn root_bound_equals_initial_reduction_delta() {
        let matrix = Matrix::from_graph(&s1_graph());
        let root = SearchNode::root(matrix);
        assert_eq!(root.bound(), Cost::Finite(15));
        assert_eq!(root.level(), 0);
        assert_eq!(root.path(), &[0]);
    }

    #[test]
    fn children_cover_every_unvisited_city_exactly_once() {
        let matrix = Matrix::from_graph(&s1_graph());
        let root = SearchNode::root(matrix);
        let children = root.expand();
        let mut last_cities: Vec<usize> = children.iter().map(|c| c.last_city()).collect();
        last_cities.sort_unstable();
        assert_eq!(last_cities, vec![1, 2, 3]);
        for child in &children {
            assert_eq!(child.level(), 1);
            assert_eq!(child.path()[0], 0);
        }
    }

    #[test]
    fn child_bound_never_decreases_relative_to_parent() {
        let matrix = Matrix::from_graph(&s1_graph());
        let root = SearchNode::root(matrix);
        for child in root.expand() {
            assert!(child.bound() >= root.bound());
        }
    }

    #[test]
    fn expansion_masks_the_premature_closing_edge() {
        let matrix = Matrix::from_graph(&s1_graph());
        let root = SearchNode::root(matrix);
        let child = root
            .expand()
            .into_iter()
            .find(|c| c.last_city() == 1)
            .unwrap();
        // city 1 -> origin (0) must be masked so the tour cannot close early.
        assert_eq!(child.matrix.get(1, 0), Cost::Infinite);
    }
}

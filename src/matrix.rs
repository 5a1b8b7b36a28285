//! C2: reduced-matrix engine (spec §4.2).

use crate::cost::Cost;
use crate::graph::CostGraph;

/// A mutable `n x n` matrix of [`Cost`] entries: the residual matrix
/// carried by each search node (spec §3 "Search node").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    entries: Vec<Cost>,
}

impl Matrix {
    /// Copies every entry of `graph` into a fresh matrix (spec §4.1
    /// "Produces the initial n×n matrix by direct population").
    pub fn from_graph(graph: &impl CostGraph) -> Self {
        let n = graph.n();
        let mut entries = vec![Cost::Infinite; n * n];
        for i in 0..n {
            for j in 0..n {
                entries[i * n + j] = graph.cost(i, j);
            }
        }
        Self { n, entries }
    }

    /// The matrix's dimension.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The entry at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Cost {
        self.entries[i * self.n + j]
    }

    /// Overwrites the entry at `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: Cost) {
        self.entries[i * self.n + j] = value;
    }

    /// Sets every entry of row `i` to infinite.
    pub fn infinite_row(&mut self, i: usize) {
        for j in 0..self.n {
            self.set(i, j, Cost::Infinite);
        }
    }

    /// Sets every entry of column `j` to infinite.
    pub fn infinite_col(&mut self, j: usize) {
        for i in 0..self.n {
            self.set(i, j, Cost::Infinite);
        }
    }

    /// Row/column reduction (spec §4.2). Mutates `self` into the reduced
    /// matrix and returns the additive bound contribution `δ`.
    ///
    /// Postcondition: every row and every column either contains a zero
    /// or is entirely infinite.
    pub fn reduce(&mut self) -> Cost {
        let n = self.n;
        let mut delta = Cost::ZERO;

        for i in 0..n {
            let row_min = (0..n).map(|j| self.get(i, j)).min().unwrap_or(Cost::Infinite);
            if let Cost::Finite(m) = row_min {
                if m != 0 {
                    for j in 0..n {
                        let v = self.get(i, j).saturating_sub(m);
                        self.set(i, j, v);
                    }
                    delta = delta.saturating_add(Cost::Finite(m));
                }
            }
        }

        for j in 0..n {
            let col_min = (0..n).map(|i| self.get(i, j)).min().unwrap_or(Cost::Infinite);
            if let Cost::Finite(m) = col_min {
                if m != 0 {
                    for i in 0..n {
                        let v = self.get(i, j).saturating_sub(m);
                        self.set(i, j, v);
                    }
                    delta = delta.saturating_add(Cost::Finite(m));
                }
            }
        }

        delta
    }
}

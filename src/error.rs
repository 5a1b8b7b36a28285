//! Error taxonomy for conditions that are genuine rejections rather than
//! `Results` fields (spec §7 "Error Handling Design"). Infeasibility at
//! start, deadline exceeded, and empty-frontier-without-improvement are
//! deliberately *not* represented here: they surface through
//! [`crate::results::Results`] exactly as spec §7 describes.

use thiserror::Error;

/// Errors raised while building a cost graph or binding a solver to one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// `setup` rejects instances with fewer than two cities (spec §7
    /// "Degenerate input").
    #[error("degenerate instance: n = {n}, at least 2 cities are required")]
    DegenerateInstance {
        /// The rejected city count.
        n: usize,
    },

    /// A self-edge (`i == j`) was reported as finite; spec §4.1 requires
    /// `cost(i, i) = ∞`.
    #[error("self-edge at city {i} must be infinite")]
    SelfEdgeFinite {
        /// The offending city index.
        i: usize,
    },

    /// A scenario contributed no cities at all.
    #[error("scenario contains no cities")]
    EmptyScenario,

    /// A row of an explicitly supplied cost matrix had the wrong length.
    #[error("malformed cost matrix: row {row} has {found} entries, expected {expected}")]
    MalformedMatrix {
        /// The offending row index.
        row: usize,
        /// The row's actual length.
        found: usize,
        /// The matrix's declared dimension.
        expected: usize,
    },

    /// Failure to read or parse a scenario document.
    #[error("failed to load scenario: {0}")]
    ScenarioIo(String),
}

//! C7: the uniform result record shared by every solver entry point
//! (spec §6.1, §6.2).

use std::fmt;

use serde::Serialize;

/// The outcome of a solve attempt, whichever entry point produced it.
///
/// `max`, `total`, and `pruned` are only populated by the branch-and-bound
/// driver; `defaultRandomTour` and `greedy` leave them `None` (spec §6.2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Results {
    /// Incumbent tour cost, or `None` if no feasible tour was found.
    pub cost: Option<u64>,
    /// Wall-clock time elapsed, in milliseconds.
    pub time_millis: u128,
    /// Number of incumbent improvements recorded.
    pub count: usize,
    /// The incumbent tour, an ordered list of city indices, if any.
    pub soln: Option<Vec<usize>>,
    /// Maximum frontier size observed, if applicable.
    pub max_frontier: Option<usize>,
    /// Total nodes created, if applicable.
    pub total_created: Option<usize>,
    /// Total nodes pruned, if applicable.
    pub pruned: Option<usize>,
}

impl Results {
    /// An empty result: no tour found, zero elapsed time, zero improvements.
    pub fn infeasible(time_millis: u128) -> Self {
        Self {
            cost: None,
            time_millis,
            count: 0,
            soln: None,
            max_frontier: None,
            total_created: None,
            pruned: None,
        }
    }
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cost {
            Some(cost) => write!(f, "cost={cost} time={}ms count={}", self.time_millis, self.count)?,
            None => write!(f, "cost=inf time={}ms count={}", self.time_millis, self.count)?,
        }
        if let Some(max) = self.max_frontier {
            write!(f, " max={max}")?;
        }
        if let Some(total) = self.total_created {
            write!(f, " total={total}")?;
        }
        if let Some(pruned) = self.pruned {
            write!(f, " pruned={pruned}")?;
        }
        if let Some(soln) = &self.soln {
            write!(f, " soln={soln:?}")?;
        }
        Ok(())
    }
}

//! Ambient configuration: JSON scenario documents consumed by the CLI
//! (spec §6.3 "Scenario contract"). This module is plumbing around the
//! core, not part of it; nothing in `graph`, `matrix`, `node`,
//! `frontier`, or `driver` depends on it.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cost::Cost;
use crate::error::SolverError;
use crate::graph::DenseCostGraph;

/// Portion of a scenario's edges removed in Hard mode, ported from the
/// reference's `HARD_MODE_FRACTION_TO_REMOVE`.
const HARD_MODE_FRACTION_TO_REMOVE: f64 = 0.20;

/// Scale applied to Euclidean distance before rounding up to an integer
/// cost, ported from the reference's `City.MAP_SCALE`.
const MAP_SCALE: f64 = 1000.0;

/// Scenario difficulty, controlling asymmetry (elevation) and edge
/// thinning (spec §6.3, ported from `TSPClasses.Scenario`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// No elevation term; every edge exists.
    Easy,
    /// Elevation-biased asymmetric costs; every edge exists.
    Normal,
    /// Elevation-biased asymmetric costs with ~20% of edges removed,
    /// using a fresh random seed each time.
    Hard,
    /// Like `Hard`, but seeded for reproducible edge removal.
    HardDeterministic,
}

/// One city's planar coordinates, as supplied in a scenario document.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CityInput {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// A scenario as read from JSON: city coordinates plus the difficulty
/// that governs how costs and edge existence are derived from them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScenarioDocument {
    /// The scenario's difficulty.
    pub difficulty: Difficulty,
    /// Seed for `HardDeterministic`; ignored otherwise.
    #[serde(default)]
    pub seed: Option<u64>,
    /// The scenario's cities, in index order.
    pub cities: Vec<CityInput>,
}

impl ScenarioDocument {
    /// Reads and parses a scenario document from `path`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SolverError> {
        let text = fs::read_to_string(path).map_err(|e| SolverError::ScenarioIo(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| SolverError::ScenarioIo(e.to_string()))
    }
}

/// Builds a [`DenseCostGraph`] from a scenario document, applying
/// elevation bias and (in Hard modes) edge thinning exactly as the
/// reference `Scenario`/`City` classes do.
pub fn build_graph(doc: &ScenarioDocument) -> Result<DenseCostGraph, SolverError> {
    if doc.cities.is_empty() {
        return Err(SolverError::EmptyScenario);
    }

    match doc.difficulty {
        Difficulty::HardDeterministic => {
            let mut rng = StdRng::seed_from_u64(doc.seed.unwrap_or(0));
            build_with_rng(doc, &mut rng)
        }
        _ => {
            let mut rng = thread_rng();
            build_with_rng(doc, &mut rng)
        }
    }
}

fn build_with_rng(doc: &ScenarioDocument, rng: &mut impl Rng) -> Result<DenseCostGraph, SolverError> {
    let n = doc.cities.len();

    let elevations: Vec<f64> = match doc.difficulty {
        Difficulty::Easy => vec![0.0; n],
        _ => (0..n).map(|_| rng.gen_range(0.0..1.0)).collect(),
    };

    let edge_exists = match doc.difficulty {
        Difficulty::Hard | Difficulty::HardDeterministic => thin_edges(n, rng),
        _ => vec![true; n * n],
    };

    let cities = &doc.cities;
    let difficulty = doc.difficulty;
    DenseCostGraph::new(n, move |i, j| {
        if !edge_exists[i * n + j] {
            return Cost::Infinite;
        }
        let dx = cities[j].x - cities[i].x;
        let dy = cities[j].y - cities[i].y;
        let mut cost = (dx * dx + dy * dy).sqrt();
        if difficulty != Difficulty::Easy {
            cost += elevations[j] - elevations[i];
            if cost < 0.0 {
                cost = 0.0;
            }
        }
        Cost::Finite((cost * MAP_SCALE).ceil() as u64)
    })
}

/// Removes roughly `HARD_MODE_FRACTION_TO_REMOVE` of the `n*(n-1)` directed
/// edges from a complete graph, while preserving one Hamiltonian cycle
/// (`route_keep`) so a tour always remains feasible. Ported from the
/// reference `Scenario.thinEdges`.
fn thin_edges(n: usize, rng: &mut impl Rng) -> Vec<bool> {
    let mut edge_exists = vec![true; n * n];
    for i in 0..n {
        edge_exists[i * n + i] = false;
    }

    let edge_count = n * (n - 1);
    let num_to_remove = (HARD_MODE_FRACTION_TO_REMOVE * edge_count as f64).floor() as usize;

    let mut route_keep: Vec<usize> = (0..n).collect();
    route_keep.shuffle(rng);

    let mut can_delete = edge_exists.clone();
    for i in 0..n {
        let a = route_keep[i];
        let b = route_keep[(i + 1) % n];
        can_delete[a * n + b] = false;
    }

    let mut removed = 0;
    while removed < num_to_remove {
        let src = rng.gen_range(0..n);
        let dst = rng.gen_range(0..n);
        if edge_exists[src * n + dst] && can_delete[src * n + dst] {
            edge_exists[src * n + dst] = false;
            removed += 1;
        }
    }

    edge_exists
}

//! Command-line surface for the `tsp-solver` binary (spec §6, Section E of
//! the expanded scenario/CLI contract).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Branch-and-bound solver for the asymmetric Traveling Salesperson Problem.
#[derive(Debug, Parser)]
#[command(name = "tsp-solver", version, about)]
pub struct Cli {
    /// Which entry point to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The three solver entry points exposed by the CLI (spec §6.1, §6.2).
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the branch-and-bound driver.
    Solve(RunArgs),
    /// Run the random-permutation feasibility search.
    RandomTour(RunArgs),
    /// Run the nearest-neighbour incumbent producer.
    Greedy(RunArgs),
}

/// Arguments shared by every subcommand.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to a scenario JSON document.
    #[arg(long)]
    pub scenario: PathBuf,

    /// Wall-clock time allowance, in seconds. Ignored by `greedy`, which
    /// always runs to completion.
    #[arg(long, default_value_t = 60.0)]
    pub seconds: f64,

    /// Emit the result as JSON instead of a human-readable summary.
    #[arg(long)]
    pub json: bool,
}

//! `tsp-solver` CLI entry point: parses arguments, loads a scenario, and
//! dispatches to one of the three solver entry points (spec §6).

use std::process::ExitCode;

use clap::Parser;
use log::error;

use tsp_solver::cli::{Cli, Command, RunArgs};
use tsp_solver::driver::Solver;
use tsp_solver::greedy::greedy;
use tsp_solver::random_tour::default_random_tour;
use tsp_solver::results::Results;
use tsp_solver::scenario::{build_graph, ScenarioDocument};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Solve(args) => run(args, |graph, args| {
            Solver::setup(graph).map(|solver| solver.branch_and_bound(args.seconds))
        }),
        Command::RandomTour(args) => {
            run(args, |graph, args| Ok(default_random_tour(&graph, args.seconds)))
        }
        Command::Greedy(args) => run(args, |graph, _| Ok(greedy(&graph))),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    args: RunArgs,
    solve: impl FnOnce(tsp_solver::graph::DenseCostGraph, &RunArgs) -> Result<Results, tsp_solver::error::SolverError>,
) -> Result<(), String> {
    let doc = ScenarioDocument::load_from_path(&args.scenario).map_err(|e| e.to_string())?;
    let graph = build_graph(&doc).map_err(|e| e.to_string())?;
    let results = solve(graph, &args).map_err(|e| e.to_string())?;

    if args.json {
        let text = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        println!("{results}");
    }
    Ok(())
}

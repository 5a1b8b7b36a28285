#![forbid(missing_docs)]
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::module_name_repetitions)]
//! Branch-and-bound solver for the asymmetric Traveling Salesperson
//! Problem: a reduced-matrix lower bound, a `B/level`-ordered frontier,
//! and a nearest-neighbour incumbent producer, wired together by a
//! single-threaded, deadline-driven driver (see [`driver::Solver`]).

pub mod cli;
pub mod cost;
pub mod driver;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod greedy;
pub mod incumbent;
pub mod matrix;
pub mod node;
pub mod random_tour;
pub mod results;
pub mod scenario;

//! `ohmnet`: equivalent resistance of resistor networks by series/parallel reduction.
//!
//! The input is an undirected weighted graph (vertices are circuit nodes, edge weights are
//! resistances in ohms) plus two terminal vertices. The answer is computed topologically:
//! the graph is stripped down to the edges lying on some simple `start -> end` path, oriented
//! along those paths, and then collapsed by repeated parallel and series reduction. No
//! linear system is solved.
//!
//! Public invariants (must not drift):
//! - **Node order**: vertex ids are dense indices \(0..n-1\) as exposed by the input adapter
//!   (`petgraph::NodeIndex::index()` when using the `petgraph` feature).
//! - **Purity**: the input graph is never mutated; every query works on private copies.
//! - **Determinism**: identical inputs and configs give bit-identical results.
//! - **Scope**: only series-parallel networks are reduced correctly. Bridge-like topologies
//!   surface as an error (usually [`Error::BrokenChain`]) rather than a silently wrong value
//!   whenever the reduction can detect it.

pub mod digraph;
pub mod graph;
pub mod network;
pub mod parallel;
pub mod paths;
pub mod reachability;
pub mod resistance;
pub mod series;
pub mod strip;

pub use digraph::WeightedDigraph;
pub use graph::{AdjacencyMatrix, Graph, WeightedGraph};
pub use network::ResistorNetwork;
pub use parallel::{find_parallel_start, reduce_parallel, ShortCircuitPolicy};
pub use paths::simple_paths;
pub use reachability::has_path;
pub use resistance::{
    equivalent_resistance, equivalent_resistance_checked, equivalent_resistance_run,
    ReductionConfig, ReductionRun, NO_PATH,
};
pub use series::{end_of_serial, reduce_serial};
pub use strip::strip_circuit;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("no path between {start} and {end}")]
    NoPath { start: usize, end: usize },
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),
    #[error("self-loop on vertex {0}")]
    SelfLoop(usize),
    #[error("invalid resistance {ohms} between {u} and {v}")]
    InvalidResistance { u: usize, v: usize, ohms: f64 },
    #[error("matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("series chain broken at vertex {vertex} (not a series-parallel network?)")]
    BrokenChain { vertex: usize },
    #[error("parallel reduction at vertex {vertex} removed no edges")]
    NoProgress { vertex: usize },
    #[error("zero-resistance branch {from} -> {to} in parallel group")]
    ZeroResistanceBranch { from: usize, to: usize },
    #[error("path enumeration exceeded {limit} paths")]
    PathLimitExceeded { limit: usize },
    #[error("reduction exceeded {limit} iterations")]
    IterationLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

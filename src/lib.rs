//! Shortest paths - Dijkstra and Floyd-Warshall over weighted directed graphs
//!
//! Two independent engines over two graph encodings:
//!
//! * [`Dijkstra`] computes single-source shortest paths on an adjacency list
//!   ([`DirectedGraph`]) using an indexed binary min-heap with O(log V) decrease-key.
//! * [`FloydWarshall`] computes all-pairs shortest paths on a dense
//!   [`AdjacencyMatrix`], keeping a successor matrix for path reconstruction and
//!   detecting negative-weight cycles.
//!
//! Distances are tagged with [`Distance`] instead of a magic infinity constant, so adding
//! a weight to an unreachable distance can never overflow. Finite sums use checked
//! addition; a shortest distance that does not fit in the weight type is reported as
//! [`Error::DistanceOverflow`] rather than wrapping.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    dijkstra::Dijkstra,
    distance::Distance,
    floyd_warshall::FloydWarshall,
    path::{all_pairs_route, single_source_route, Route},
    AllPairsAlgorithm, AllPairsResult, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyMatrix, DirectedGraph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeEdge {
        from: usize,
        to: usize,
        weight: String,
    },

    #[error("Negative-weight cycle reachable from vertex {vertex}")]
    NegativeCycle { vertex: usize },

    #[error("Shortest distance from {from} to {to} does not fit in the weight type")]
    DistanceOverflow { from: usize, to: usize },

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Single-source shortest paths from `source` with Dijkstra's algorithm.
///
/// Fails with [`Error::NegativeEdge`] before doing any work if the graph contains an edge
/// with a negative weight.
pub fn shortest_paths_single_source<W: Weight>(
    graph: &DirectedGraph<W>,
    source: usize,
) -> Result<ShortestPathResult<W>> {
    Dijkstra::new().compute_shortest_paths(graph, source)
}

/// All-pairs shortest paths with Floyd-Warshall.
///
/// Fails with [`Error::NegativeCycle`] as soon as a vertex's distance to itself turns
/// negative; no partial table is returned.
pub fn shortest_paths_all_pairs<W: Weight>(matrix: &AdjacencyMatrix<W>) -> Result<AllPairsResult<W>> {
    FloydWarshall::new().compute_all_pairs(matrix)
}

/// Runs both engines on the same graph and returns the vertices whose distance from
/// `source` differs between them. An empty vector means they agree.
///
/// Graphs with negative edges fail with [`Error::NegativeEdge`] since Dijkstra cannot run.
pub fn cross_check<W: Weight>(graph: &DirectedGraph<W>, source: usize) -> Result<Vec<usize>> {
    let single = shortest_paths_single_source(graph, source)?;
    let all = shortest_paths_all_pairs(&AdjacencyMatrix::from(graph))?;
    let mismatches: Vec<usize> = single
        .distances
        .iter()
        .zip(all.distances_from(source))
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(v, _)| v)
        .collect();
    if !mismatches.is_empty() {
        log::warn!("engines disagree from source {} on vertices {:?}", source, mismatches);
    }
    Ok(mismatches)
}

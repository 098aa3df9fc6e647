use serde::Serialize;

use crate::algorithm::distance::Distance;
use crate::algorithm::path::{single_source_route, Route};
use crate::graph::{AdjacencyMatrix, Graph, Weight};
use crate::Result;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex
    pub distances: Vec<Distance<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Result of an all-pairs computation, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllPairsResult<W>
where
    W: Weight,
{
    pub vertex_count: usize,

    /// `distances[u * n + v]` is the shortest distance from `u` to `v`
    pub distances: Vec<Distance<W>>,

    /// `successors[u * n + v]` is the next hop from `u` toward `v`
    pub successors: Vec<Option<usize>>,
}

impl<W> AllPairsResult<W>
where
    W: Weight,
{
    pub fn distance(&self, from: usize, to: usize) -> Distance<W> {
        self.distances[from * self.vertex_count + to]
    }

    pub fn successor(&self, from: usize, to: usize) -> Option<usize> {
        self.successors[from * self.vertex_count + to]
    }

    /// Distances from `from` to every vertex
    pub fn distances_from(&self, from: usize) -> &[Distance<W>] {
        let n = self.vertex_count;
        &self.distances[from * n..(from + 1) * n]
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        match single_source_route(result, target) {
            Route::Itself => Some(vec![result.source]),
            Route::Through(path) => Some(path),
            Route::Unreachable => None,
        }
    }
}

/// Trait for all-pairs shortest path algorithms
pub trait AllPairsAlgorithm<W>
where
    W: Weight,
{
    /// Compute shortest paths between every ordered pair of vertices
    fn compute_all_pairs(&self, matrix: &AdjacencyMatrix<W>) -> Result<AllPairsResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

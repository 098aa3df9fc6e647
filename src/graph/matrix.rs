use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// Dense adjacency matrix stored row-major.
///
/// `None` marks a missing edge. The diagonal starts at zero; a negative self-loop replaces
/// it, since such a loop is already a negative cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<W>
where
    W: Weight,
{
    vertex_count: usize,
    weights: Vec<Option<W>>,
}

impl<W> AdjacencyMatrix<W>
where
    W: Weight,
{
    /// Creates a matrix with `vertices` vertices, zero diagonal and no edges
    pub fn new(vertices: usize) -> Self {
        let mut weights = vec![None; vertices * vertices];
        for v in 0..vertices {
            weights[v * vertices + v] = Some(W::zero());
        }
        AdjacencyMatrix {
            vertex_count: vertices,
            weights,
        }
    }

    /// Builds a matrix from `(from, to, weight)` triples, keeping the lightest parallel edge
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut matrix = Self::new(vertices);
        for (from, to, weight) in edges {
            if !matrix.set_edge(from, to, weight) {
                return Err(Error::InvalidEdge(from, to));
            }
        }
        Ok(matrix)
    }

    /// Records an edge, keeping the existing entry when it is lighter.
    /// Returns false if either endpoint is out of range.
    pub fn set_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if from >= self.vertex_count || to >= self.vertex_count {
            return false;
        }
        let slot = &mut self.weights[from * self.vertex_count + to];
        *slot = match *slot {
            Some(current) if current <= weight => Some(current),
            _ => Some(weight),
        };
        true
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of off-diagonal entries that hold an edge
    pub fn edge_count(&self) -> usize {
        let n = self.vertex_count;
        self.weights
            .iter()
            .enumerate()
            .filter(|(idx, weight)| weight.is_some() && idx / n != idx % n)
            .count()
    }

    /// Weight of the edge `from -> to`, or `None` if there is none
    pub fn weight(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.vertex_count || to >= self.vertex_count {
            return None;
        }
        self.weights[from * self.vertex_count + to]
    }

    pub(crate) fn as_slice(&self) -> &[Option<W>] {
        &self.weights
    }
}

impl<W> From<&DirectedGraph<W>> for AdjacencyMatrix<W>
where
    W: Weight,
{
    fn from(graph: &DirectedGraph<W>) -> Self {
        let mut matrix = AdjacencyMatrix::new(graph.vertex_count());
        for (from, to, weight) in graph.edges() {
            // endpoints of a DirectedGraph are always in range
            matrix.set_edge(from, to, weight);
        }
        matrix
    }
}

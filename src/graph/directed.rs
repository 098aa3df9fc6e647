use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Vertices are `0..vertex_count`. Parallel edges are kept as separate entries and
/// negative weights are accepted; algorithms that cannot handle them check for themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_capacity(vertices);
        for (from, to, weight) in edges {
            if !graph.add_edge(from, to, weight) {
                return Err(Error::InvalidEdge(from, to));
            }
        }
        Ok(graph)
    }

    /// Iterates over every edge as a `(from, to, weight)` triple
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }

    /// Outgoing edges of `vertex` as a slice; empty for unknown vertices
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        self.adjacency.get(vertex).map(|edges| edges.as_slice()).unwrap_or(&[])
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.neighbors(vertex).iter().copied())
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }
        self.adjacency[from].push((to, weight));
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.adjacency.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| *target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool {
        let mut updated = false;
        if let Some(outgoing) = self.adjacency.get_mut(from) {
            for edge in outgoing.iter_mut().filter(|(target, _)| *target == to) {
                edge.1 = weight;
                updated = true;
            }
        }
        updated
    }
}

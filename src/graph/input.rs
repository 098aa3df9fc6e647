//! Text input in the interactive edge-list format.
//!
//! ```text
//! 4            <- vertex count
//! 0 1 1        <- edges as `from to weight`
//! 1 2 2
//! 0 0 0        <- terminator (also accepted: end of input)
//! 0            <- optional source vertex
//! ```

use std::fmt::Display;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::graph::{AdjacencyMatrix, DirectedGraph, Weight};
use crate::{Error, Result};

/// A parsed edge list plus the optional source vertex that followed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeList<W>
where
    W: Weight,
{
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, W)>,
    pub source: Option<usize>,
}

impl<W> EdgeList<W>
where
    W: Weight,
{
    /// Adjacency-list form for Dijkstra
    pub fn to_directed_graph(&self) -> Result<DirectedGraph<W>> {
        DirectedGraph::from_edges(self.vertex_count, self.edges.iter().copied())
    }

    /// Adjacency-matrix form for Floyd-Warshall
    pub fn to_matrix(&self) -> Result<AdjacencyMatrix<W>> {
        AdjacencyMatrix::from_edges(self.vertex_count, self.edges.iter().copied())
    }
}

struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let inner = input
            .lines()
            .enumerate()
            .flat_map(|(idx, line)| line.split_whitespace().map(move |token| (idx + 1, token)));
        Tokens {
            inner: Box::new(inner),
            last_line: 1,
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        let item = self.inner.next();
        if let Some((line, _)) = item {
            self.last_line = line;
        }
        item
    }

    fn parse<T>(&mut self, what: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.next_token() {
            None => Ok(None),
            Some((line, token)) => token.parse::<T>().map(Some).map_err(|e| Error::Parse {
                line,
                message: format!("invalid {} '{}': {}", what, token, e),
            }),
        }
    }

    fn expect<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.parse(what)?.ok_or_else(|| Error::Parse {
            line: self.last_line,
            message: format!("expected {}, found end of input", what),
        })
    }
}

/// Parses the vertex count, the `0 0 0`-terminated edge triples and an optional source.
///
/// A triple whose first two fields are both zero ends the edge list, whatever its weight;
/// a bare `0 0` at the end of input ends it too.
pub fn parse_edge_list<W>(input: &str) -> Result<EdgeList<W>>
where
    W: Weight + FromStr,
    W::Err: Display,
{
    let mut tokens = Tokens::new(input);
    let vertex_count: usize = tokens.expect("vertex count")?;

    let mut edges = Vec::new();
    loop {
        let from: usize = match tokens.parse("edge source")? {
            Some(from) => from,
            None => break,
        };
        let to: usize = tokens.expect("edge target")?;
        if from == 0 && to == 0 {
            // the terminator's weight may be cut off by end of input
            tokens.parse::<W>("edge weight")?;
            break;
        }
        let weight: W = tokens.expect("edge weight")?;
        if from >= vertex_count || to >= vertex_count {
            return Err(Error::InvalidEdge(from, to));
        }
        edges.push((from, to, weight));
    }

    let source: Option<usize> = tokens.parse("source vertex")?;
    if let Some(source) = source {
        if source >= vertex_count {
            return Err(Error::InvalidVertex(source));
        }
    }

    debug!(
        "parsed edge list: {} vertices, {} edges, source {:?}",
        vertex_count,
        edges.len(),
        source
    );

    Ok(EdgeList {
        vertex_count,
        edges,
        source,
    })
}

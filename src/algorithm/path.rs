use std::fmt;

use log::warn;
use serde::Serialize;

use crate::algorithm::{AllPairsResult, ShortestPathResult};
use crate::graph::Weight;

/// Outcome of reconstructing a path between two vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "vertices")]
pub enum Route {
    /// Source and target are the same vertex
    Itself,
    /// No path exists
    Unreachable,
    /// Vertices from source to target, both included
    Through(Vec<usize>),
}

impl Route {
    pub fn vertices(&self) -> Option<&[usize]> {
        match self {
            Route::Through(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Itself => f.write_str("itself"),
            Route::Unreachable => f.write_str("infinity"),
            Route::Through(path) => {
                for (i, vertex) in path.iter().enumerate() {
                    if i > 0 {
                        f.write_str("->")?;
                    }
                    write!(f, "{}", vertex)?;
                }
                Ok(())
            }
        }
    }
}

/// Walks the predecessor chain from `target` back to the source.
pub fn single_source_route<W: Weight>(result: &ShortestPathResult<W>, target: usize) -> Route {
    let n = result.predecessors.len();
    if target >= n || !result.distances[target].is_finite() {
        return Route::Unreachable;
    }
    if target == result.source {
        return Route::Itself;
    }

    let mut path = vec![target];
    let mut current = target;
    while current != result.source {
        match result.predecessors[current] {
            Some(pred) if path.len() < n => {
                path.push(pred);
                current = pred;
            }
            Some(_) => {
                warn!("predecessor chain to {} is longer than the graph, likely a cycle", target);
                return Route::Unreachable;
            }
            None => {
                warn!("broken predecessor chain at vertex {} while tracing {}", current, target);
                return Route::Unreachable;
            }
        }
    }

    path.reverse();
    Route::Through(path)
}

/// Follows successor pointers from `from` until reaching `to`.
pub fn all_pairs_route<W: Weight>(result: &AllPairsResult<W>, from: usize, to: usize) -> Route {
    let n = result.vertex_count;
    if from >= n || to >= n {
        return Route::Unreachable;
    }
    if from == to {
        return Route::Itself;
    }
    if result.successor(from, to).is_none() {
        return Route::Unreachable;
    }

    let mut path = vec![from];
    let mut current = from;
    while current != to {
        match result.successor(current, to) {
            Some(next) if path.len() < n => {
                path.push(next);
                current = next;
            }
            Some(_) => {
                warn!("successor chain {} -> {} is longer than the graph, likely a cycle", from, to);
                return Route::Unreachable;
            }
            None => {
                warn!("broken successor chain at vertex {} while tracing {} -> {}", current, from, to);
                return Route::Unreachable;
            }
        }
    }

    Route::Through(path)
}

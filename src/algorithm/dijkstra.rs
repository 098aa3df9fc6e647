use log::{debug, trace, warn};

use crate::algorithm::distance::Distance;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Progress of a vertex through one Dijkstra run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexState {
    /// Still keyed as unreachable; nothing has relaxed an edge into it yet
    Unvisited,
    /// Holds a tentative finite distance that may still decrease
    InHeap,
    /// Extracted; its distance and predecessor are final
    Finalized,
}

/// Classic Dijkstra's algorithm over an indexed binary min-heap
///
/// All vertices enter the heap up front, keyed by their tentative distance. Each
/// extraction finalizes one vertex; improving an edge lowers the target's key in place
/// with `decrease_key` instead of pushing a duplicate entry.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    fn check_non_negative<W, G>(graph: &G) -> Result<()>
    where
        W: Weight,
        G: Graph<W>,
    {
        match graph.find_negative_edge() {
            Some((from, to, weight)) => {
                warn!("negative edge {} -> {} ({:?}), refusing to run Dijkstra", from, to, weight);
                Err(Error::NegativeEdge {
                    from,
                    to,
                    weight: format!("{:?}", weight),
                })
            }
            None => Ok(()),
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        Self::check_non_negative(graph)?;

        let n = graph.vertex_count();

        let mut distances: Vec<Distance<W>> = vec![Distance::Unreachable; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut states = vec![VertexState::Unvisited; n];
        // Vertices that had a candidate distance too large for `W`
        let mut overflowed = vec![false; n];
        distances[source] = Distance::zero();
        states[source] = VertexState::InHeap;

        let mut heap = IndexedMinHeap::with_vertices(&distances);
        let mut relaxations = 0usize;

        while let Some(u) = heap.extract_min(&distances) {
            // Everything left in the heap is unvisited as well.
            if states[u] == VertexState::Unvisited {
                break;
            }
            states[u] = VertexState::Finalized;
            let dist_u = distances[u];

            for (v, weight) in graph.outgoing_edges(u) {
                if states[v] == VertexState::Finalized {
                    continue;
                }
                let candidate = match dist_u.extend(weight) {
                    Some(candidate) => candidate,
                    None => {
                        trace!("relax {} -> {}: sum overflows, skipped", u, v);
                        overflowed[v] = true;
                        continue;
                    }
                };
                if candidate < distances[v] {
                    trace!("relax {} -> {}: {:?} -> {:?}", u, v, distances[v], candidate);
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    states[v] = VertexState::InHeap;
                    heap.decrease_key(v, &distances);
                    relaxations += 1;
                }
            }
            debug_assert!(heap.is_valid(&distances));
        }

        // A skipped sum only matters if no representable path reached the vertex.
        if let Some(to) = (0..n).find(|&v| overflowed[v] && !distances[v].is_finite()) {
            warn!("distance from {} to {} overflows {}", source, to, std::any::type_name::<W>());
            return Err(Error::DistanceOverflow { from: source, to });
        }

        debug!(
            "Dijkstra from {}: {} of {} vertices finalized, {} relaxations",
            source,
            states.iter().filter(|&&s| s == VertexState::Finalized).count(),
            n,
            relaxations
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    #[test]
    fn zero_weight_edge_into_heap_vertex_keeps_first_distance() {
        // 2 is reached at distance 2 via 1, then offered the same distance via 3
        let graph = DirectedGraph::from_edges(4, vec![(0, 1, 1), (1, 2, 1), (0, 3, 2), (3, 2, 0)]).unwrap();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distances[2], Distance::Finite(2));
        assert_eq!(result.predecessors[2], Some(1));
    }

    #[test]
    fn unvisited_vertices_stay_unreachable() {
        let graph = DirectedGraph::from_edges(3, vec![(1, 2, 1)]).unwrap();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distances, vec![Distance::zero(), Distance::Unreachable, Distance::Unreachable]);
        assert_eq!(result.predecessors, vec![None, None, None]);
    }
}

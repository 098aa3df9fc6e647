use log::{debug, warn};

use crate::algorithm::distance::Distance;
use crate::algorithm::{AllPairsAlgorithm, AllPairsResult};
use crate::graph::{AdjacencyMatrix, Weight};
use crate::{Error, Result};

/// All-pairs shortest paths by dynamic programming over intermediate vertices.
///
/// O(V³) time, O(V²) space for the distance and successor matrices. The loop over the
/// intermediate vertex `k` must stay outermost: paths through `{0..k}` are complete before
/// any path through `k + 1` is considered.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    pub fn new() -> Self {
        FloydWarshall
    }

    fn negative_cycle(vertex: usize) -> Error {
        warn!("negative-weight cycle through vertex {}, aborting Floyd-Warshall", vertex);
        Error::NegativeCycle { vertex }
    }

    fn overflow(from: usize, to: usize) -> Error {
        warn!("distance {} -> {} does not fit in the weight type", from, to);
        Error::DistanceOverflow { from, to }
    }
}

impl<W> AllPairsAlgorithm<W> for FloydWarshall
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_all_pairs(&self, matrix: &AdjacencyMatrix<W>) -> Result<AllPairsResult<W>> {
        let n = matrix.vertex_count();
        let zero = Distance::zero();

        let mut distances: Vec<Distance<W>> = matrix.as_slice().iter().map(|&w| Distance::from(w)).collect();
        let mut successors: Vec<Option<usize>> = matrix
            .as_slice()
            .iter()
            .enumerate()
            .map(|(idx, w)| w.is_some().then(|| idx % n))
            .collect();

        // A negative self-loop is a cycle before any relaxation happens.
        if let Some(vertex) = (0..n).find(|&v| distances[v * n + v] < zero) {
            return Err(Self::negative_cycle(vertex));
        }

        // Pairs that had a candidate too large for `W`
        let mut overflowed = vec![false; n * n];
        let mut updates = 0usize;
        for k in 0..n {
            for i in 0..n {
                let through_ik = distances[i * n + k];
                if !through_ik.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let through_kj = distances[k * n + j];
                    if !through_kj.is_finite() {
                        continue;
                    }
                    let idx = i * n + j;
                    let candidate = match through_ik.join(through_kj) {
                        Some(candidate) => candidate,
                        // Both parts negative: the true distance is below every value of `W`.
                        None if through_ik < zero => return Err(Self::overflow(i, j)),
                        None => {
                            overflowed[idx] = true;
                            continue;
                        }
                    };
                    if candidate < distances[idx] {
                        distances[idx] = candidate;
                        successors[idx] = successors[i * n + k];
                        updates += 1;
                        if i == j && candidate < zero {
                            return Err(Self::negative_cycle(i));
                        }
                    }
                }
            }
        }

        // An overflowed candidate never beats a finite distance, so it only matters when
        // the pair ended up with no representable path at all.
        if let Some(idx) = (0..n * n).find(|&idx| overflowed[idx] && !distances[idx].is_finite()) {
            return Err(Self::overflow(idx / n, idx % n));
        }

        debug!("Floyd-Warshall over {} vertices: {} distance updates", n, updates);

        Ok(AllPairsResult {
            vertex_count: n,
            distances,
            successors,
        })
    }
}

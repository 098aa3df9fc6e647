pub mod traits;
pub mod distance;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod path;

pub use traits::{AllPairsAlgorithm, AllPairsResult, ShortestPathAlgorithm, ShortestPathResult};

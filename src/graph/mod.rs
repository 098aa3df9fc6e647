pub mod traits;
pub mod directed;
pub mod matrix;
pub mod input;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use directed::DirectedGraph;
pub use matrix::AdjacencyMatrix;
pub use input::{parse_edge_list, EdgeList};

use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Edge weight usable by both engines.
///
/// Weights need a total order and an addition that reports overflow; infinity is never
/// represented as a weight value.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// `self + other`, or `None` if the sum is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Weight for OrderedFloat<f64> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(OrderedFloat(sum))
    }
}

impl Weight for OrderedFloat<f32> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(OrderedFloat(sum))
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the lightest edge between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }

    /// Returns the first edge with a negative weight, scanning vertices in order
    fn find_negative_edge(&self) -> Option<(usize, usize, W)> {
        (0..self.vertex_count()).find_map(|from| {
            self.outgoing_edges(from)
                .find(|(_, weight)| *weight < W::zero())
                .map(|(to, weight)| (from, to, weight))
        })
    }

    /// Validate that the graph doesn't have negative weights
    fn validate_non_negative(&self) -> bool {
        self.find_negative_edge().is_none()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight.
    /// Returns false if either endpoint does not exist.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes every edge from `from` to `to`
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;

    /// Updates the weight of every edge from `from` to `to`
    fn update_edge_weight(&mut self, from: usize, to: usize, weight: W) -> bool;
}

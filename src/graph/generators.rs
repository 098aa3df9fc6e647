use crate::graph::{DirectedGraph, Graph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
///
/// Weights are drawn from `0..=max_weight`; self-loops are skipped. The same seed always
/// produces the same graph.
pub fn generate_random_graph(n: usize, edge_factor: f64, max_weight: i64, seed: u64) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(0..=max_weight.max(0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid with 8-connectivity.
/// Cardinal moves cost 1.0 and diagonal moves 1.4.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let directions = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    debug_assert_eq!(graph.vertex_count(), width * height);
    graph
}

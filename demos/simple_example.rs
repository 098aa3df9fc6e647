use colored::*;
use shortest_paths::graph::{Graph, MutableGraph};
use shortest_paths::{
    all_pairs_route, shortest_paths_all_pairs, shortest_paths_single_source, single_source_route,
    AdjacencyMatrix, DirectedGraph, Distance,
};

fn main() {
    // Create a simple directed graph
    let mut graph: DirectedGraph<i64> = DirectedGraph::new();

    // Add vertices (0-5); vertex 5 stays disconnected
    for _ in 0..6 {
        graph.add_vertex();
    }

    // Add edges with weights
    graph.add_edge(0, 1, 10);
    graph.add_edge(0, 2, 5);
    graph.add_edge(1, 3, 1);
    graph.add_edge(2, 1, 3);
    graph.add_edge(2, 3, 9);
    graph.add_edge(2, 4, 2);
    graph.add_edge(3, 4, 4);
    graph.add_edge(4, 0, 7);
    graph.add_edge(4, 3, 6);

    let source = 0;

    println!("{}", "--- Dijkstra from vertex 0 ---".bold());
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let result = shortest_paths_single_source(&graph, source).unwrap();
    for v in 0..graph.vertex_count() {
        match result.distances[v] {
            Distance::Finite(dist) => println!(
                "Vertex {}: distance = {}, path = {}",
                v,
                dist.to_string().green(),
                single_source_route(&result, v)
            ),
            Distance::Unreachable => println!("Vertex {}: {}", v, "unreachable".red()),
        }
    }

    println!("\n{}", "--- Floyd-Warshall, all pairs ---".bold());
    let all = shortest_paths_all_pairs(&AdjacencyMatrix::from(&graph)).unwrap();
    for u in 0..graph.vertex_count() {
        let row: Vec<String> = all.distances_from(u).iter().map(|d| format!("{:>8}", d.to_string())).collect();
        println!("{:>2} | {}", u, row.join(" "));
    }
    println!("Path 3 -> 1: {}", all_pairs_route(&all, 3, 1).to_string().cyan());

    println!("\n{}", "--- Negative edge ---".bold());
    graph.add_edge(5, 0, -1);
    match shortest_paths_single_source(&graph, source) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("{}", e.to_string().yellow()),
    }
}

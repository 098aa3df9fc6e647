use shortest_paths::algorithm::dijkstra::Dijkstra;
use shortest_paths::algorithm::traits::ShortestPathAlgorithm;
use shortest_paths::graph::generators::generate_grid;
use shortest_paths::graph::DirectedGraph;
use shortest_paths::graph::{Graph, MutableGraph};
use shortest_paths::{all_pairs_route, shortest_paths_all_pairs, single_source_route, AdjacencyMatrix, Route};
use ordered_float::OrderedFloat;

type FloatGraph = DirectedGraph<OrderedFloat<f64>>;

fn dijkstra_path(graph: &FloatGraph, source: usize, target: usize) -> Option<Vec<usize>> {
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(graph, source).unwrap();
    <Dijkstra as ShortestPathAlgorithm<OrderedFloat<f64>, FloatGraph>>::get_path(&dijkstra, &result, target)
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10);

    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let path = dijkstra_path(&graph, source, target).expect("Dijkstra should construct a path");

    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    // nine diagonal steps
    assert_eq!(path.len(), 10);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let mut graph = generate_grid(10, 10);

    // Create a wall of obstacles in column 5, open at the bottom two rows
    for y in 0..8 {
        let obstacle = y * 10 + 5;
        for v in 0..graph.vertex_count() {
            graph.remove_edge(v, obstacle);
            graph.remove_edge(obstacle, v);
        }
    }

    let source = 0;
    let target = 9;

    let path = dijkstra_path(&graph, source, target).expect("Dijkstra should find a path around obstacles");
    assert_eq!(path[0], source);
    assert_eq!(path[path.len() - 1], target);
    for y in 0..8 {
        assert!(!path.contains(&(y * 10 + 5)), "Path must avoid the wall");
    }
    for i in 1..path.len() {
        assert!(graph.has_edge(path[i - 1], path[i]), "Path should only use existing edges");
    }
}

#[test]
fn test_both_engines_reconstruct_equal_length_paths() {
    let graph = generate_grid(6, 5);
    let matrix = AdjacencyMatrix::from(&graph);
    let all = shortest_paths_all_pairs(&matrix).unwrap();

    let source = 7;
    let single = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();

    for target in 0..graph.vertex_count() {
        let from_single = single_source_route(&single, target);
        let from_all = all_pairs_route(&all, source, target);
        match (&from_single, &from_all) {
            (Route::Itself, Route::Itself) => assert_eq!(target, source),
            (Route::Through(a), Route::Through(b)) => {
                let cost = |path: &[usize]| -> f64 {
                    path.windows(2)
                        .map(|w| graph.get_edge_weight(w[0], w[1]).unwrap().into_inner())
                        .sum()
                };
                assert!((cost(a) - cost(b)).abs() < 1e-9, "Paths to {} differ in cost", target);
            }
            other => panic!("engines disagree on route to {}: {:?}", target, other),
        }
    }
}

#[test]
fn test_route_display() {
    assert_eq!(Route::Through(vec![0, 1, 2, 3]).to_string(), "0->1->2->3");
    assert_eq!(Route::Itself.to_string(), "itself");
    assert_eq!(Route::Unreachable.to_string(), "infinity");
    assert_eq!(Route::Through(vec![4, 2]).vertices(), Some(&[4, 2][..]));
    assert_eq!(Route::Itself.vertices(), None);
}

#[test]
fn test_grid_step_weights() {
    let graph = generate_grid(3, 3);
    // center vertex 4 has all eight neighbours
    assert_eq!(graph.outgoing_edges(4).count(), 8);
    assert_eq!(graph.get_edge_weight(4, 1), Some(OrderedFloat(1.0)));
    assert_eq!(graph.get_edge_weight(4, 5), Some(OrderedFloat(1.0)));
    assert_eq!(graph.get_edge_weight(4, 0), Some(OrderedFloat(1.4)));
    assert_eq!(graph.get_edge_weight(4, 8), Some(OrderedFloat(1.4)));
    // corners only reach three neighbours
    assert_eq!(graph.outgoing_edges(0).count(), 3);
}

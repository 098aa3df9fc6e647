use shortest_paths::graph::generators::generate_random_graph;
use shortest_paths::graph::{DirectedGraph, Graph, MutableGraph};
use shortest_paths::{
    shortest_paths_single_source, single_source_route, Dijkstra, Distance, Error, Route,
    ShortestPathAlgorithm,
};

fn scenario_graph() -> DirectedGraph<i64> {
    DirectedGraph::from_edges(4, vec![(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]).unwrap()
}

// Minimum over all simple paths, by exhaustive search
fn brute_force_distance(graph: &DirectedGraph<i64>, source: usize, target: usize) -> Option<i64> {
    fn walk(
        graph: &DirectedGraph<i64>,
        current: usize,
        target: usize,
        cost: i64,
        visited: &mut Vec<bool>,
        best: &mut Option<i64>,
    ) {
        if current == target {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        visited[current] = true;
        for (next, weight) in graph.outgoing_edges(current) {
            if !visited[next] {
                walk(graph, next, target, cost + weight, visited, best);
            }
        }
        visited[current] = false;
    }

    let mut best = None;
    let mut visited = vec![false; graph.vertex_count()];
    walk(graph, source, target, 0, &mut visited, &mut best);
    best
}

#[test]
fn test_scenario_distances_and_path() {
    let graph = scenario_graph();
    let result = shortest_paths_single_source(&graph, 0).unwrap();

    let expected: Vec<Distance<i64>> = [0, 1, 3, 4].iter().map(|&d| Distance::Finite(d)).collect();
    assert_eq!(result.distances, expected);
    assert_eq!(single_source_route(&result, 3), Route::Through(vec![0, 1, 2, 3]));
    assert_eq!(single_source_route(&result, 0), Route::Itself);
    assert_eq!(result.predecessors, vec![None, Some(0), Some(1), Some(2)]);
}

#[test]
fn test_negative_edge_is_rejected() {
    let mut graph = scenario_graph();
    graph.add_edge(0, 1, -1);
    assert!(!graph.validate_non_negative());
    assert_eq!(graph.find_negative_edge(), Some((0, 1, -1)));

    let err = shortest_paths_single_source(&graph, 0).unwrap_err();
    match err {
        Error::NegativeEdge { from, to, .. } => assert_eq!((from, to), (0, 1)),
        other => panic!("expected NegativeEdge, got {:?}", other),
    }
}

#[test]
fn test_negative_edge_unreachable_from_source_is_still_rejected() {
    let graph = DirectedGraph::from_edges(3, vec![(0, 1, 2), (2, 1, -5)]).unwrap();
    assert!(matches!(
        shortest_paths_single_source(&graph, 0),
        Err(Error::NegativeEdge { from: 2, to: 1, .. })
    ));
}

#[test]
fn test_unreachable_vertex() {
    let graph = DirectedGraph::from_edges(5, vec![(0, 1, 3), (1, 2, 3), (4, 3, 1)]).unwrap();
    let result = shortest_paths_single_source(&graph, 0).unwrap();

    for v in [3, 4] {
        assert_eq!(result.distances[v], Distance::Unreachable);
        assert_eq!(result.predecessors[v], None);
        assert_eq!(single_source_route(&result, v), Route::Unreachable);
    }
    assert_eq!(result.reachable_count(), 3);
    assert_eq!(result.distances[2].finite(), Some(6));
    assert_eq!(result.distances[3].finite(), None);
}

#[test]
fn test_invalid_source() {
    let graph = scenario_graph();
    assert!(matches!(shortest_paths_single_source(&graph, 4), Err(Error::SourceNotFound)));
}

#[test]
fn test_zero_weight_edges_and_ties() {
    let graph = DirectedGraph::from_edges(
        4,
        vec![(0, 1, 0), (1, 0, 0), (0, 2, 2), (1, 2, 2), (2, 3, 0), (1, 3, 2)],
    )
    .unwrap();
    let result = shortest_paths_single_source(&graph, 0).unwrap();
    assert_eq!(result.distances[1], Distance::Finite(0));
    assert_eq!(result.distances[2], Distance::Finite(2));
    assert_eq!(result.distances[3], Distance::Finite(2));
    // the source never gets a predecessor, even through a zero-weight cycle
    assert_eq!(result.predecessors[0], None);
}

#[test]
fn test_parallel_edges_use_lightest() {
    let graph = DirectedGraph::from_edges(2, vec![(0, 1, 9), (0, 1, 4), (0, 1, 7)]).unwrap();
    let result = shortest_paths_single_source(&graph, 0).unwrap();
    assert_eq!(result.distances[1], Distance::Finite(4));
}

#[test]
fn test_matches_brute_force_on_random_graphs() {
    for seed in 0..25 {
        let graph = generate_random_graph(8, 2.5, 20, seed);
        for source in 0..graph.vertex_count() {
            let result = shortest_paths_single_source(&graph, source).unwrap();
            assert_eq!(result.distances[source], Distance::Finite(0));

            for target in 0..graph.vertex_count() {
                let expected = Distance::from(brute_force_distance(&graph, source, target));
                assert_eq!(
                    result.distances[target], expected,
                    "seed {} source {} target {}", seed, source, target
                );

                // the predecessor chain walks real edges and sums to the distance
                if let Route::Through(path) = single_source_route(&result, target) {
                    let cost: i64 = path
                        .windows(2)
                        .map(|w| graph.get_edge_weight(w[0], w[1]).expect("path uses a real edge"))
                        .sum();
                    assert_eq!(Distance::Finite(cost), expected);
                }
            }
        }
    }
}

#[test]
fn test_rerun_is_idempotent() {
    let graph = generate_random_graph(40, 3.0, 50, 7);
    let dijkstra = Dijkstra::new();
    let first = dijkstra.compute_shortest_paths(&graph, 3).unwrap();
    let second = dijkstra.compute_shortest_paths(&graph, 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_single_vertex_graph() {
    let graph: DirectedGraph<i64> = DirectedGraph::with_capacity(1);
    let result = shortest_paths_single_source(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![Distance::Finite(0)]);
    assert_eq!(single_source_route(&result, 0), Route::Itself);
}

#[test]
fn test_distance_beyond_weight_range_is_an_error() {
    let graph = DirectedGraph::from_edges(3, vec![(0, 1, i64::MAX), (1, 2, 1)]).unwrap();
    let err = shortest_paths_single_source(&graph, 0).unwrap_err();
    assert!(matches!(err, Error::DistanceOverflow { from: 0, to: 2 }), "got {:?}", err);

    // the farthest representable vertex is still fine on its own
    let result = shortest_paths_single_source(&graph, 1).unwrap();
    assert_eq!(result.distances[2], Distance::Finite(1));
}

#[test]
fn test_overflowing_edge_is_skipped_when_another_path_fits() {
    let graph = DirectedGraph::from_edges(
        4,
        vec![(0, 1, i64::MAX), (1, 2, 1), (0, 3, i64::MAX), (3, 2, 0)],
    )
    .unwrap();
    let result = shortest_paths_single_source(&graph, 0).unwrap();
    assert_eq!(result.distances[2], Distance::Finite(i64::MAX));
    assert_eq!(result.predecessors[2], Some(3));
}

#[test]
fn test_updated_edge_weight_changes_distances() {
    let mut graph = scenario_graph();
    assert!(graph.update_edge_weight(0, 2, 1));
    assert!(!graph.update_edge_weight(3, 0, 1));
    assert_eq!(graph.get_edge_weight(0, 2), Some(1));

    let result = shortest_paths_single_source(&graph, 0).unwrap();
    assert_eq!(result.distances[2], Distance::Finite(1));
    assert_eq!(single_source_route(&result, 3), Route::Through(vec![0, 2, 3]));

    // a negative update trips the same scan the engine runs
    assert!(graph.update_edge_weight(2, 3, -2));
    assert_eq!(graph.find_negative_edge(), Some((2, 3, -2)));
    assert!(matches!(
        shortest_paths_single_source(&graph, 0),
        Err(Error::NegativeEdge { from: 2, to: 3, .. })
    ));
}

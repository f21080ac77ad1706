use ordered_float::OrderedFloat;
use rand::prelude::*;
use word_ladder::graph::generators::{grid_graph, random_graph};
use word_ladder::graph::{DirectedGraph, Graph, MutableGraph};
use word_ladder::{Dijkstra, Error, ShortestPathAlgorithm, ShortestPathResult};

// Brute-force relaxation oracle: O(V * E), no priority queue involved
fn brute_force_distances(graph: &DirectedGraph<u32>, source: usize) -> Vec<Option<u32>> {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<u32>> = vec![None; n];
    distances[source] = Some(0);

    for _ in 0..n {
        let mut changed = false;
        for u in 0..n {
            let Some(dist_u) = distances[u] else { continue };
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                if distances[v].map_or(true, |d| candidate < d) {
                    distances[v] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    distances
}

fn path_cost(graph: &DirectedGraph<u32>, path: &[usize]) -> u32 {
    path.windows(2)
        .map(|pair| {
            graph
                .edge_weight(pair[0], pair[1])
                .expect("path must only use existing edges")
        })
        .sum()
}

#[test]
fn test_simple_graph_distances() {
    let mut graph = DirectedGraph::with_vertices(5);
    graph.add_edge(0, 1, 10u32);
    graph.add_edge(0, 2, 5);
    graph.add_edge(1, 3, 1);
    graph.add_edge(2, 1, 3);
    graph.add_edge(2, 3, 9);
    graph.add_edge(2, 4, 2);
    graph.add_edge(3, 4, 4);
    graph.add_edge(4, 3, 6);

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[0], Some(0));
    assert_eq!(result.distances[1], Some(8)); // 0 -> 2 -> 1
    assert_eq!(result.distances[2], Some(5));
    assert_eq!(result.distances[3], Some(9)); // 0 -> 2 -> 1 -> 3
    assert_eq!(result.distances[4], Some(7)); // 0 -> 2 -> 4
}

#[test]
fn test_source_sentinels() {
    let mut graph = DirectedGraph::with_vertices(3);
    graph.add_edge(0, 1, 2u32);
    graph.add_edge(1, 2, 2);

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.source, 0);
    assert_eq!(result.distances[0], Some(0));
    assert_eq!(result.predecessors[0], None, "source has no predecessor");
}

#[test]
fn test_unreachable_vertex() {
    let mut graph = DirectedGraph::with_vertices(4);
    graph.add_edge(0, 1, 1u32);
    // Vertices 2 and 3 form a separate component
    graph.add_edge(2, 3, 1);

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[2], None);
    assert_eq!(result.predecessors[2], None);
    assert_eq!(result.path_to(2), None, "no path to an unreached vertex");
    assert_eq!(result.path_to(3), None);
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph: DirectedGraph<u32> = DirectedGraph::with_vertices(2);
    let outcome = Dijkstra::new().compute_shortest_paths(&graph, 7);
    assert!(matches!(outcome, Err(Error::SourceNotFound)));
}

#[test]
fn test_path_extraction_matches_distances() {
    let graph = grid_graph(10, 10);
    let source = 0;
    let target = 99;

    let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();

    let path = result.path_to(target).expect("grid corner must be reachable");
    assert_eq!(path[0], source, "path starts at source");
    assert_eq!(path[path.len() - 1], target, "path ends at target");

    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "path must only use existing edges");
    }

    assert_eq!(
        Some(path_cost(&graph, &path)),
        result.distances[target],
        "sum of edge weights along the path equals the reported distance"
    );
}

#[test]
fn test_grid_with_obstacle_wall() {
    let width = 10;
    let height = 10;
    let mut graph = DirectedGraph::with_vertices(width * height);

    // Rebuild the grid but leave out column 5 for rows 0..8
    let blocked = |x: usize, y: usize| x == 5 && y < 8;
    for y in 0..height {
        for x in 0..width {
            if blocked(x, y) {
                continue;
            }
            let vertex = y * width + x;
            let directions = [(0i32, -1i32), (1, 0), (0, 1), (-1, 0)];
            for (dx, dy) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx >= 0
                    && ny >= 0
                    && (nx as usize) < width
                    && (ny as usize) < height
                    && !blocked(nx as usize, ny as usize)
                {
                    graph.add_edge(vertex, ny as usize * width + nx as usize, 1u32);
                }
            }
        }
    }

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let target = width * height - 1;

    let path = result.path_to(target).expect("path must route around the wall");
    assert_eq!(path[0], 0);
    assert_eq!(path[path.len() - 1], target);
    // Detour: at least the Manhattan distance
    assert!(result.distances[target].unwrap() >= 18);
}

#[test]
fn test_random_graphs_match_brute_force() {
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let n = rng.gen_range(10..40);
        let graph = random_graph(n, 2.5, 20);
        let source = rng.gen_range(0..n);

        let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
        let expected = brute_force_distances(&graph, source);

        assert_eq!(result.distances, expected);

        // Every reachable vertex yields a path whose cost is its distance
        for v in 0..n {
            match result.distances[v] {
                Some(dist) => {
                    let path = result.path_to(v).expect("reachable vertex must have a path");
                    assert_eq!(path_cost(&graph, &path), dist);
                }
                None => assert_eq!(result.path_to(v), None),
            }
        }
    }
}

#[test]
fn test_float_weights_via_ordered_float() {
    let mut graph = DirectedGraph::with_vertices(3);
    graph.add_edge(0, 1, OrderedFloat(1.5));
    graph.add_edge(1, 2, OrderedFloat(2.25));
    graph.add_edge(0, 2, OrderedFloat(4.0));

    let result: ShortestPathResult<OrderedFloat<f64>> =
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[2], Some(OrderedFloat(3.75)));
    assert_eq!(result.path_to(2), Some(vec![0, 1, 2]));
}

#[test]
fn test_negative_weights_rejected_at_build_time() {
    let mut graph = DirectedGraph::with_vertices(2);
    assert!(!graph.add_edge(0, 1, OrderedFloat(-1.0)));
    assert_eq!(graph.edge_count(), 0);
}

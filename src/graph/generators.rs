use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random directed graph with roughly `edge_factor * n` edges
/// and uniform integer weights in `1..=max_weight`.
pub fn random_graph(num_vertices: usize, edge_factor: f64, max_weight: u32) -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::with_vertices(num_vertices);
    let mut rng = rand::thread_rng();

    let num_edges = (edge_factor * num_vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a 4-connected grid graph with unit weights.
/// Vertex `(x, y)` has index `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            let directions = [(0i32, -1i32), (1, 0), (0, 1), (-1, 0)];
            for (dx, dy) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, 1);
                }
            }
        }
    }

    graph
}

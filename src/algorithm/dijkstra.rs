use num_traits::Zero;
use std::fmt::Debug;
use std::ops::Add;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm.
///
/// Requires non-negative edge weights; negative weights silently break
/// correctness and are rejected at graph construction, not here.
/// Runs in O((|E| + |V|) log |V|) with the binary-heap queue.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        distances[source] = Some(W::zero());

        let mut queue = MinHeap::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Lazy deletion: stale queue entries for finalized vertices
            if visited[u] {
                continue;
            }
            visited[u] = true;

            for (v, weight) in graph.outgoing_edges(u) {
                if visited[v] {
                    continue;
                }
                let new_dist = dist_u + weight;

                let improved = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };

                if improved {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

use num_traits::Zero;
use std::fmt::Debug;
use std::ops::Add;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// `None` is the sentinel in both vectors: an unreached vertex has no
/// distance, and the source and unreached vertices have no predecessor.
/// Allocated fresh per call and fully owned by the caller.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    /// Distances from source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    /// Extracts the shortest path from the source to `destination` by
    /// walking predecessor links backwards.
    ///
    /// Returns `None` when the destination is out of range or was never
    /// reached; check `distances[destination]` to distinguish the two.
    pub fn path_to(&self, destination: usize) -> Option<Vec<usize>> {
        if destination >= self.predecessors.len() || self.distances[destination].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = Some(destination);
        while let Some(v) = current {
            path.push(v);
            current = self.predecessors[v];
        }
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

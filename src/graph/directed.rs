use crate::graph::traits::{Graph, MutableGraph};
use num_traits::Zero;
use std::fmt::Debug;
use std::ops::Add;

/// A directed graph implementation using adjacency lists.
///
/// Vertices are dense indices `0..n`; the structure is built once and read
/// only during algorithm runs.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    /// Outgoing edges for each vertex: outgoing[v] = [(target, weight)]
    outgoing: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph { outgoing: Vec::new() }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            outgoing: vec![Vec::new(); vertices],
        }
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing.get(from).and_then(|edges| {
            edges
                .iter()
                .find(|(target, _)| *target == to)
                .map(|(_, weight)| *weight)
        })
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing.push(Vec::new());
        self.outgoing.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return false;
        }

        // An existing edge is updated in place rather than duplicated
        for edge in self.outgoing[from].iter_mut() {
            if edge.0 == to {
                edge.1 = weight;
                return true;
            }
        }

        self.outgoing[from].push((to, weight));
        true
    }
}

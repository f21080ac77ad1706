use num_traits::Zero;
use std::fmt::Debug;
use std::ops::Add;

/// Trait representing a weighted directed graph.
///
/// Vertices are indexed `0..vertex_count()`. Edge weights must be totally
/// ordered and addable; non-negative integers and `OrderedFloat` both
/// qualify.
pub trait Graph<W>: Debug
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for graph construction
pub trait MutableGraph<W>: Graph<W>
where
    W: Copy + Ord + Add<Output = W> + Zero + Debug,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight.
    /// Returns false if either endpoint is missing or the weight is negative.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;
}

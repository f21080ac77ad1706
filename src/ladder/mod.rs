//! Word-ladder search over the implicit edit-distance graph.
//!
//! Words are vertices; an edge connects two words exactly when their edit
//! distance is 1. The graph is never materialized: [`adjacency`] discovers
//! neighbors on demand and [`search`] runs a breadth-first search over it.

pub mod adjacency;
pub mod edit_distance;
pub mod search;

use std::collections::BTreeSet;

/// A set of dictionary words. Sorted iteration keeps neighbor discovery,
/// and therefore ladder tie-breaking, deterministic.
pub type Dictionary = BTreeSet<String>;

pub use adjacency::{neighbors, AdjacencyStrategy};
pub use edit_distance::{edit_distance, edit_distance_within, is_adjacent};
pub use search::{generate_word_ladder, generate_word_ladder_with};

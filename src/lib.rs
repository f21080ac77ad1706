//! Word ladders and shortest paths.
//!
//! This library implements two classic graph/string algorithms:
//!
//! - a word-ladder solver that finds the shortest transformation sequence
//!   between two words by breadth-first search over the implicit graph whose
//!   edges connect words at edit distance 1 (see [`ladder`]);
//! - Dijkstra's single-source shortest-path algorithm over an explicit
//!   weighted directed graph (see [`algorithm`] and [`graph`]).
//!
//! Inputs are coursework-scale in-memory dictionaries and graphs. Neither
//! algorithm mutates its input, so shared references are safe to use from
//! concurrent callers; all working state is owned by each call.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod ladder;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use ladder::{generate_word_ladder, Dictionary};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

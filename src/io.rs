//! File loaders and console printers.
//!
//! Loading follows a forgiving contract: an unreadable or malformed file
//! yields an empty dictionary/graph plus a warning on the log channel,
//! never an error value. Callers treat emptiness as possible failure.

use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::{DirectedGraph, MutableGraph};
use crate::ladder::Dictionary;

/// Loads a dictionary from a word-list file: whitespace-separated tokens,
/// one or more per line, duplicates collapsed by set semantics.
/// Returns an empty dictionary when the file cannot be opened.
pub fn load_words<P: AsRef<Path>>(path: P) -> Dictionary {
    match File::open(&path) {
        Ok(file) => load_words_from_reader(BufReader::new(file)),
        Err(err) => {
            warn!("cannot open word list {}: {err}", path.as_ref().display());
            Dictionary::new()
        }
    }
}

/// Loads a dictionary from any buffered reader.
pub fn load_words_from_reader<R: BufRead>(reader: R) -> Dictionary {
    let mut word_list = Dictionary::new();

    for line in reader.lines() {
        let Ok(line) = line else { break };
        for token in line.split_whitespace() {
            word_list.insert(token.to_string());
        }
    }

    word_list
}

/// Loads a weighted directed graph from an edge-list file: the first token
/// is the vertex count, followed by `source destination weight` triples.
/// Returns an empty graph when the file cannot be opened.
pub fn load_graph<P: AsRef<Path>>(path: P) -> DirectedGraph<u32> {
    match File::open(&path) {
        Ok(file) => load_graph_from_reader(BufReader::new(file)),
        Err(err) => {
            warn!("cannot open graph file {}: {err}", path.as_ref().display());
            DirectedGraph::new()
        }
    }
}

/// Loads a weighted directed graph from any buffered reader.
/// Tokens that do not form a complete in-range triple are skipped.
pub fn load_graph_from_reader<R: BufRead>(reader: R) -> DirectedGraph<u32> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let Ok(line) = line else { break };
        tokens.extend(line.split_whitespace().map(str::to_string));
    }

    let mut iter = tokens.iter();

    let vertex_count = match iter.next().and_then(|t| t.parse::<usize>().ok()) {
        Some(n) => n,
        None => {
            warn!("graph file is missing a vertex count");
            return DirectedGraph::new();
        }
    };

    let mut graph = DirectedGraph::with_vertices(vertex_count);

    loop {
        let (Some(src), Some(dst), Some(weight)) = (iter.next(), iter.next(), iter.next()) else {
            break;
        };
        let parsed = (
            src.parse::<usize>().ok(),
            dst.parse::<usize>().ok(),
            weight.parse::<u32>().ok(),
        );
        match parsed {
            (Some(src), Some(dst), Some(weight)) => {
                if !graph.add_edge(src, dst, weight) {
                    warn!("skipping out-of-range edge {src} -> {dst}");
                }
            }
            _ => warn!("skipping malformed edge triple: {src} {dst} {weight}"),
        }
    }

    graph
}

/// Prints a word ladder to stdout: the words space-separated on one line,
/// or a notice when the ladder is empty.
pub fn print_word_ladder(ladder: &[String]) {
    if ladder.is_empty() {
        println!("No word ladder found.");
        return;
    }
    println!("{}", ladder.join(" "));
}

/// Prints a vertex path and its total cost in the two-line format
/// `v0 v1 ... vk` / `Total cost: c`.
pub fn print_path(path: &[usize], total: u32) {
    for vertex in path {
        print!("{vertex} ");
    }
    println!();
    println!("Total cost: {total}");
}

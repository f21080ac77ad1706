use std::env;
use std::process;

use word_ladder::graph::Graph;
use word_ladder::io::{load_graph, print_path};
use word_ladder::{Dijkstra, ShortestPathAlgorithm};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: {} <graph-file> [source]", args[0]);
        process::exit(2);
    }

    let graph = load_graph(&args[1]);
    let source: usize = match args.get(2) {
        Some(raw) => match raw.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("invalid source vertex: {raw}");
                process::exit(2);
            }
        },
        None => 0,
    };

    let dijkstra = Dijkstra::new();
    let result = match dijkstra.compute_shortest_paths(&graph, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    for target in 0..graph.vertex_count() {
        match (result.path_to(target), result.distances[target]) {
            (Some(path), Some(total)) => print_path(&path, total),
            _ => println!("No path to vertex {target}"),
        }
    }
}

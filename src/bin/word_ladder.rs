use std::env;
use std::process;

use word_ladder::io::{load_words, print_word_ladder};
use word_ladder::ladder::generate_word_ladder;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: {} <begin-word> <end-word> <word-file>", args[0]);
        process::exit(2);
    }

    let word_list = load_words(&args[3]);
    println!("Loaded {} words from {}", word_list.len(), args[3]);

    let ladder = generate_word_ladder(&args[1], &args[2], &word_list);
    print_word_ladder(&ladder);
}

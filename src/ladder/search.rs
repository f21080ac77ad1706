use log::{debug, error};
use std::collections::{HashSet, VecDeque};

use crate::ladder::adjacency::{neighbors, AdjacencyStrategy};
use crate::ladder::Dictionary;

/// Emits the diagnostic context for a failed search: the message, then the
/// two words involved, one per line. Observational only; the return value
/// of the search is the empty ladder in every failure case.
fn report_failure(word1: &str, word2: &str, msg: &str) {
    error!("{msg}");
    error!("  --> {word1}");
    error!("  --> {word2}");
}

/// Finds a shortest word ladder from `begin_word` to `end_word` using the
/// default adjacency strategy.
///
/// A ladder starts with `begin_word`, ends with `end_word`, and every
/// consecutive pair is at edit distance exactly 1; every word except the
/// first must be in the dictionary. Returns an empty vector when the input
/// is invalid (equal endpoints, end word not in the dictionary) or when no
/// ladder exists; the reason is reported on the error log channel.
pub fn generate_word_ladder(
    begin_word: &str,
    end_word: &str,
    word_list: &Dictionary,
) -> Vec<String> {
    generate_word_ladder_with(begin_word, end_word, word_list, AdjacencyStrategy::default())
}

/// Finds a shortest word ladder using an explicit adjacency strategy.
///
/// Breadth-first search over partial ladders: the queue holds full paths,
/// so the first ladder to reach `end_word` is returned as-is, no
/// reconstruction needed. A word is marked visited the moment its ladder is
/// enqueued, which keeps each word expanded at most once while preserving
/// the shortest-ladder guarantee of level-order traversal.
pub fn generate_word_ladder_with(
    begin_word: &str,
    end_word: &str,
    word_list: &Dictionary,
    strategy: AdjacencyStrategy,
) -> Vec<String> {
    if begin_word == end_word {
        report_failure(begin_word, end_word, "start and end words are equivalent");
        return Vec::new();
    }

    // Mandatory for pattern generation (an absent end word could never be
    // reached), harmless for dictionary scan.
    if !word_list.contains(end_word) {
        report_failure(begin_word, end_word, "end word is not in the dictionary");
        return Vec::new();
    }

    let mut queue: VecDeque<Vec<String>> = VecDeque::new();
    queue.push_back(vec![begin_word.to_string()]);

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(begin_word.to_string());

    while let Some(ladder) = queue.pop_front() {
        // Queue entries always hold at least the begin word
        let Some(last_word) = ladder.last() else {
            continue;
        };
        debug!("expanding {last_word} at depth {}", ladder.len());

        for word in neighbors(last_word, word_list, strategy) {
            if !visited.insert(word.clone()) {
                continue;
            }

            let mut new_ladder = ladder.clone();
            new_ladder.push(word.clone());

            // First completed ladder is shortest, by BFS level order
            if word == end_word {
                return new_ladder;
            }

            queue.push_back(new_ladder);
        }
    }

    report_failure(begin_word, end_word, "no ladder was found");
    Vec::new()
}

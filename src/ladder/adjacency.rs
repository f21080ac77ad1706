use crate::ladder::edit_distance::is_adjacent;
use crate::ladder::Dictionary;

/// Defines how neighbors of a word are discovered during the search.
///
/// Both strategies yield the same set of dictionary words at edit distance
/// exactly 1; they differ only in cost profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjacencyStrategy {
    /// Compare the word against every dictionary entry.
    /// O(|dictionary| * len^2) per expansion; fine for small dictionaries.
    DictionaryScan,
    /// Enumerate all single-edit variants of the word and test each for
    /// dictionary membership. O(26 * len) candidates per expansion,
    /// independent of dictionary size. Assumes lowercase a-z words.
    PatternGeneration,
}

impl Default for AdjacencyStrategy {
    fn default() -> Self {
        AdjacencyStrategy::PatternGeneration
    }
}

/// Returns the dictionary words adjacent to `word` (edit distance exactly 1),
/// sorted and duplicate-free so frontier expansion order is deterministic.
pub fn neighbors(word: &str, dictionary: &Dictionary, strategy: AdjacencyStrategy) -> Vec<String> {
    match strategy {
        AdjacencyStrategy::DictionaryScan => scan_neighbors(word, dictionary),
        AdjacencyStrategy::PatternGeneration => pattern_neighbors(word, dictionary),
    }
}

fn scan_neighbors(word: &str, dictionary: &Dictionary) -> Vec<String> {
    // BTreeSet iteration is already sorted and duplicate-free
    dictionary
        .iter()
        .filter(|candidate| is_adjacent(word, candidate))
        .cloned()
        .collect()
}

fn pattern_neighbors(word: &str, dictionary: &Dictionary) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut found = Vec::new();

    let mut consider = |candidate: String| {
        if dictionary.contains(&candidate) {
            found.push(candidate);
        }
    };

    // Substitutions: each position, each different letter
    for i in 0..chars.len() {
        for letter in 'a'..='z' {
            if letter != chars[i] {
                let mut variant = chars.clone();
                variant[i] = letter;
                consider(variant.into_iter().collect());
            }
        }
    }

    // Deletions: each position
    for i in 0..chars.len() {
        let mut variant = chars.clone();
        variant.remove(i);
        consider(variant.into_iter().collect());
    }

    // Insertions: each gap, including before the first and after the last
    for i in 0..=chars.len() {
        for letter in 'a'..='z' {
            let mut variant = chars.clone();
            variant.insert(i, letter);
            consider(variant.into_iter().collect());
        }
    }

    // A candidate can be generated more than once (e.g. via different
    // insertion positions), and generation order is not sorted.
    found.sort();
    found.dedup();
    found
}

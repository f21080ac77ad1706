/// Computes the Levenshtein edit distance between two strings: the minimum
/// number of single-character insertions, deletions, and substitutions that
/// transform `a` into `b`.
///
/// Uses the classic dynamic-programming recurrence with a single rolling row
/// of size `|b| + 1`, so the cost is O(|a| * |b|) time and O(|b|) space.
/// Operates on `char`s, so multi-byte characters count as one edit.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    // Base row: transforming the empty prefix of `a` into the first j
    // characters of `b` takes j insertions.
    let mut curr: Vec<usize> = (0..=n).collect();

    for (i, ca) in a.chars().enumerate() {
        // `prev` holds the diagonal predecessor curr[j-1] from the row above
        let mut prev = curr[0];
        curr[0] = i + 1;

        for (j, &cb) in b_chars.iter().enumerate() {
            let temp = curr[j + 1];

            if ca == cb {
                curr[j + 1] = prev;
            } else {
                // Insertion (left), substitution (diagonal), deletion (above)
                curr[j + 1] = curr[j].min(prev).min(curr[j + 1]) + 1;
            }

            prev = temp;
        }
    }

    curr[n]
}

/// Returns true when `a` and `b` are within `d` edits of each other.
pub fn edit_distance_within(a: &str, b: &str, d: usize) -> bool {
    edit_distance(a, b) <= d
}

/// Returns true when the edit distance between the two words is exactly 1.
///
/// Identical words are not adjacent: a ladder step must be a genuine single
/// edit, and the search treats equal start/end words as a usage error.
pub fn is_adjacent(word1: &str, word2: &str) -> bool {
    edit_distance(word1, word2) == 1
}

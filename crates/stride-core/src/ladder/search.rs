//! BFS word-ladder search and the edit-distance-≤1 adjacency predicate

use std::collections::{HashMap, HashSet, VecDeque};

use crate::ladder::Vocabulary;

/// True iff `a` can be turned into `b` by at most one single-character
/// substitution, insertion, or deletion.
///
/// Symmetric by construction. Comparison is byte-wise on the (already
/// normalized) words; non-alphabetic characters are ordinary characters.
pub fn is_adjacent(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();

    match a.len().abs_diff(b.len()) {
        0 => a.iter().zip(b).filter(|(x, y)| x != y).count() <= 1,
        1 => {
            if a.len() < b.len() {
                one_deletion_apart(a, b)
            } else {
                one_deletion_apart(b, a)
            }
        }
        _ => false,
    }
}

/// Lockstep scan of `shorter` against `longer` (one byte longer), allowing a
/// single skipped position in `longer`.
fn one_deletion_apart(shorter: &[u8], longer: &[u8]) -> bool {
    let mut i = 0;
    let mut j = 0;
    let mut skipped = false;

    while i < shorter.len() && j < longer.len() {
        if shorter[i] == longer[j] {
            i += 1;
            j += 1;
        } else {
            if skipped {
                return false;
            }
            skipped = true;
            j += 1;
        }
    }

    // A single unconsumed trailing byte of the longer word uses the skip.
    if j < longer.len() && !skipped {
        j += 1;
    }

    i == shorter.len() && j == longer.len()
}

/// Find the shortest word ladder from `begin` to `end` through `vocabulary`.
///
/// Breadth-first expansion over the implicit graph whose edges are
/// [`is_adjacent`] pairs, so the first ladder found has the minimum number of
/// words. Each word is visited at most once; a parent map records discovery
/// edges and the search stops the moment the end word is found.
///
/// Inputs are lowercased and the returned ladder holds lowercase words, both
/// endpoints included. When the normalized begin and end words are equal the
/// result is the single-element ladder `[begin]`, whether or not the word is
/// in the vocabulary. An empty vector means no ladder exists (including an
/// end word absent from the vocabulary).
#[tracing::instrument(skip(vocabulary), fields(words = vocabulary.len()))]
pub fn find_ladder(begin: &str, end: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let begin = begin.to_lowercase();
    let end = end.to_lowercase();

    if begin == end {
        return vec![begin];
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(begin.clone());

    let mut parent: HashMap<String, String> = HashMap::new();

    let mut frontier: VecDeque<String> = VecDeque::new();
    frontier.push_back(begin.clone());

    while let Some(current) = frontier.pop_front() {
        for word in vocabulary.near_length(current.len()) {
            if visited.contains(word) || !is_adjacent(&current, word) {
                continue;
            }

            visited.insert(word.to_string());
            parent.insert(word.to_string(), current.clone());

            if word == end {
                tracing::debug!(visited = visited.len(), "ladder_found");
                return reconstruct(&parent, &begin, &end);
            }

            frontier.push_back(word.to_string());
        }
    }

    tracing::debug!(visited = visited.len(), "no_ladder");
    Vec::new()
}

/// Walk the parent map backward from `end`, then reverse into begin-to-end
/// order. The begin word has no parent entry but is still the first element.
fn reconstruct(parent: &HashMap<String, String>, begin: &str, end: &str) -> Vec<String> {
    let mut ladder = vec![end.to_string()];
    let mut current = end;
    while let Some(prev) = parent.get(current) {
        ladder.push(prev.clone());
        current = prev;
    }
    debug_assert_eq!(ladder.last().map(String::as_str), Some(begin));
    ladder.reverse();
    ladder
}

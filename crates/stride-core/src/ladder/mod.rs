//! Word-ladder search over a dictionary
//!
//! - `Vocabulary`: case-folded word set, bucketed by length
//! - `is_adjacent`: edit-distance-≤1 predicate
//! - `find_ladder`: BFS for the shortest transformation sequence

pub mod load;
pub mod search;

pub use load::read_words;
pub use search::{find_ladder, is_adjacent};

use std::collections::{HashMap, HashSet};

/// Case-normalized word set
///
/// Words are lowercased on insertion and deduplicated. Alongside the set, a
/// per-length bucket index is kept: only words whose length is within one of
/// a query word's length can be adjacent to it, so the search scans three
/// buckets instead of the whole vocabulary. The buckets change nothing about
/// which ladder is found.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: HashSet<String>,
    by_length: HashMap<usize, Vec<String>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, lowercasing it first. Returns false for duplicates.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        if self.words.contains(&word) {
            return false;
        }
        self.by_length.entry(word.len()).or_default().push(word.clone());
        self.words.insert(word)
    }

    /// Membership test. Expects an already-normalized (lowercase) word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words whose length is within one of `length`, in insertion order per
    /// bucket. These are the only possible edit-distance-≤1 neighbors of a
    /// word of that length.
    pub fn near_length(&self, length: usize) -> impl Iterator<Item = &str> {
        let low = length.saturating_sub(1);
        (low..=length + 1)
            .flat_map(|l| self.by_length.get(&l).into_iter().flatten())
            .map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for word in iter {
            vocabulary.insert(word.as_ref());
        }
        vocabulary
    }
}

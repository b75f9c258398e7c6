use crate::constants::STOP_WORDS;
use crate::types::{TokenRef, Word};
use std::collections::HashSet;

/// Frozen set of words excluded from frequency counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<Word>,
}

impl StopWordSet {
    /// Builds a set from literal entries. Entries are stored as given; lookups
    /// are exact, so callers pass lowercase entries to match normalized words.
    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|word| word.to_string()).collect(),
        }
    }

    /// A set which excludes nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn is_stop_word(&self, word: &TokenRef) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::from_words(STOP_WORDS)
    }
}

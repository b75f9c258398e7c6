use crate::models::{Report, StopWordSet, Tokenizer};
use crate::types::{TokenRef, WordFrequency, WordFrequencyMap};
use crate::utils::{count_word_frequencies, sort_word_frequencies};

use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFrequencyAnalyzerConfig {
    /// Number of most frequent words kept in a report.
    pub top_n: usize,
    /// Number of alphabetically first distinct words kept in a report.
    pub unique_word_limit: usize,
}

pub struct WordFrequencyAnalyzer<'a> {
    config: &'a WordFrequencyAnalyzerConfig,
    stop_words: StopWordSet,
}

impl<'a> WordFrequencyAnalyzer<'a> {
    /// Creates a new `WordFrequencyAnalyzer`.
    ///
    /// # Arguments
    /// * `config` - Report limits.
    /// * `stop_words` - Words removed before counting. Normalized words are
    ///   lowercase, so only lowercase entries can ever match.
    pub fn new(config: &'a WordFrequencyAnalyzerConfig, stop_words: StopWordSet) -> Self {
        WordFrequencyAnalyzer { config, stop_words }
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn is_stop_word(&self, word: &TokenRef) -> bool {
        self.stop_words.is_stop_word(word)
    }

    /// Tokenizes, normalizes and filters the text, then counts each surviving word.
    pub fn build_frequency_map(&self, text: &TokenRef) -> WordFrequencyMap {
        info!("Tokenizing...");

        let words = Tokenizer::tokenize_normalized(text).filter(|word| !self.is_stop_word(word));

        let frequencies = count_word_frequencies(words);

        debug!("Counted {} distinct words", frequencies.len());

        frequencies
    }

    /// Derives the summary views of a frequency map.
    ///
    /// An empty map yields a zero total and empty word lists.
    pub fn compute_report(&self, frequencies: &WordFrequencyMap) -> Report {
        info!("Ranking words...");

        let total_word_count: WordFrequency = frequencies.values().sum();

        let mut top_words = sort_word_frequencies(frequencies);
        top_words.truncate(self.config.top_n);

        let mut unique_words: Vec<_> = frequencies.keys().cloned().collect();
        unique_words.sort_unstable();
        unique_words.truncate(self.config.unique_word_limit);

        debug!(
            "Total word count: {}, ranked: {}, unique listed: {}",
            total_word_count,
            top_words.len(),
            unique_words.len()
        );

        Report {
            total_word_count,
            top_words,
            unique_words,
            top_n: self.config.top_n,
            unique_word_limit: self.config.unique_word_limit,
        }
    }

    /// Runs the full pipeline over a text document.
    pub fn analyze(&self, text: &TokenRef) -> Report {
        let frequencies = self.build_frequency_map(text);

        self.compute_report(&frequencies)
    }
}

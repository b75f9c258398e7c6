use crate::types::{ElapsedMillis, RankedWord, Word, WordFrequency};
use crate::utils::derive_name;
use std::fmt;

/// Read-only summary of a `WordFrequencyMap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Sum of all frequencies, i.e. the number of tokens which survived filtering.
    pub total_word_count: WordFrequency,
    /// Most frequent words, by frequency descending then word ascending.
    pub top_words: Vec<RankedWord>,
    /// Distinct words in ascending order, truncated to `unique_word_limit`.
    pub unique_words: Vec<Word>,
    /// Limit `top_words` was truncated to.
    pub top_n: usize,
    /// Limit `unique_words` was truncated to.
    pub unique_word_limit: usize,
}

impl Report {
    /// Suggested repo name built from the 1st and 5th ranked words.
    pub fn derive_name(&self, elapsed_millis: ElapsedMillis) -> Option<String> {
        derive_name(&self.top_words, elapsed_millis)
    }

    /// Renders the human-readable report, including the processing time and,
    /// when enough words are ranked, the suggested repo name.
    pub fn render(&self, elapsed_millis: ElapsedMillis) -> String {
        RenderedReport {
            report: self,
            elapsed_millis,
        }
        .to_string()
    }
}

struct RenderedReport<'a> {
    report: &'a Report,
    elapsed_millis: ElapsedMillis,
}

impl fmt::Display for RenderedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        writeln!(f, "=== Text Analysis Report ===")?;
        writeln!(
            f,
            "Total Words (after exclusions): {}",
            report.total_word_count
        )?;

        writeln!(f, "\nTop {} Words:", report.top_n)?;
        for (word, frequency) in &report.top_words {
            writeln!(f, "{} -> {}", word, frequency)?;
        }

        writeln!(
            f,
            "\nUnique Words (first {} alphabetically):",
            report.unique_word_limit
        )?;
        for word in &report.unique_words {
            writeln!(f, "{}", word)?;
        }

        writeln!(f, "\nProcessing time: {}ms", self.elapsed_millis)?;

        if let Some(name) = report.derive_name(self.elapsed_millis) {
            writeln!(f, "\nSuggested Repo Name: {}", name)?;
        }

        Ok(())
    }
}

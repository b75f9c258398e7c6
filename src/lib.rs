mod config;
pub use config::DEFAULT_ANALYZER_CONFIG;
mod constants;
pub use constants::{REPO_NAME_MIN_RANKED_WORDS, STOP_WORDS};
pub mod models;
pub use models::{
    Error, Report, StopWordSet, Tokenizer, WordFrequencyAnalyzer, WordFrequencyAnalyzerConfig,
};
pub mod types;
pub use types::{
    ElapsedMillis, RankedWord, Token, TokenRef, Word, WordFrequency, WordFrequencyMap,
};
mod utils;
pub use utils::{
    count_word_frequencies, derive_name, read_text_document, read_text_from_reader,
    sort_word_frequencies,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Analyzes a text document with the default report limits and stop words.
pub fn analyze_text(text: &TokenRef) -> Report {
    analyze_text_with_custom_config(DEFAULT_ANALYZER_CONFIG, StopWordSet::default(), text)
}

pub fn analyze_text_with_custom_config(
    analyzer_config: &WordFrequencyAnalyzerConfig,
    stop_words: StopWordSet,
    text: &TokenRef,
) -> Report {
    let analyzer = WordFrequencyAnalyzer::new(analyzer_config, stop_words);

    analyzer.analyze(text)
}

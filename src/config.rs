use crate::models::WordFrequencyAnalyzerConfig;

pub const DEFAULT_ANALYZER_CONFIG: &WordFrequencyAnalyzerConfig = &WordFrequencyAnalyzerConfig {
    top_n: 5,
    unique_word_limit: 50,
};

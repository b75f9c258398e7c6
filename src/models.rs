pub mod error;
pub use error::Error;

pub mod report;
pub use report::Report;

pub mod stop_word_set;
pub use stop_word_set::StopWordSet;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod word_frequency_analyzer;
pub use word_frequency_analyzer::{WordFrequencyAnalyzer, WordFrequencyAnalyzerConfig};

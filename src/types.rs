use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. A token is a maximal run of ASCII letters.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. Tokens are handed out as slices of the
/// source text, so this is what the tokenizer yields.
pub type TokenRef = str;

/// A token after normalization (lowercased, possessive suffix removed).
pub type Word = String;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = u64;

/// Represents a map of words to their frequency counts within a text document.
pub type WordFrequencyMap = HashMap<Word, WordFrequency>;

/// A `(word, frequency)` pair, as produced by ranking a `WordFrequencyMap`.
pub type RankedWord = (Word, WordFrequency);

/// Wall-clock processing time, in whole milliseconds.
pub type ElapsedMillis = u128;

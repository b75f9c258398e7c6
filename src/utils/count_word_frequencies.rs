use crate::types::{WordFrequencyMap, Word};

/// Counts the frequency of words in the given sequence.
///
/// # Arguments
/// * `words` - Normalized, already filtered words, in document order.
///
/// # Returns
/// * A `HashMap` where the keys are words and the values are their
///   respective frequencies. No value is ever zero.
///
/// # Example
/// ```
/// use word_frequency_analyzer::count_word_frequencies;
///
/// let words = vec!["whale".to_string(), "sea".to_string(), "whale".to_string()];
/// let frequencies = count_word_frequencies(words);
/// assert_eq!(frequencies.get("whale"), Some(&2));
/// assert_eq!(frequencies.get("sea"), Some(&1));
/// ```
pub fn count_word_frequencies<I>(words: I) -> WordFrequencyMap
where
    I: IntoIterator<Item = Word>,
{
    let mut frequencies = WordFrequencyMap::new();

    for word in words {
        *frequencies.entry(word).or_insert(0) += 1;
    }

    frequencies
}

use crate::types::{RankedWord, WordFrequencyMap};

/// Sorts a mapping of words to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Parameters:
/// - `frequencies`: A `WordFrequencyMap`. It is only borrowed; the returned
///   pairs are owned copies.
///
/// ### Returns:
/// - A `Vec` of `(Word, WordFrequency)` tuples, sorted as described above.
///
/// ### Example:
/// ```rust
/// use word_frequency_analyzer::{sort_word_frequencies, WordFrequencyMap};
///
/// let mut frequencies = WordFrequencyMap::new();
/// frequencies.insert("sea".to_string(), 10);
/// frequencies.insert("whale".to_string(), 15);
/// frequencies.insert("ahab".to_string(), 10);
///
/// let sorted = sort_word_frequencies(&frequencies);
/// assert_eq!(sorted, vec![
///     ("whale".to_string(), 15),
///     ("ahab".to_string(), 10),
///     ("sea".to_string(), 10)
/// ]);
/// ```
pub fn sort_word_frequencies(frequencies: &WordFrequencyMap) -> Vec<RankedWord> {
    let mut sorted_results: Vec<RankedWord> = frequencies
        .iter()
        .map(|(word, frequency)| (word.to_owned(), *frequency))
        .collect();

    sorted_results.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    sorted_results
}

use crate::constants::REPO_NAME_MIN_RANKED_WORDS;
use crate::types::{ElapsedMillis, RankedWord};

/// Builds a name of the form `<first>_<fifth>_<elapsed>ms` from ranked words.
///
/// Returns `None` when fewer than five words are ranked.
///
/// ```
/// use word_frequency_analyzer::derive_name;
///
/// let ranked: Vec<(String, u64)> = ["whale", "sea", "ship", "ahab", "boat"]
///     .iter()
///     .map(|word| (word.to_string(), 1))
///     .collect();
///
/// assert_eq!(derive_name(&ranked, 42), Some("whale_boat_42ms".to_string()));
/// assert_eq!(derive_name(&ranked[..4], 42), None);
/// ```
pub fn derive_name(ranked_words: &[RankedWord], elapsed_millis: ElapsedMillis) -> Option<String> {
    if ranked_words.len() < REPO_NAME_MIN_RANKED_WORDS {
        return None;
    }

    let (first, _) = &ranked_words[0];
    let (fifth, _) = &ranked_words[REPO_NAME_MIN_RANKED_WORDS - 1];

    Some(format!("{}_{}_{}ms", first, fifth, elapsed_millis))
}

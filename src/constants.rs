/// Words excluded from every frequency count.
///
/// Entries are lowercase; tokens are lowercased before the lookup. `"s"` and
/// `"t"` catch the remnants of contractions such as "don't" and "it's", which
/// the letters-only tokenizer splits in two.
pub const STOP_WORDS: &[&str] = &[
    // Articles
    "a", "an", "the",
    // Conjunctions
    "and", "or", "but", "nor", "yet", "so", "for",
    // Prepositions
    "in", "on", "at", "by", "from", "to", "of", "with", "about", "into", "onto", "upon",
    "over", "under", "above", "below", "before", "after", "since", "during", "through",
    "across", "between", "among", "against", "towards", "around", "without", "within",
    "as", "like", "than", "out",
    // Pronouns
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "this", "that", "these", "those", "who", "whom", "whose", "which", "what", "ye",
    // Auxiliaries and modals
    "is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "done",
    "doing", "have", "has", "had", "having", "shall", "should", "will", "would", "can",
    "could", "may", "might", "must", "ought",
    // Demonstratives and others
    "there", "here", "where", "when", "why", "how", "up", "more", "old", "if",
    // High frequency neutral words
    "all", "one", "now", "then", "some", "no", "not", "s", "t",
];

/// Minimum number of ranked words needed to suggest a repo name.
pub const REPO_NAME_MIN_RANKED_WORDS: usize = 5;

/// Possessive suffix removed during normalization.
pub const POSSESSIVE_SUFFIX: &str = "'s";

pub const GZIP_FILE_EXTENSION: &str = "gz";

use crate::constants::POSSESSIVE_SUFFIX;
use crate::types::{TokenRef, Word};

pub struct Tokenizer;

impl Tokenizer {
    /// Splits the text into maximal runs of ASCII letters, in order of appearance.
    ///
    /// Everything else (digits, punctuation, whitespace, non-ASCII) is a
    /// separator and is never yielded. Tokens borrow from `text`; nothing is
    /// collected up front.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn tokenize(text: &TokenRef) -> impl Iterator<Item = &TokenRef> {
        text.split(|c: char| !c.is_ascii_alphabetic())
            .filter(|token| !token.is_empty())
    }

    /// Lowercases the token, then drops a trailing `'s`.
    ///
    /// Tokens produced by [`Tokenizer::tokenize`] never contain an apostrophe,
    /// so the suffix check only fires for tokens built elsewhere.
    pub fn normalize(token: &TokenRef) -> Word {
        let word = token.to_lowercase();

        match word.strip_suffix(POSSESSIVE_SUFFIX) {
            Some(stripped) => stripped.to_string(),
            None => word,
        }
    }

    /// Convenience pipeline of [`Tokenizer::tokenize`] followed by [`Tokenizer::normalize`].
    pub fn tokenize_normalized(text: &TokenRef) -> impl Iterator<Item = Word> + '_ {
        Self::tokenize(text).map(Self::normalize)
    }
}

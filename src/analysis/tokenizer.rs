//! Word-level tokenization built on Unicode word boundaries.

use ahash::AHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Split text into word-level tokens using Unicode word boundaries.
///
/// Punctuation does not produce tokens. Token order matches the order of
/// appearance in the input.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Return true if the token consists entirely of alphabetic characters.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphabetic())
}

/// Filter tokens down to lower-cased alphabetic words outside the stop set.
///
/// A token survives when it is purely alphabetic and its lower-cased form
/// is not a stop word. Output order matches input order.
pub fn clean(tokens: &[&str], stop_words: &AHashSet<String>) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| is_alphabetic(token))
        .map(|token| token.to_lowercase())
        .filter(|token| !stop_words.contains(token.as_str()))
        .collect()
}

//! Lexicon construction for Calluna.
//!
//! A [`Lexicon`] bundles the stop-word set and the positive/negative
//! polarity word sets used throughout the metric pipeline. It is built
//! once per run, usually via [`LexiconBuilder`], and read-only
//! thereafter; every calculator receives it explicitly instead of
//! consulting shared global state.

pub mod loader;
pub mod stop_words;

// Re-exports
pub use loader::LexiconBuilder;

use ahash::AHashSet;

/// An immutable collection of stop words and polarity word sets.
///
/// The positive and negative sets never contain stop words; any overlap
/// is removed at construction time.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    stop_words: AHashSet<String>,
    positive_words: AHashSet<String>,
    negative_words: AHashSet<String>,
}

impl Lexicon {
    /// Create a builder seeded with the built-in English stop-word list.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Construct a lexicon directly from pre-built sets.
    ///
    /// Stop words are removed from both polarity sets.
    pub fn from_sets(
        stop_words: AHashSet<String>,
        mut positive_words: AHashSet<String>,
        mut negative_words: AHashSet<String>,
    ) -> Self {
        positive_words.retain(|word| !stop_words.contains(word));
        negative_words.retain(|word| !stop_words.contains(word));

        Lexicon {
            stop_words,
            positive_words,
            negative_words,
        }
    }

    /// Check whether a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Check whether a word carries positive polarity.
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive_words.contains(word)
    }

    /// Check whether a word carries negative polarity.
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative_words.contains(word)
    }

    /// The full stop-word set.
    pub fn stop_words(&self) -> &AHashSet<String> {
        &self.stop_words
    }

    /// Number of stop words.
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Number of positive words.
    pub fn positive_count(&self) -> usize {
        self.positive_words.len()
    }

    /// Number of negative words.
    pub fn negative_count(&self) -> usize {
        self.negative_words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> AHashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_from_sets_excludes_stop_words_from_polarity() {
        let lexicon = Lexicon::from_sets(
            set(&["the", "a", "down"]),
            set(&["good", "down"]),
            set(&["bad", "the"]),
        );

        assert!(lexicon.is_positive("good"));
        assert!(!lexicon.is_positive("down"));
        assert!(lexicon.is_negative("bad"));
        assert!(!lexicon.is_negative("the"));
        assert_eq!(lexicon.positive_count(), 1);
        assert_eq!(lexicon.negative_count(), 1);
    }

    #[test]
    fn test_default_lexicon_is_empty() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.stop_word_count(), 0);
        assert!(!lexicon.is_stop_word("the"));
    }
}

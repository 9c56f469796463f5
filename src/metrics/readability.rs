//! Sentence statistics and the Gunning-Fog readability index.

use crate::analysis::sentence::sentences;
use crate::analysis::tokenizer::{is_alphabetic, tokenize};
use crate::metrics::syllable::count_syllables;

/// Gunning-Fog weighting constant.
const FOG_WEIGHT: f64 = 0.4;

/// Syllable count above which a word is considered complex.
const COMPLEX_SYLLABLE_THRESHOLD: u64 = 2;

/// Readability scores for a single document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadabilityScores {
    /// Alphabetic words divided by sentences (0 if there are no sentences).
    pub avg_sentence_length: f64,
    /// Share of complex words among alphabetic words (0 if there are none).
    pub percentage_complex_words: f64,
    /// Gunning-Fog index.
    pub fog_index: f64,
}

/// Return true if the word's estimated syllable count exceeds two.
pub fn is_complex(word: &str) -> bool {
    count_syllables(word) > COMPLEX_SYLLABLE_THRESHOLD
}

/// Count complex words in a token stream.
///
/// Shared by the readability calculation (over raw words) and the
/// report's `COMPLEX WORD COUNT` column (over cleaned tokens).
pub fn count_complex_words<S: AsRef<str>>(words: &[S]) -> u64 {
    words.iter().filter(|word| is_complex(word.as_ref())).count() as u64
}

/// Compute readability scores over raw (unfiltered) text.
///
/// Word counts consider purely-alphabetic tokens of the raw text; stop
/// words are intentionally included here, unlike the sentiment path.
pub fn readability(text: &str) -> ReadabilityScores {
    let words: Vec<&str> = tokenize(text)
        .into_iter()
        .filter(|token| is_alphabetic(token))
        .collect();
    let sentence_count = sentences(text).len();

    let avg_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        words.len() as f64 / sentence_count as f64
    };

    let percentage_complex_words = if words.is_empty() {
        0.0
    } else {
        count_complex_words(&words) as f64 / words.len() as f64
    };

    let fog_index = FOG_WEIGHT * (avg_sentence_length + percentage_complex_words);

    ReadabilityScores {
        avg_sentence_length,
        percentage_complex_words,
        fog_index,
    }
}

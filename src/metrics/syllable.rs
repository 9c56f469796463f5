//! Heuristic per-word syllable estimation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VOWEL_RUNS: Regex = Regex::new(r"[aeiouy]+").unwrap();
}

/// Estimate the syllable count of a single word.
///
/// Counts maximal runs of vowel characters (`a e i o u y`) in the
/// lower-cased word, subtracts one for an `es`/`ed` suffix unless the
/// word ends in `le`, and reports at least one syllable for any input.
///
/// This is a deliberate approximation rather than a dictionary lookup;
/// report consumers compare against numbers produced by exactly this
/// heuristic, so it must not be "improved".
pub fn count_syllables(word: &str) -> u64 {
    let word = word.to_lowercase();
    let mut count = VOWEL_RUNS.find_iter(&word).count() as i64;

    if (word.ends_with("es") || word.ends_with("ed")) && !word.ends_with("le") {
        count -= 1;
    }

    if count > 0 { count as u64 } else { 1 }
}

//! Personal pronoun counting over raw text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PERSONAL_PRONOUNS: Regex = Regex::new(r"(?i)\b(i|we|my|ours|us)\b").unwrap();
}

/// Count whole-word personal pronoun matches in raw text.
///
/// Matches `I`, `we`, `my`, `ours`, and `us` case-insensitively, so the
/// country abbreviation "US" is counted as the pronoun "us". Report
/// consumers expect this exact behavior.
pub fn count_personal_pronouns(text: &str) -> u64 {
    PERSONAL_PRONOUNS.find_iter(text).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_all_pronoun_forms() {
        assert_eq!(count_personal_pronouns("I think we lost ours, give us my keys"), 5);
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert_eq!(count_personal_pronouns("WE said MY was fine"), 2);
        // "US" the country is counted as a pronoun.
        assert_eq!(count_personal_pronouns("The US economy"), 1);
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(count_personal_pronouns("mystery item in the museum"), 0);
        assert_eq!(count_personal_pronouns("wellness hours"), 0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(count_personal_pronouns(""), 0);
    }
}

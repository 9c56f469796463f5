//! Sentiment scoring against polarity word sets.

use crate::lexicon::Lexicon;

/// Smoothing term that keeps ratio scores finite on empty inputs.
const EPSILON: f64 = 1e-6;

/// Sentiment scores for a single document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScores {
    /// Number of tokens found in the positive set.
    pub positive_score: u64,
    /// Number of tokens found in the negative set.
    pub negative_score: u64,
    /// Normalized difference of positive and negative counts, in [-1, 1].
    pub polarity_score: f64,
    /// Share of polarity-bearing tokens among all tokens, in [0, 1].
    pub subjectivity_score: f64,
}

/// Score cleaned tokens against the lexicon's polarity sets.
///
/// Both ratio scores carry an epsilon in the denominator, so they stay
/// finite even when the token list is empty or carries no polarity words.
pub fn sentiment(tokens: &[String], lexicon: &Lexicon) -> SentimentScores {
    let positive = tokens.iter().filter(|t| lexicon.is_positive(t)).count() as u64;
    let negative = tokens.iter().filter(|t| lexicon.is_negative(t)).count() as u64;

    let positive_f = positive as f64;
    let negative_f = negative as f64;
    let total = tokens.len() as f64;

    let polarity_score = (positive_f - negative_f) / (positive_f + negative_f + EPSILON);
    let subjectivity_score = (positive_f + negative_f) / (total + EPSILON);

    SentimentScores {
        positive_score: positive,
        negative_score: negative,
        polarity_score,
        subjectivity_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ahash::AHashSet;

    fn set(words: &[&str]) -> AHashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn lexicon() -> Lexicon {
        Lexicon::from_sets(set(&["the", "a"]), set(&["good"]), set(&["bad"]))
    }

    #[test]
    fn test_balanced_document() {
        let scores = sentiment(&tokens(&["good", "cat", "is", "bad", "dog"]), &lexicon());

        assert_eq!(scores.positive_score, 1);
        assert_eq!(scores.negative_score, 1);
        assert!(scores.polarity_score.abs() < 1e-6);
        assert!((scores.subjectivity_score - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_empty_tokens_stay_finite() {
        let scores = sentiment(&[], &lexicon());

        assert_eq!(scores.positive_score, 0);
        assert_eq!(scores.negative_score, 0);
        assert_eq!(scores.polarity_score, 0.0);
        assert_eq!(scores.subjectivity_score, 0.0);
        assert!(scores.polarity_score.is_finite());
        assert!(scores.subjectivity_score.is_finite());
    }

    #[test]
    fn test_all_positive_polarity_near_one() {
        let scores = sentiment(&tokens(&["good", "good", "good"]), &lexicon());

        assert_eq!(scores.positive_score, 3);
        assert!(scores.polarity_score > 0.99 && scores.polarity_score <= 1.0);
        assert!(scores.subjectivity_score > 0.99 && scores.subjectivity_score <= 1.0);
    }

    #[test]
    fn test_all_negative_polarity_near_minus_one() {
        let scores = sentiment(&tokens(&["bad", "bad"]), &lexicon());

        assert_eq!(scores.negative_score, 2);
        assert!(scores.polarity_score < -0.99 && scores.polarity_score >= -1.0);
    }

    #[test]
    fn test_score_sum_bounded_by_token_count() {
        let input = tokens(&["good", "bad", "cat", "good"]);
        let scores = sentiment(&input, &lexicon());

        assert!(scores.positive_score + scores.negative_score <= input.len() as u64);
    }
}

//! Sentence boundary detection built on Unicode sentence boundaries.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into sentence segments using Unicode sentence boundaries.
///
/// Segments that contain only whitespace are dropped, so trailing
/// newlines do not inflate sentence counts.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split_sentence_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_basic_split() {
        let segments = sentences("Hello world. How are you? Fine.");
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn test_sentences_empty_text() {
        assert!(sentences("").is_empty());
        assert!(sentences(" \n \t").is_empty());
    }

    #[test]
    fn test_sentences_single_unterminated() {
        assert_eq!(sentences("no terminator here").len(), 1);
    }

    #[test]
    fn test_sentences_ignore_trailing_whitespace_segment() {
        assert_eq!(sentences("One. Two.\n\n").len(), 2);
    }
}

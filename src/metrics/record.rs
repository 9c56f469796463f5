//! The fixed-shape metric record emitted per document.

use serde::{Deserialize, Serialize};

/// Metric column names, in report order.
///
/// The names and their order are part of the report contract; downstream
/// consumers select columns by these exact headers.
pub const METRIC_COLUMNS: [&str; 13] = [
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// Computed metrics for a single document.
///
/// Field order matches [`METRIC_COLUMNS`]. The default value is the
/// record of an empty document: all counts and ratios zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Cleaned tokens found in the positive set.
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: u64,

    /// Cleaned tokens found in the negative set.
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: u64,

    /// Normalized positive/negative difference, in [-1, 1].
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,

    /// Share of polarity-bearing tokens, in [0, 1].
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,

    /// Alphabetic words per sentence of the raw text.
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,

    /// Share of complex words among the raw text's alphabetic words.
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,

    /// Gunning-Fog readability index.
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,

    /// Same quotient as `avg_sentence_length`, kept as its own column.
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,

    /// Complex words among the cleaned tokens.
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: u64,

    /// Number of cleaned tokens.
    #[serde(rename = "WORD COUNT")]
    pub word_count: u64,

    /// Mean estimated syllables per cleaned token.
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllables_per_word: f64,

    /// Personal pronoun matches in the raw text.
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: u64,

    /// Mean character length of cleaned tokens.
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricRecord {
    /// Render the record as report cell values, in column order.
    ///
    /// Count metrics are written without a decimal point; ratio metrics
    /// use shortest-roundtrip float formatting.
    pub fn to_fields(&self) -> [String; 13] {
        [
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.percentage_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllables_per_word.to_string(),
            self.personal_pronouns.to_string(),
            self.avg_word_length.to_string(),
        ]
    }
}

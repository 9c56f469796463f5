//! # Calluna
//!
//! A text analytics library for Rust.
//!
//! Calluna computes lexical, sentiment, and readability metrics for a
//! batch of plain-text articles and merges the results into a tabular
//! report keyed by an external identifier.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Unicode-aware word and sentence segmentation
//! - Sentiment scoring against curated polarity word lists
//! - Gunning-Fog readability estimation with heuristic syllable counting
//! - CSV report generation with left-join merge semantics
//!
//! ## Example
//!
//! ```
//! use ahash::AHashSet;
//! use calluna::{Engine, Lexicon};
//!
//! fn set(words: &[&str]) -> AHashSet<String> {
//!     words.iter().map(|w| w.to_string()).collect()
//! }
//!
//! let lexicon = Lexicon::from_sets(set(&["the", "a"]), set(&["good"]), set(&["bad"]));
//! let engine = Engine::new(lexicon);
//!
//! let record = engine.analyze("The good cat is a bad dog.");
//! assert_eq!(record.positive_score, 1);
//! assert_eq!(record.negative_score, 1);
//! assert_eq!(record.word_count, 5);
//! ```

// Core modules
pub mod analysis;
pub mod corpus;
mod engine;
mod error;
pub mod lexicon;
pub mod metrics;
pub mod report;
mod util;

// Re-exports for the public API
pub use corpus::Article;
pub use engine::Engine;
pub use error::{CallunaError, Result};
pub use lexicon::{Lexicon, LexiconBuilder};
pub use metrics::record::{METRIC_COLUMNS, MetricRecord};
pub use report::{Report, ReferenceTable, merge};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Text analysis module for Calluna.
//!
//! This module provides the normalization stage of the metric pipeline:
//! breaking raw article text into word and sentence units and filtering
//! word tokens against a stop-word set.
//!
//! # Architecture
//!
//! The analysis flow is deliberately simple:
//!
//! ```text
//! Text → Word Tokenizer → Stop-Word Clean → Metric Calculators
//!      → Sentence Splitter ───────────────→ Readability Calculator
//! ```
//!
//! # Examples
//!
//! ```
//! use ahash::AHashSet;
//! use calluna::analysis::{clean, tokenize};
//!
//! let stop_words: AHashSet<String> = ["the".to_string()].into_iter().collect();
//! let tokens = tokenize("The quick fox.");
//! let cleaned = clean(&tokens, &stop_words);
//! assert_eq!(cleaned, vec!["quick", "fox"]);
//! ```

pub mod sentence;
pub mod tokenizer;

// Re-exports
pub use sentence::sentences;
pub use tokenizer::{clean, tokenize};

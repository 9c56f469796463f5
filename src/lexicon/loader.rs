//! Lexicon loading from stop-word directories and dictionary files.

use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashSet;

use crate::error::{CallunaError, Result};
use crate::lexicon::{Lexicon, stop_words};
use crate::util::io::read_lossy;

/// Builder that assembles a [`Lexicon`] from word-list files on disk.
///
/// Stop-word sources are applied before the polarity dictionaries, so a
/// word that appears in any stop-word source never reaches the positive
/// or negative set. List files hold one token per line; lines are trimmed
/// and lower-cased, empty lines are skipped, and undecodable bytes are
/// dropped silently.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    base: Vec<String>,
    stop_word_dirs: Vec<PathBuf>,
    positive_path: Option<PathBuf>,
    negative_path: Option<PathBuf>,
}

impl LexiconBuilder {
    /// Create a builder seeded with the built-in English stop-word list.
    pub fn new() -> Self {
        LexiconBuilder {
            base: stop_words::ENGLISH.iter().map(|w| w.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Create a builder with an empty base stop-word set.
    pub fn empty() -> Self {
        LexiconBuilder::default()
    }

    /// Add stop words directly to the base set.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add a directory of supplementary stop-word list files.
    ///
    /// Every regular file in the directory is read as a word list. The
    /// directory must exist when [`build`](Self::build) runs.
    pub fn stop_words_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.stop_word_dirs.push(path.as_ref().to_path_buf());
        self
    }

    /// Set the positive word dictionary file.
    pub fn positive_words(mut self, path: impl AsRef<Path>) -> Self {
        self.positive_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the negative word dictionary file.
    pub fn negative_words(mut self, path: impl AsRef<Path>) -> Self {
        self.negative_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read every configured source and assemble the lexicon.
    pub fn build(self) -> Result<Lexicon> {
        let mut stop_words: AHashSet<String> = self
            .base
            .iter()
            .map(|word| word.trim().to_lowercase())
            .collect();

        for dir in &self.stop_word_dirs {
            if !dir.is_dir() {
                return Err(CallunaError::not_found(format!(
                    "stop-word directory {} does not exist",
                    dir.display()
                )));
            }

            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                if !path.is_file() {
                    continue;
                }
                for line in read_lossy(&path)?.lines() {
                    let word = line.trim().to_lowercase();
                    if !word.is_empty() {
                        stop_words.insert(word);
                    }
                }
            }
        }

        let positive_words = match &self.positive_path {
            Some(path) => read_word_list(path, &stop_words)?,
            None => AHashSet::new(),
        };
        let negative_words = match &self.negative_path {
            Some(path) => read_word_list(path, &stop_words)?,
            None => AHashSet::new(),
        };

        log::debug!(
            "lexicon built: {} stop words, {} positive, {} negative",
            stop_words.len(),
            positive_words.len(),
            negative_words.len()
        );

        Ok(Lexicon::from_sets(
            stop_words,
            positive_words,
            negative_words,
        ))
    }
}

/// Read a one-word-per-line dictionary file, excluding stop words.
fn read_word_list(path: &Path, stop_words: &AHashSet<String>) -> Result<AHashSet<String>> {
    let mut words = AHashSet::new();

    for line in read_lossy(path)?.lines() {
        let word = line.trim().to_lowercase();
        if !word.is_empty() && !stop_words.contains(&word) {
            words.insert(word);
        }
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_build_unions_stop_word_sources() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "generic.txt", b"Down\nYonder\n");
        write_file(dir.path(), "names.txt", b"  smith  \n\n");

        let lexicon = LexiconBuilder::new()
            .stop_words_dir(dir.path())
            .build()
            .unwrap();

        // Base list plus both supplementary files, trimmed and lower-cased.
        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("down"));
        assert!(lexicon.is_stop_word("yonder"));
        assert!(lexicon.is_stop_word("smith"));
        assert!(!lexicon.is_stop_word("Smith"));
    }

    #[test]
    fn test_build_excludes_stop_words_from_dictionaries() {
        let dir = TempDir::new().unwrap();
        let positive = write_file(dir.path(), "positive-words.txt", b"good\nthe\nGREAT\n");
        let negative = write_file(dir.path(), "negative-words.txt", b"bad\na\n");

        let lexicon = LexiconBuilder::new()
            .positive_words(&positive)
            .negative_words(&negative)
            .build()
            .unwrap();

        assert!(lexicon.is_positive("good"));
        assert!(lexicon.is_positive("great"));
        assert!(!lexicon.is_positive("the"));
        assert!(lexicon.is_negative("bad"));
        assert!(!lexicon.is_negative("a"));
    }

    #[test]
    fn test_build_tolerates_undecodable_bytes() {
        let dir = TempDir::new().unwrap();
        let positive = write_file(dir.path(), "positive-words.txt", b"fine\n\xff\xfe\ngrand\n");

        let lexicon = LexiconBuilder::empty()
            .positive_words(&positive)
            .build()
            .unwrap();

        assert!(lexicon.is_positive("fine"));
        assert!(lexicon.is_positive("grand"));
        assert_eq!(lexicon.positive_count(), 2);
    }

    #[test]
    fn test_build_missing_stop_words_dir_is_fatal() {
        let result = LexiconBuilder::new()
            .stop_words_dir("/nonexistent/stopwords")
            .build();
        assert!(matches!(result, Err(CallunaError::NotFound(_))));
    }

    #[test]
    fn test_build_missing_dictionary_is_fatal() {
        let result = LexiconBuilder::new()
            .positive_words("/nonexistent/positive-words.txt")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_builder_has_no_base_list() {
        let lexicon = LexiconBuilder::empty().build().unwrap();
        assert_eq!(lexicon.stop_word_count(), 0);
    }
}

//! Decode-tolerant file reading.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Read a file as UTF-8, dropping any byte sequences that do not decode.
///
/// Corpus articles and word-list files occasionally carry stray non-UTF-8
/// bytes; those bytes are skipped rather than surfaced as errors. A file
/// that cannot be opened still errors.
pub fn read_lossy(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            let text = String::from_utf8_lossy(err.as_bytes())
                .chars()
                .filter(|&c| c != char::REPLACEMENT_CHARACTER)
                .collect();
            Ok(text)
        }
    }
}

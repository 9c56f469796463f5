//! Corpus enumeration and decode-tolerant article loading.

use std::fs;
use std::path::Path;

use crate::error::{CallunaError, Result};
use crate::util::io::read_lossy;

/// A single plain-text article keyed by its external identifier.
///
/// Immutable once read; the analysis pipeline never mutates article
/// text.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// External identifier, derived from the source filename.
    pub id: String,
    /// Raw article text.
    pub text: String,
}

impl Article {
    /// Create an article from an identifier and its text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Article {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Derive the article identifier from a filename.
///
/// The identifier is the portion before the first `.`, so
/// `blackassign0001.txt` maps to `blackassign0001` and `12.3.txt` maps
/// to `12`.
pub fn article_id(file_name: &str) -> &str {
    match file_name.split_once('.') {
        Some((stem, _)) => stem,
        None => file_name,
    }
}

/// Read every `.txt` article in a directory.
///
/// Entries without a `.txt` extension are skipped. Undecodable bytes
/// inside an article are dropped; a missing or unreadable directory is a
/// fatal error.
pub fn read_dir(path: impl AsRef<Path>) -> Result<Vec<Article>> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(CallunaError::not_found(format!(
            "article directory {} does not exist",
            path.display()
        )));
    }

    let mut articles = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let file_path = entry.path();

        let is_txt = file_path.is_file()
            && file_path.extension().and_then(|ext| ext.to_str()) == Some("txt");
        if !is_txt {
            log::debug!("skipping non-article entry {}", file_path.display());
            continue;
        }

        let file_name = entry.file_name();
        let id = article_id(&file_name.to_string_lossy()).to_string();
        let text = read_lossy(&file_path)?;
        articles.push(Article { id, text });
    }

    Ok(articles)
}

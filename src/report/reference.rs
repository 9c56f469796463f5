//! Reference table parsing.

use std::path::Path;

use crate::error::{CallunaError, Result};

/// Header of the column holding the join identifier.
pub const ID_COLUMN: &str = "URL_ID";

/// The external reference table the report is keyed by.
///
/// All columns are carried through to the merged report; row order is
/// preserved exactly as read.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    id_index: usize,
}

impl ReferenceTable {
    /// Read a reference table from a CSV file.
    ///
    /// The header row must contain a `URL_ID` column; a table without
    /// one is a fatal configuration error.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        ReferenceTable::from_rows(headers, rows)
    }

    /// Build a table from in-memory headers and rows.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let id_index = headers
            .iter()
            .position(|header| header == ID_COLUMN)
            .ok_or_else(|| {
                CallunaError::invalid_config(format!(
                    "reference table has no {ID_COLUMN} column"
                ))
            })?;

        Ok(ReferenceTable {
            headers,
            rows,
            id_index,
        })
    }

    /// Column headers, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The identifier value of a row.
    pub fn row_id<'a>(&self, row: &'a [String]) -> &'a str {
        row.get(self.id_index).map(String::as_str).unwrap_or("")
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    fn table() -> ReferenceTable {
        ReferenceTable::from_rows(
            vec!["URL_ID".to_string(), "URL".to_string()],
            vec![
                vec!["1".to_string(), "https://example.com/a".to_string()],
                vec!["2".to_string(), "https://example.com/b".to_string()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_read_preserves_columns_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.csv");
        fs::write(
            &path,
            "URL_ID,URL,CATEGORY\n2,https://example.com/b,tech\n1,https://example.com/a,news\n",
        )
        .unwrap();

        let table = ReferenceTable::read(&path).unwrap();

        assert_eq!(table.headers(), &["URL_ID", "URL", "CATEGORY"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.row_id(&table.rows()[0]), "2");
        assert_eq!(table.row_id(&table.rows()[1]), "1");
    }

    #[test]
    fn test_missing_id_column_is_fatal() {
        let result = ReferenceTable::from_rows(
            vec!["ID".to_string(), "URL".to_string()],
            Vec::new(),
        );
        assert!(matches!(result, Err(CallunaError::InvalidConfig(_))));
    }

    #[test]
    fn test_row_id_on_short_row_is_empty() {
        let table = table();
        let short: Vec<String> = Vec::new();
        assert_eq!(table.row_id(&short), "");
    }
}

//! Left-join merge of metric records onto the reference table.

use std::path::Path;

use ahash::{AHashMap, AHashSet};

use crate::error::Result;
use crate::metrics::record::{METRIC_COLUMNS, MetricRecord};
use crate::report::reference::ReferenceTable;

/// The merged report: reference columns followed by metric columns.
#[derive(Debug, Clone)]
pub struct Report {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Left-join metric records onto the reference table.
///
/// Every reference row appears once, in its original order. Rows with no
/// matching record keep empty metric cells; records with no matching
/// reference row are dropped.
pub fn merge(reference: &ReferenceTable, records: &AHashMap<String, MetricRecord>) -> Report {
    let mut headers = reference.headers().to_vec();
    headers.extend(METRIC_COLUMNS.iter().map(|column| column.to_string()));

    let mut matched_ids: AHashSet<&str> = AHashSet::new();
    let mut rows = Vec::with_capacity(reference.len());
    for reference_row in reference.rows() {
        let id = reference.row_id(reference_row);
        let mut row = reference_row.clone();

        match records.get(id) {
            Some(record) => {
                matched_ids.insert(id);
                row.extend(record.to_fields());
            }
            None => row.extend(std::iter::repeat_n(String::new(), METRIC_COLUMNS.len())),
        }

        rows.push(row);
    }

    let dropped = records.len() - matched_ids.len();
    if dropped > 0 {
        log::warn!("{dropped} computed record(s) had no reference row and were dropped");
    }

    Report { headers, rows }
}

impl Report {
    /// Column headers, reference columns first.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in reference table order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the report as CSV to a file.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let writer = csv::Writer::from_path(path.as_ref())?;
        self.write_inner(writer)
    }

    /// Write the report as CSV to an arbitrary writer.
    pub fn write_to<W: std::io::Write>(&self, writer: W) -> Result<()> {
        self.write_inner(csv::Writer::from_writer(writer))
    }

    fn write_inner<W: std::io::Write>(&self, mut writer: csv::Writer<W>) -> Result<()> {
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

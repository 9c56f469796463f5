//! Report assembly for Calluna.
//!
//! This module joins computed metric records onto an external reference
//! table and writes the combined table as CSV. The join is a left join
//! keyed by `URL_ID`: every reference row appears in the output exactly
//! once, in its original order, whether or not a record was computed for
//! it.

pub mod merge;
pub mod reference;

// Re-exports
pub use merge::{Report, merge};
pub use reference::ReferenceTable;

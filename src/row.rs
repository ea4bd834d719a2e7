//! Materialized rows
//!
//! A [`RowRecord`] is one query-result row: a timestamp plus one
//! [`Field`] cell per selected column, in select order. The row pipeline
//! reuses records across rows, so the timestamp is settable and the cell
//! vector is reachable for rewriting.

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// One materialized query-result row.
///
/// # Examples
///
/// ```
/// use seriate::{Field, RowRecord};
///
/// let mut row = RowRecord::new(1_717_300_000_000);
/// row.push(Field::Int32(42));
/// row.push(Field::Null);
///
/// assert_eq!(row.len(), 2);
/// assert_eq!(row.to_string(), "1717300000000\t42\tnull");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    timestamp: i64,
    fields: Vec<Field>,
}

impl RowRecord {
    /// Create an empty row at `timestamp`
    pub fn new(timestamp: i64) -> Self {
        RowRecord {
            timestamp,
            fields: Vec::new(),
        }
    }

    /// Create a row at `timestamp` with its cells already materialized
    pub fn with_fields(timestamp: i64, fields: Vec<Field>) -> Self {
        RowRecord { timestamp, fields }
    }

    /// The row's timestamp
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Move this record to another row's timestamp (records are reused
    /// across rows)
    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = timestamp;
    }

    /// The cells, in select order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Mutable access to the cells, for rewriting in place
    pub fn fields_mut(&mut self) -> &mut Vec<Field> {
        &mut self.fields
    }

    /// Append a cell
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check if every cell is null.
    ///
    /// A row with no cells counts as all-null; scans use this to drop
    /// rows where no selected column had a value.
    pub fn is_all_null(&self) -> bool {
        self.fields.iter().all(Field::is_null)
    }
}

impl std::fmt::Display for RowRecord {
    /// Render as the timestamp followed by each cell, tab-separated
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.timestamp)?;
        for field in &self.fields {
            write!(f, "\t{}", field)?;
        }
        Ok(())
    }
}

impl IntoIterator for RowRecord {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a RowRecord {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

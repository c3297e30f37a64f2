//! Row Store
//!
//! Owns the dataset being displayed and edited. Rows are never added or
//! removed; single fields may be replaced.

use std::ops::Range;

use snafu::ensure;
use tracing::debug;

use crate::domain::{Row, Scalar};
use crate::error::{OutOfRangeSnafu, Result};

/// A row together with its absolute position in the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedRow<'a> {
    pub index: usize,
    pub row: &'a Row,
}

/// Simple in-memory row store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Get the total number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by absolute index
    pub fn get_row(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or_else(|| {
            OutOfRangeSnafu {
                index,
                len: self.rows.len(),
            }
            .build()
        })
    }

    /// Replace `row[key]`, inserting the field if the row lacks it.
    /// Returns the previous value.
    pub fn set_field(&mut self, index: usize, key: &str, value: Scalar) -> Result<Option<Scalar>> {
        let len = self.rows.len();
        ensure!(index < len, OutOfRangeSnafu { index, len });

        let previous = self.rows[index].insert(key, value);
        debug!(index, key, "Row field updated");
        Ok(previous)
    }

    /// Rows in `range` (truncated at the row count), with absolute indices
    pub fn page(&self, range: Range<usize>) -> impl Iterator<Item = IndexedRow<'_>> {
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        self.rows[start..end]
            .iter()
            .enumerate()
            .map(move |(offset, row)| IndexedRow {
                index: start + offset,
                row,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn store(n: usize) -> RowStore {
        RowStore::new(
            (1..=n)
                .map(|i| Row::new().with("id", i).with("name", format!("User {i}")))
                .collect(),
        )
    }

    #[test]
    fn test_get_row_bounds() {
        let s = store(3);
        assert!(s.get_row(2).is_ok());
        assert!(matches!(
            s.get_row(3),
            Err(Error::OutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_set_field_out_of_range_leaves_store() {
        let mut s = store(2);
        let before = s.clone();
        let result = s.set_field(5, "name", Scalar::from("x"));
        assert!(matches!(result, Err(Error::OutOfRange { index: 5, len: 2 })));
        assert_eq!(s, before);
    }

    #[test]
    fn test_set_field_inserts_new_key() {
        let mut s = store(1);
        let previous = s.set_field(0, "email", Scalar::from("a@x.com")).expect("in range");
        assert_eq!(previous, None);
        assert_eq!(
            s.get_row(0).expect("in range").get("email"),
            Some(&Scalar::from("a@x.com"))
        );
    }

    #[test]
    fn test_page_truncates_and_keeps_absolute_index() {
        let s = store(25);
        let indices: Vec<_> = s.page(20..30).map(|r| r.index).collect();
        assert_eq!(indices, vec![20, 21, 22, 23, 24]);
        assert_eq!(s.page(40..50).count(), 0);
    }
}

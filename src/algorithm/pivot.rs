//! Two-way pivot of mean salary
//!
//! Row and column keys are the sorted distinct values of the two fields.
//! Every (row, column) pair has a cell; pairs without records hold
//! [`EMPTY_CELL`].

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::algorithm::statistics;
use crate::models::{Field, SalaryRecord};

/// Value stored for (row, column) pairs with no contributing records
pub const EMPTY_CELL: f64 = 0.0;

/// Mean salary per (row key, column key)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PivotTable {
    /// Row keys, ascending
    pub row_keys: Vec<String>,
    /// Column keys, ascending
    pub col_keys: Vec<String>,
    /// `cells[row][col]`
    pub cells: Vec<Vec<f64>>,
}

impl PivotTable {
    /// Whether the table has no rows or no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_keys.is_empty() || self.col_keys.is_empty()
    }

    /// Cell for a pair of keys, `None` if either key is unknown
    #[must_use]
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let r = self.row_keys.iter().position(|k| k == row)?;
        let c = self.col_keys.iter().position(|k| k == col)?;
        Some(self.cells[r][c])
    }

    /// Mean of a column across all rows, filled cells included
    ///
    /// `None` if the column does not exist.
    #[must_use]
    pub fn column_mean(&self, col: &str) -> Option<f64> {
        let c = self.col_keys.iter().position(|k| k == col)?;
        let column: Vec<f64> = self.cells.iter().map(|row| row[c]).collect();
        Some(statistics::mean(&column))
    }
}

/// Pivot mean salary by `row_field` x `col_field`
#[must_use]
pub fn pivot_mean(records: &[SalaryRecord], row_field: Field, col_field: Field) -> PivotTable {
    pivot_mean_by(records, |r| row_field.value_of(r).into_owned(), col_field)
}

/// Pivot mean salary with a computed row key
///
/// Used when rows are keyed by something derived from a record, such as a
/// normalized country code.
#[must_use]
pub fn pivot_mean_by<F>(records: &[SalaryRecord], row_key: F, col_field: Field) -> PivotTable
where
    F: Fn(&SalaryRecord) -> String,
{
    let mut sums: BTreeMap<(String, String), Vec<f64>> = BTreeMap::new();
    let mut rows = BTreeSet::new();
    let mut cols = BTreeSet::new();

    for record in records {
        let row = row_key(record);
        let col = col_field.value_of(record).into_owned();
        rows.insert(row.clone());
        cols.insert(col.clone());
        sums.entry((row, col)).or_default().push(record.salary_usd);
    }

    let row_keys: Vec<String> = rows.into_iter().collect();
    let col_keys: Vec<String> = cols.into_iter().collect();
    let cells = row_keys
        .iter()
        .map(|row| {
            col_keys
                .iter()
                .map(|col| {
                    sums.get(&(row.clone(), col.clone()))
                        .map_or(EMPTY_CELL, |values| statistics::mean(values))
                })
                .collect()
        })
        .collect();

    PivotTable {
        row_keys,
        col_keys,
        cells,
    }
}

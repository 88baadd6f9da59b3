//! Group-by aggregations over a single field
//!
//! Groups are keyed by the string form of the field value. Ranking is always
//! deterministic: equal means (or counts) fall back to the group key in
//! ascending order, whatever the primary direction.

use std::cmp::Ordering;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::statistics;
use crate::models::{Field, SalaryRecord, SortOrder};

/// Mean salary and size of one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    /// Group key (field value)
    pub key: String,
    /// Mean salary of the group
    pub mean: f64,
    /// Number of records in the group
    pub count: usize,
}

/// Salaries of every record, bucketed by the value of `field`
#[must_use]
pub fn group_salaries(records: &[SalaryRecord], field: Field) -> FxHashMap<String, Vec<f64>> {
    let mut groups: FxHashMap<String, Vec<f64>> = FxHashMap::default();
    for record in records {
        groups
            .entry(field.value_of(record).into_owned())
            .or_default()
            .push(record.salary_usd);
    }
    groups
}

/// One row per distinct value of `field` with mean salary and row count
///
/// Rows come back sorted by key so output is reproducible; callers re-sort
/// as they need.
#[must_use]
pub fn group_mean(records: &[SalaryRecord], field: Field) -> Vec<GroupRow> {
    group_salaries(records, field)
        .into_iter()
        .map(|(key, salaries)| GroupRow {
            mean: statistics::mean(&salaries),
            count: salaries.len(),
            key,
        })
        .sorted_by(|a, b| a.key.cmp(&b.key))
        .collect()
}

/// Order two rows by mean in `order`, then by key ascending
#[must_use]
pub fn compare_by_mean(a: &GroupRow, b: &GroupRow, order: SortOrder) -> Ordering {
    let primary = match order {
        SortOrder::Ascending => a.mean.total_cmp(&b.mean),
        SortOrder::Descending => b.mean.total_cmp(&a.mean),
    };
    primary.then_with(|| a.key.cmp(&b.key))
}

/// The `n` groups with the highest (or lowest) mean salary
#[must_use]
pub fn top_n_by_mean(
    records: &[SalaryRecord],
    field: Field,
    n: usize,
    order: SortOrder,
) -> Vec<GroupRow> {
    group_mean(records, field)
        .into_iter()
        .sorted_by(|a, b| compare_by_mean(a, b, order))
        .take(n)
        .collect()
}

/// The `n` groups with the most records, ties by key ascending
#[must_use]
pub fn top_n_by_count(records: &[SalaryRecord], field: Field, n: usize) -> Vec<GroupRow> {
    group_mean(records, field)
        .into_iter()
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)))
        .take(n)
        .collect()
}

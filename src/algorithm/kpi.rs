//! Headline indicators for a dataset

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::statistics;
use crate::models::SalaryRecord;

/// Placeholder returned when no role can be reported
pub const NOT_AVAILABLE: &str = "N/A";

/// Overall salary indicators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    /// Mean salary (`0.0` when empty)
    pub mean: f64,
    /// Highest salary (`0.0` when empty)
    pub max: f64,
    /// Median salary (`0.0` when empty)
    pub median: f64,
    /// Number of records
    pub count: usize,
    /// Most frequent role ([`NOT_AVAILABLE`] when empty)
    pub top_role: String,
}

/// Compute the headline indicators
///
/// Role frequency ties go to the alphabetically first role.
#[must_use]
pub fn kpis(records: &[SalaryRecord]) -> Kpis {
    let salaries: Vec<f64> = records.iter().map(|r| r.salary_usd).collect();

    Kpis {
        mean: statistics::mean(&salaries),
        max: statistics::max(&salaries),
        median: statistics::median(&salaries),
        count: records.len(),
        top_role: most_frequent(records.iter().map(|r| r.role.as_str()))
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
    }
}

/// Most frequent value, ties broken by the smallest value
#[must_use]
pub fn most_frequent<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    counts
        .into_iter()
        .sorted_by(|(a_key, a_count), (b_key, b_count)| {
            b_count.cmp(a_count).then_with(|| a_key.cmp(b_key))
        })
        .map(|(key, _)| key)
        .next()
}

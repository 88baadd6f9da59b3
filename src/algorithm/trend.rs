//! Year-over-year salary trend

use std::collections::BTreeMap;

use serde::Serialize;

use crate::algorithm::statistics;
use crate::models::SalaryRecord;

/// Salary summary for one year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyStat {
    /// Observation year
    pub year: i32,
    /// Mean salary
    pub mean: f64,
    /// Median salary
    pub median: f64,
    /// Number of records
    pub count: usize,
}

/// Mean, median and count per year, ascending by year
#[must_use]
pub fn yearly_trend(records: &[SalaryRecord]) -> Vec<YearlyStat> {
    let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for record in records {
        by_year.entry(record.year).or_default().push(record.salary_usd);
    }

    by_year
        .into_iter()
        .map(|(year, salaries)| YearlyStat {
            year,
            mean: statistics::mean(&salaries),
            median: statistics::median(&salaries),
            count: salaries.len(),
        })
        .collect()
}

/// Growth of the mean salary from the first to the last year, in percent
///
/// `(mean[last] / mean[first] - 1) * 100`. A single year, an empty trend or
/// a zero first-year mean all give `0.0`.
#[must_use]
pub fn growth_pct(trend: &[YearlyStat]) -> f64 {
    match (trend.first(), trend.last()) {
        (Some(first), Some(last)) if first.year != last.year => {
            statistics::percent_change(first.mean, last.mean).unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

//! Salary distribution: histogram bins and box-plot summary

use serde::Serialize;

use crate::algorithm::statistics;
use crate::models::SalaryRecord;

/// One histogram bin covering `[lower, upper)` (the last bin is closed)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge
    pub upper: f64,
    /// Records falling in the bin
    pub count: usize,
}

/// Largest number of histogram bins; larger requests are capped to it
pub const MAX_BINS: usize = 1_000;

/// Equal-width histogram of salaries over `[min, max]`
///
/// Empty input or `bins == 0` gives no bins. When every salary is equal a
/// single zero-width bin holds all records. At most [`MAX_BINS`] bins are
/// produced.
#[must_use]
pub fn histogram(records: &[SalaryRecord], bins: usize) -> Vec<HistogramBin> {
    if records.is_empty() || bins == 0 {
        return Vec::new();
    }
    let bins = bins.min(MAX_BINS);

    let salaries: Vec<f64> = records.iter().map(|r| r.salary_usd).collect();
    let lo = statistics::min(&salaries);
    let hi = statistics::max(&salaries);

    if hi <= lo {
        return vec![HistogramBin {
            lower: lo,
            upper: hi,
            count: salaries.len(),
        }];
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for salary in salaries {
        let idx = (((salary - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}

/// Box-plot summary of salaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    /// Smallest salary
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Largest salary
    pub max: f64,
    /// Lowest salary within `q1 - 1.5 * IQR`
    pub lower_whisker: f64,
    /// Highest salary within `q3 + 1.5 * IQR`
    pub upper_whisker: f64,
    /// Salaries outside the whiskers
    pub outliers: usize,
}

/// Quartiles, Tukey whiskers and outlier count; `None` for empty input
#[must_use]
pub fn box_stats(records: &[SalaryRecord]) -> Option<BoxStats> {
    if records.is_empty() {
        return None;
    }

    let sorted = statistics::sorted(&records.iter().map(|r| r.salary_usd).collect::<Vec<_>>());
    let q1 = statistics::quantile_sorted(&sorted, 0.25);
    let median = statistics::quantile_sorted(&sorted, 0.5);
    let q3 = statistics::quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let inside: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|v| (low_fence..=high_fence).contains(v))
        .collect();

    Some(BoxStats {
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
        lower_whisker: inside.first().copied().unwrap_or(q1),
        upper_whisker: inside.last().copied().unwrap_or(q3),
        outliers: sorted.len() - inside.len(),
    })
}

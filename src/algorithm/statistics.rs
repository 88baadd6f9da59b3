//! Salary statistics helpers
//!
//! Small numeric building blocks shared by the aggregations. Every function
//! is total: empty input and zero denominators produce a defined value
//! instead of `NaN` or infinity.

/// Arithmetic mean, `0.0` for an empty slice
///
/// The result is kept within `[min, max]` of the input; summation rounding
/// can otherwise push the mean of repeated fractional values past them.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let raw = values.iter().sum::<f64>() / values.len() as f64;
    raw.max(min(values)).min(max(values))
}

/// Largest value, `0.0` for an empty slice
#[must_use]
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Smallest value, `0.0` for an empty slice
#[must_use]
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Sorted copy of `values`
#[must_use]
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Median, `0.0` for an empty slice
///
/// Even-length input averages the two middle values.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    quantile_sorted(&sorted(values), 0.5)
}

/// Quantile of already sorted values using linear interpolation
///
/// `q` is clamped to `[0, 1]`; an empty slice yields `0.0`.
#[must_use]
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let weight = pos - lower as f64;
            let (lo, hi) = (sorted[lower], sorted[upper]);
            (lo + (hi - lo) * weight).max(lo).min(hi)
        }
    }
}

/// Relative change from `base` to `value` in percent
///
/// Returns `None` when `base` is zero or any operand or the result is not
/// finite.
#[must_use]
pub fn percent_change(base: f64, value: f64) -> Option<f64> {
    if base == 0.0 || !base.is_finite() || !value.is_finite() {
        return None;
    }
    let pct = (value - base) / base * 100.0;
    pct.is_finite().then_some(pct)
}

/// Salary jump between two seniority means in percent: `(b - a) / a * 100`
///
/// A zero or non-finite `mean_a` yields `0.0`.
#[must_use]
pub fn seniority_jump_pct(mean_a: f64, mean_b: f64) -> f64 {
    percent_change(mean_a, mean_b).unwrap_or(0.0)
}

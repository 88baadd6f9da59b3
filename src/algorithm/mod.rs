//! Aggregation algorithms
//!
//! Pure functions over a (usually filtered) slice of salary records. None of
//! them fail: empty input and degenerate groups produce documented sentinel
//! values instead.

pub mod distribution;
pub mod grouping;
pub mod kpi;
pub mod pivot;
pub mod statistics;
pub mod trend;

pub use distribution::{BoxStats, HistogramBin, MAX_BINS, box_stats, histogram};
pub use grouping::{GroupRow, group_mean, top_n_by_count, top_n_by_mean};
pub use kpi::{Kpis, NOT_AVAILABLE, kpis};
pub use pivot::{EMPTY_CELL, PivotTable, pivot_mean, pivot_mean_by};
pub use statistics::{percent_change, seniority_jump_pct};
pub use trend::{YearlyStat, growth_pct, yearly_trend};

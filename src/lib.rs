//! A Rust library for filtering and aggregating salary datasets behind an
//! analytics dashboard.
//!
//! The dataset is loaded once from CSV, narrowed with a [`FilterSelection`]
//! and summarized into a serializable [`DashboardReport`]. Aggregations are
//! memoized per dataset fingerprint in an [`AggregationCache`].

pub mod algorithm;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod geo;
pub mod loader;
pub mod models;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{DashboardConfig, DashboardVariant, DashboardView, ViewSet};
pub use error::{Result, SalaryError};
pub use models::{Dataset, Field, SalaryRecord, SortOrder};
pub use schema::{Schema, SchemaCompatibilityReport, SchemaIssue};

// Dashboard
pub use cache::{AggregationCache, AggregationKey, CacheKey, CacheStats};
pub use dashboard::{Dashboard, DashboardReport, build_report};

// Filtering capabilities
pub use filter::{FilterOptions, FilterSelection, filter, filter_options};

// Aggregations
pub use algorithm::{
    GroupRow, Kpis, PivotTable, YearlyStat, group_mean, growth_pct, kpis, pivot_mean,
    seniority_jump_pct, top_n_by_mean, yearly_trend,
};
pub use geo::{EnrichedCountry, enrich};

// Input and output
pub use loader::{export_dataset, load_dataset, read_dataset, write_dataset};

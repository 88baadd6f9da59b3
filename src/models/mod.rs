//! Domain models for the salary dataset
//!
//! This module contains the record type, the column vocabulary shared by
//! filters and aggregations, and the immutable dataset container.

pub mod dataset;
pub mod record;
pub mod types;

// Re-export commonly used types
pub use dataset::Dataset;
pub use record::SalaryRecord;
pub use types::{Field, SortOrder};

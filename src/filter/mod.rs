//! Filtering capabilities for salary datasets
//!
//! This module narrows a [`Dataset`] before any aggregation runs. The
//! dashboard path goes through [`filter`] with a [`FilterSelection`]; the
//! combinators in [`core`] are available for ad-hoc criteria.

pub mod core;
pub mod selection;

pub use self::core::{
    AndFilter, ExcludeAllFilter, FilterCriteria, IncludeAllFilter, MembershipFilter, NotFilter,
    OrFilter, SharedFilter, YearFilter, apply_filters, filter_dataset,
};
pub use self::selection::{FilterOptions, FilterSelection};

use crate::models::Dataset;

/// Keep the records whose year, seniority, contract and company size are all
/// selected, in their original order
///
/// An empty set in any dimension yields an empty dataset; there is no
/// "empty means everything" shortcut.
#[must_use]
pub fn filter(dataset: &Dataset, selection: &FilterSelection) -> Dataset {
    if selection.has_empty_dimension() {
        log::debug!("Selection has an empty dimension, no record can pass");
    }
    filter_dataset(dataset, &selection.to_filter())
}

/// Sorted distinct values per filter dimension, plus the record count
#[must_use]
pub fn filter_options(dataset: &Dataset) -> FilterOptions {
    FilterOptions::from_dataset(dataset)
}

//! Core filtering functionality for salary records
//!
//! This module defines the filter trait, the basic combinators and the
//! function that narrows a [`Dataset`] with them. Filtering never mutates its
//! input: the result is a new dataset holding the matching records in their
//! original order.

use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use crate::models::{Dataset, Field, SalaryRecord};

/// Defines a criterion for keeping or dropping an entity
pub trait FilterCriteria<T>: Debug {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;

    /// Returns the set of fields this filter reads
    fn required_columns(&self) -> HashSet<Field>;
}

/// Shared, type-erased record filter
pub type SharedFilter = Arc<dyn FilterCriteria<SalaryRecord> + Send + Sync>;

/// A filter that always includes all rows
#[derive(Debug, Clone, Default)]
pub struct IncludeAllFilter;

impl FilterCriteria<SalaryRecord> for IncludeAllFilter {
    fn meets_criteria(&self, _entity: &SalaryRecord) -> bool {
        true
    }

    fn required_columns(&self) -> HashSet<Field> {
        HashSet::new()
    }
}

/// A filter that excludes all rows
#[derive(Debug, Clone, Default)]
pub struct ExcludeAllFilter;

impl FilterCriteria<SalaryRecord> for ExcludeAllFilter {
    fn meets_criteria(&self, _entity: &SalaryRecord) -> bool {
        false
    }

    fn required_columns(&self) -> HashSet<Field> {
        HashSet::new()
    }
}

/// Keeps records whose year is in a set
///
/// An empty set matches nothing.
#[derive(Debug, Clone)]
pub struct YearFilter {
    years: BTreeSet<i32>,
}

impl YearFilter {
    /// Create a new year membership filter
    #[must_use]
    pub fn new(years: impl IntoIterator<Item = i32>) -> Self {
        Self {
            years: years.into_iter().collect(),
        }
    }
}

impl FilterCriteria<SalaryRecord> for YearFilter {
    fn meets_criteria(&self, entity: &SalaryRecord) -> bool {
        self.years.contains(&entity.year)
    }

    fn required_columns(&self) -> HashSet<Field> {
        HashSet::from([Field::Year])
    }
}

/// Keeps records whose value for a text field is in a set
///
/// An empty set matches nothing.
#[derive(Debug, Clone)]
pub struct MembershipFilter {
    field: Field,
    allowed: BTreeSet<String>,
}

impl MembershipFilter {
    /// Create a new membership filter on `field`
    #[must_use]
    pub fn new<I, S>(field: Field, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field,
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl FilterCriteria<SalaryRecord> for MembershipFilter {
    fn meets_criteria(&self, entity: &SalaryRecord) -> bool {
        self.allowed.contains(self.field.value_of(entity).as_ref())
    }

    fn required_columns(&self) -> HashSet<Field> {
        HashSet::from([self.field])
    }
}

/// A filter that combines multiple filters with a logical AND
#[derive(Debug, Clone)]
pub struct AndFilter {
    filters: Vec<SharedFilter>,
}

impl AndFilter {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<SharedFilter>) -> Self {
        Self { filters }
    }
}

impl FilterCriteria<SalaryRecord> for AndFilter {
    fn meets_criteria(&self, entity: &SalaryRecord) -> bool {
        self.filters.iter().all(|f| f.meets_criteria(entity))
    }

    fn required_columns(&self) -> HashSet<Field> {
        self.filters
            .iter()
            .flat_map(|f| f.required_columns())
            .collect()
    }
}

/// A filter that combines multiple filters with a logical OR
#[derive(Debug, Clone)]
pub struct OrFilter {
    filters: Vec<SharedFilter>,
}

impl OrFilter {
    /// Create a new OR filter
    #[must_use]
    pub fn new(filters: Vec<SharedFilter>) -> Self {
        Self { filters }
    }
}

impl FilterCriteria<SalaryRecord> for OrFilter {
    fn meets_criteria(&self, entity: &SalaryRecord) -> bool {
        self.filters.iter().any(|f| f.meets_criteria(entity))
    }

    fn required_columns(&self) -> HashSet<Field> {
        self.filters
            .iter()
            .flat_map(|f| f.required_columns())
            .collect()
    }
}

/// A filter that applies the logical NOT to another filter
#[derive(Debug, Clone)]
pub struct NotFilter {
    filter: SharedFilter,
}

impl NotFilter {
    /// Create a new NOT filter
    #[must_use]
    pub fn new(filter: SharedFilter) -> Self {
        Self { filter }
    }
}

impl FilterCriteria<SalaryRecord> for NotFilter {
    fn meets_criteria(&self, entity: &SalaryRecord) -> bool {
        !self.filter.meets_criteria(entity)
    }

    fn required_columns(&self) -> HashSet<Field> {
        self.filter.required_columns()
    }
}

/// Keep the records of `dataset` that meet `filter`, preserving order
#[must_use]
pub fn filter_dataset<F>(dataset: &Dataset, filter: &F) -> Dataset
where
    F: FilterCriteria<SalaryRecord> + ?Sized,
{
    let kept: Vec<SalaryRecord> = dataset
        .iter()
        .filter(|record| filter.meets_criteria(record))
        .cloned()
        .collect();

    log::debug!(
        "Filter kept {} of {} records (columns: {:?})",
        kept.len(),
        dataset.len(),
        filter.required_columns()
    );

    dataset.derive(kept)
}

/// Apply multiple filters to a dataset in conjunction
#[must_use]
pub fn apply_filters(dataset: &Dataset, filters: &[SharedFilter]) -> Dataset {
    filter_dataset(dataset, &AndFilter::new(filters.to_vec()))
}

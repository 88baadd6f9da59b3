//! Filter selections made on the dashboard
//!
//! A [`FilterSelection`] holds one set of allowed values for each filterable
//! dimension (year, seniority, contract, company size). A record passes when
//! its value for every dimension is a member of the corresponding set, so an
//! empty set in any dimension lets nothing through.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::filter::core::{AndFilter, MembershipFilter, SharedFilter, YearFilter};
use crate::models::{Dataset, Field};

/// Allowed values per filterable dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Allowed observation years
    pub years: BTreeSet<i32>,
    /// Allowed seniority levels
    pub seniority: BTreeSet<String>,
    /// Allowed contract types
    pub contract: BTreeSet<String>,
    /// Allowed company sizes
    pub company_size: BTreeSet<String>,
}

impl FilterSelection {
    /// Select every value present in `dataset`, the dashboard's initial state
    #[must_use]
    pub fn all(dataset: &Dataset) -> Self {
        let options = FilterOptions::from_dataset(dataset);
        Self {
            years: options.years.into_iter().collect(),
            seniority: options.seniority.into_iter().collect(),
            contract: options.contract.into_iter().collect(),
            company_size: options.company_size.into_iter().collect(),
        }
    }

    /// Replace the allowed years
    #[must_use]
    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    /// Replace the allowed seniority levels
    #[must_use]
    pub fn with_seniority<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.seniority = values.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the allowed contract types
    #[must_use]
    pub fn with_contract<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.contract = values.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the allowed company sizes
    #[must_use]
    pub fn with_company_size<S: Into<String>>(
        mut self,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.company_size = values.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any dimension has nothing selected
    #[must_use]
    pub fn has_empty_dimension(&self) -> bool {
        self.years.is_empty()
            || self.seniority.is_empty()
            || self.contract.is_empty()
            || self.company_size.is_empty()
    }

    /// Lower the selection into a conjunction of membership filters
    #[must_use]
    pub fn to_filter(&self) -> AndFilter {
        let filters: Vec<SharedFilter> = vec![
            Arc::new(YearFilter::new(self.years.iter().copied())),
            Arc::new(MembershipFilter::new(
                Field::Seniority,
                self.seniority.iter().cloned(),
            )),
            Arc::new(MembershipFilter::new(
                Field::Contract,
                self.contract.iter().cloned(),
            )),
            Arc::new(MembershipFilter::new(
                Field::CompanySize,
                self.company_size.iter().cloned(),
            )),
        ];
        AndFilter::new(filters)
    }
}

/// Values available for each filterable dimension, sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct years
    pub years: Vec<i32>,
    /// Distinct seniority levels
    pub seniority: Vec<String>,
    /// Distinct contract types
    pub contract: Vec<String>,
    /// Distinct company sizes
    pub company_size: Vec<String>,
    /// Number of records in the unfiltered dataset
    pub total_records: usize,
}

impl FilterOptions {
    /// Collect the options offered for `dataset`
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            years: dataset.distinct_years(),
            seniority: dataset.distinct_values(Field::Seniority),
            contract: dataset.distinct_values(Field::Contract),
            company_size: dataset.distinct_values(Field::CompanySize),
            total_records: dataset.len(),
        }
    }
}

//! Immutable salary dataset
//!
//! A [`Dataset`] is an ordered sequence of [`SalaryRecord`]s together with
//! the [`Schema`] it was read with. Records are shared behind an [`Arc`], so
//! cloning a dataset is cheap and filtering always produces a new dataset
//! rather than touching the original.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use itertools::Itertools;
use rustc_hash::FxHasher;

use crate::models::{Field, SalaryRecord};
use crate::schema::Schema;

/// An ordered, read-only collection of salary records
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: Arc<Schema>,
    records: Arc<[SalaryRecord]>,
    fingerprint: u64,
}

impl Dataset {
    /// Create a dataset with the canonical schema
    #[must_use]
    pub fn new(records: Vec<SalaryRecord>) -> Self {
        Self::with_schema(Schema::canonical(), records)
    }

    /// Create a dataset that remembers the layout of the file it came from
    #[must_use]
    pub fn with_schema(schema: Schema, records: Vec<SalaryRecord>) -> Self {
        Self::from_parts(Arc::new(schema), records)
    }

    fn from_parts(schema: Arc<Schema>, records: Vec<SalaryRecord>) -> Self {
        let fingerprint = fingerprint_of(&schema, &records);
        Self {
            schema,
            records: records.into(),
            fingerprint,
        }
    }

    /// Create an empty dataset sharing this dataset's schema
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self::from_parts(Arc::clone(&self.schema), Vec::new())
    }

    /// Build a derived dataset (same schema) from a subset of records
    #[must_use]
    pub fn derive(&self, records: Vec<SalaryRecord>) -> Self {
        Self::from_parts(Arc::clone(&self.schema), records)
    }

    /// Schema the dataset was read with
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// All records in file order
    #[must_use]
    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    /// Content hash identifying this dataset for memoization
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Distinct years, ascending
    #[must_use]
    pub fn distinct_years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).unique().sorted().collect()
    }

    /// Distinct values of a field, sorted ascending
    #[must_use]
    pub fn distinct_values(&self, field: Field) -> Vec<String> {
        self.records
            .iter()
            .map(|r| field.value_of(r).into_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for Dataset {
    type Target = [SalaryRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
            && self.schema == other.schema
            && self.records == other.records
    }
}

impl FromIterator<SalaryRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = SalaryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn fingerprint_of(schema: &Schema, records: &[SalaryRecord]) -> u64 {
    let mut hasher = FxHasher::default();
    schema.columns().hash(&mut hasher);
    records.len().hash(&mut hasher);
    for record in records {
        record.year.hash(&mut hasher);
        record.role.hash(&mut hasher);
        record.seniority.hash(&mut hasher);
        record.contract.hash(&mut hasher);
        record.company_size.hash(&mut hasher);
        record.residence.hash(&mut hasher);
        record.company.hash(&mut hasher);
        record.work_modality.hash(&mut hasher);
        record.salary_usd.to_bits().hash(&mut hasher);
        record.extra.hash(&mut hasher);
    }
    hasher.finish()
}

//! Common domain type definitions
//!
//! This module names the columns of a salary record so that filters,
//! group-by operations and the CSV layer all refer to them the same way.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SalaryError;
use crate::models::record::SalaryRecord;

/// A column of the salary dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Observation year
    Year,
    /// Job title
    Role,
    /// Experience level
    Seniority,
    /// Contract type
    Contract,
    /// Company size bucket
    CompanySize,
    /// Two-letter residence country code
    Residence,
    /// Company name
    Company,
    /// Remote / on-site / hybrid
    WorkModality,
    /// Salary normalized to USD
    Salary,
}

impl Field {
    /// Every required column, in the canonical export order
    pub const REQUIRED: [Self; 9] = [
        Self::Year,
        Self::Role,
        Self::Seniority,
        Self::Contract,
        Self::CompanySize,
        Self::Residence,
        Self::Company,
        Self::WorkModality,
        Self::Salary,
    ];

    /// Dimensions a [`FilterSelection`](crate::filter::FilterSelection) constrains
    pub const FILTERABLE: [Self; 4] = [
        Self::Year,
        Self::Seniority,
        Self::Contract,
        Self::CompanySize,
    ];

    /// Header name of the column in the input file
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Year => "ano",
            Self::Role => "cargo",
            Self::Seniority => "senioridade",
            Self::Contract => "contrato",
            Self::CompanySize => "tamanho_empresa",
            Self::Residence => "residencia",
            Self::Company => "empresa",
            Self::WorkModality => "remoto",
            Self::Salary => "usd",
        }
    }

    /// Value of this field for a record, as used for grouping keys
    #[must_use]
    pub fn value_of(self, record: &SalaryRecord) -> Cow<'_, str> {
        match self {
            Self::Year => Cow::Owned(record.year.to_string()),
            Self::Role => Cow::Borrowed(&record.role),
            Self::Seniority => Cow::Borrowed(&record.seniority),
            Self::Contract => Cow::Borrowed(&record.contract),
            Self::CompanySize => Cow::Borrowed(&record.company_size),
            Self::Residence => Cow::Borrowed(&record.residence),
            Self::Company => Cow::Borrowed(&record.company),
            Self::WorkModality => Cow::Borrowed(&record.work_modality),
            Self::Salary => Cow::Owned(record.salary_usd.to_string()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Field {
    type Err = SalaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ano" | "year" => Ok(Self::Year),
            "cargo" | "role" => Ok(Self::Role),
            "senioridade" | "seniority" => Ok(Self::Seniority),
            "contrato" | "contract" => Ok(Self::Contract),
            "tamanho_empresa" | "company_size" => Ok(Self::CompanySize),
            "residencia" | "residence" => Ok(Self::Residence),
            "empresa" | "company" => Ok(Self::Company),
            "remoto" | "work_modality" | "modality" => Ok(Self::WorkModality),
            "usd" | "salary" => Ok(Self::Salary),
            other => Err(SalaryError::config(format!("Unknown field: {other}"))),
        }
    }
}

/// Direction used when ranking groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first
    Ascending,
    /// Largest first
    #[default]
    Descending,
}

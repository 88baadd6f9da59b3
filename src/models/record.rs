//! Salary record model
//!
//! One employment observation as read from the dataset file.

use serde::Serialize;

/// A single salary observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRecord {
    /// Observation year
    pub year: i32,
    /// Job title
    pub role: String,
    /// Experience level (values come from the data)
    pub seniority: String,
    /// Contract type
    pub contract: String,
    /// Company size bucket
    pub company_size: String,
    /// Two-letter residence country code
    pub residence: String,
    /// Company name
    pub company: String,
    /// Work modality (values come from the data)
    pub work_modality: String,
    /// Salary normalized to USD
    pub salary_usd: f64,
    /// Values of columns the library does not interpret, in file order
    #[serde(skip)]
    pub extra: Vec<String>,
}

impl SalaryRecord {
    /// Create a record with the fields most aggregations need
    ///
    /// Remaining text fields start empty and can be set with the `with_*`
    /// methods.
    #[must_use]
    pub fn new(year: i32, seniority: impl Into<String>, salary_usd: f64) -> Self {
        Self {
            year,
            role: String::new(),
            seniority: seniority.into(),
            contract: String::new(),
            company_size: String::new(),
            residence: String::new(),
            company: String::new(),
            work_modality: String::new(),
            salary_usd,
            extra: Vec::new(),
        }
    }

    /// Set the job title
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Set the contract type
    #[must_use]
    pub fn with_contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = contract.into();
        self
    }

    /// Set the company size bucket
    #[must_use]
    pub fn with_company_size(mut self, size: impl Into<String>) -> Self {
        self.company_size = size.into();
        self
    }

    /// Set the residence country code
    #[must_use]
    pub fn with_residence(mut self, code: impl Into<String>) -> Self {
        self.residence = code.into();
        self
    }

    /// Set the company name
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Set the work modality
    #[must_use]
    pub fn with_work_modality(mut self, modality: impl Into<String>) -> Self {
        self.work_modality = modality.into();
        self
    }
}

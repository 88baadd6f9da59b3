//! Module for handling the column layout of salary dataset files.
//!
//! A [`Schema`] records the header of an input file: the position of every
//! required column plus any additional columns, which are carried through
//! untouched so that an export reproduces the original layout.

use csv::StringRecord;

use crate::error::{Result, SalaryError};
use crate::models::{Field, SalaryRecord};

const REQUIRED_COLUMNS: usize = Field::REQUIRED.len();

/// A struct that represents how a header lines up with the required columns
#[derive(Debug)]
pub struct SchemaCompatibilityReport {
    /// Whether every required column is present
    pub compatible: bool,
    /// List of incompatibility issues, if any
    pub issues: Vec<SchemaIssue>,
}

/// A schema compatibility issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// The column the issue is about
    pub column: String,
    /// Description of the incompatibility
    pub description: String,
}

/// Checks a header against the required columns
#[must_use]
pub fn check_header(header: &StringRecord) -> SchemaCompatibilityReport {
    let mut issues = Vec::new();

    for field in Field::REQUIRED {
        let name = field.column_name();
        match header.iter().filter(|h| *h == name).count() {
            0 => issues.push(SchemaIssue {
                column: name.to_string(),
                description: format!("Required column '{name}' is missing"),
            }),
            1 => {}
            n => issues.push(SchemaIssue {
                column: name.to_string(),
                description: format!("Column '{name}' appears {n} times"),
            }),
        }
    }

    SchemaCompatibilityReport {
        compatible: issues.is_empty(),
        issues,
    }
}

/// Column layout of a dataset file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    /// Position of each entry of [`Field::REQUIRED`] within `columns`
    positions: [usize; REQUIRED_COLUMNS],
}

impl Default for Schema {
    fn default() -> Self {
        Self::canonical()
    }
}

impl Schema {
    /// Schema holding exactly the required columns in canonical order
    #[must_use]
    pub fn canonical() -> Self {
        let columns = Field::REQUIRED
            .iter()
            .map(|f| f.column_name().to_string())
            .collect();
        let mut positions = [0; REQUIRED_COLUMNS];
        for (i, slot) in positions.iter_mut().enumerate() {
            *slot = i;
        }
        Self { columns, positions }
    }

    /// Build a schema from a file header
    ///
    /// Column names are case-sensitive. The first missing required column is
    /// reported as [`SalaryError::MissingColumn`].
    pub fn from_header(header: &StringRecord, source_name: &str) -> Result<Self> {
        let mut positions = [0; REQUIRED_COLUMNS];
        for (slot, field) in positions.iter_mut().zip(Field::REQUIRED) {
            *slot = header
                .iter()
                .position(|h| h == field.column_name())
                .ok_or_else(|| SalaryError::MissingColumn {
                    column: field.column_name(),
                    source_name: source_name.to_string(),
                })?;
        }

        Ok(Self {
            columns: header.iter().map(str::to_string).collect(),
            positions,
        })
    }

    /// Column names in file order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a required column
    #[must_use]
    pub fn index_of(&self, field: Field) -> usize {
        let slot = Field::REQUIRED
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default();
        self.positions[slot]
    }

    /// Number of columns the library does not interpret
    #[must_use]
    pub fn extra_column_count(&self) -> usize {
        self.columns.len() - REQUIRED_COLUMNS
    }

    fn is_required_position(&self, idx: usize) -> bool {
        self.positions.contains(&idx)
    }

    fn value_in<'r>(&self, row: &'r StringRecord, field: Field, line: u64) -> Result<&'r str> {
        row.get(self.index_of(field))
            .ok_or_else(|| SalaryError::InvalidRecord {
                line,
                message: format!("missing value for '{field}'"),
            })
    }

    /// Convert one data row into a record
    ///
    /// `line` is only used for error reporting.
    pub fn parse_row(&self, row: &StringRecord, line: u64) -> Result<SalaryRecord> {
        let get = |field: Field| self.value_in(row, field, line);

        let year_raw = get(Field::Year)?;
        let year = year_raw
            .trim()
            .parse::<i32>()
            .map_err(|e| SalaryError::InvalidRecord {
                line,
                message: format!("invalid year '{year_raw}': {e}"),
            })?;

        let salary_raw = get(Field::Salary)?;
        let salary_usd = salary_raw
            .trim()
            .parse::<f64>()
            .map_err(|e| SalaryError::InvalidRecord {
                line,
                message: format!("invalid salary '{salary_raw}': {e}"),
            })?;
        if !salary_usd.is_finite() || salary_usd < 0.0 {
            return Err(SalaryError::InvalidRecord {
                line,
                message: format!("salary must be a non-negative number, got '{salary_raw}'"),
            });
        }

        let extra = row
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.is_required_position(*idx))
            .map(|(_, value)| value.to_string())
            .collect();

        Ok(SalaryRecord {
            year,
            role: get(Field::Role)?.to_string(),
            seniority: get(Field::Seniority)?.to_string(),
            contract: get(Field::Contract)?.to_string(),
            company_size: get(Field::CompanySize)?.to_string(),
            residence: get(Field::Residence)?.to_string(),
            company: get(Field::Company)?.to_string(),
            work_modality: get(Field::WorkModality)?.to_string(),
            salary_usd,
            extra,
        })
    }

    /// Lay a record out in this schema's column order
    ///
    /// Extra columns the record has no value for are written empty.
    #[must_use]
    pub fn format_row(&self, record: &SalaryRecord) -> Vec<String> {
        let mut extras = record.extra.iter();
        (0..self.columns.len())
            .map(|idx| {
                match Field::REQUIRED
                    .iter()
                    .zip(self.positions)
                    .find(|(_, pos)| *pos == idx)
                {
                    Some((field, _)) => field.value_of(record).into_owned(),
                    None => extras.next().cloned().unwrap_or_default(),
                }
            })
            .collect()
    }
}

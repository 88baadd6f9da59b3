//! Error handling for salary dataset loading and export.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for the salary insights library
#[derive(Debug, thiserror::Error)]
pub enum SalaryError {
    /// Error opening or reading a file
    #[error("IO error{}: {message}", display_path(.path.as_ref()))]
    Io {
        /// What went wrong
        message: String,
        /// File involved, if known
        path: Option<PathBuf>,
        /// Underlying IO error, if any
        #[source]
        source: Option<io::Error>,
    },

    /// Error parsing or writing delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the input header
    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn {
        /// Column name as it must appear in the header
        column: &'static str,
        /// Name of the input (path or reader label)
        source_name: String,
    },

    /// A row could not be converted into a record
    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord {
        /// 1-based line number in the input, header included
        line: u64,
        /// Description of the offending field
        message: String,
    },

    /// Error with configuration values or files
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error decoding a JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl SalaryError {
    /// Create an IO error from a message
    #[must_use]
    pub fn io_error(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an IO error wrapping an underlying [`io::Error`]
    #[must_use]
    pub fn io_error_with_source(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source: Some(source),
        }
    }

    /// Attach a path to an IO error; other variants are returned unchanged
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io {
                message, source, ..
            } => Self::Io {
                message,
                path: Some(file.into()),
                source,
            },
            other => other,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<io::Error> for SalaryError {
    fn from(error: io::Error) -> Self {
        Self::io_error_with_source(error.to_string(), error)
    }
}

/// Result type for salary insights operations
pub type Result<T> = std::result::Result<T, SalaryError>;
